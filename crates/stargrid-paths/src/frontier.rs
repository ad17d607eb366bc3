use std::collections::VecDeque;

use stargrid_core::Coord;

/// A cell paired with its Euclidean distance to the session target.
///
/// Used both as a frontier entry and as a route waypoint. Immutable once
/// created; a better candidate is represented by a new value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub pos: Coord,
    pub dist: f64,
}

impl PathPoint {
    /// Create a new path point.
    #[inline]
    pub fn new(pos: Coord, dist: f64) -> Self {
        Self { pos, dist }
    }
}

/// Working set of discovered-but-not-yet-expanded cells, approximately
/// ordered by distance to the target.
///
/// Insertion is a cheap local bias, not a priority queue: an entry goes to
/// the front when it is closer to the target than the point currently being
/// expanded, otherwise to the back. Only this local preference is
/// guaranteed; global order is not. A binary heap would change tie-breaking
/// and therefore the exact cells chosen on non-optimal detours, so the
/// legacy insertion rule is kept for route reproducibility.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<PathPoint>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the frontier with the query's start point.
    pub fn seed(&mut self, p: PathPoint) {
        self.queue.push_back(p);
    }

    /// Biased insert of a newly discovered point, relative to the distance
    /// of the point being expanded.
    pub fn insert(&mut self, p: PathPoint, expanding_dist: f64) {
        if p.dist < expanding_dist {
            self.queue.push_front(p);
        } else {
            self.queue.push_back(p);
        }
    }

    /// Pop the current head, if any.
    pub fn pop(&mut self) -> Option<PathPoint> {
        self.queue.pop_front()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_point_round_trip() {
        let p = PathPoint::new(Coord::new(3, 7), 4.25);
        let json = serde_json::to_string(&p).unwrap();
        let back: PathPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
