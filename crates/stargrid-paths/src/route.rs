//! Route reconstruction and stepwise consumption.
//!
//! Reconstruction is a greedy descent over the discovery-step gradient left
//! behind by the search, recomputed from the grid at every step — the
//! session stores no parent pointers.

use log::trace;
use stargrid_core::Coord;

use crate::distance::euclidean;
use crate::frontier::PathPoint;
use crate::session::{SearchSession, SessionState};

/// An ordered path from a successful search, target-first.
///
/// Built backward from the arrival cell down to (but excluding) the start
/// cell. The cursor starts at the last index — the move adjacent to the
/// start — and only ever decreases toward index 0, the arrival cell.
#[derive(Debug, Default)]
pub struct Route {
    points: Vec<PathPoint>,
    cursor: usize,
}

impl Route {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the route holds no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All waypoints, target-first.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }
}

impl SearchSession {
    /// Walk the discovery-step gradient backward from the arrival cell and
    /// record the resulting [`Route`].
    ///
    /// Only meaningful after a successful [`search`](SearchSession::search);
    /// otherwise a no-op. Idempotent: a route is built at most once.
    pub fn build_route(&mut self) {
        if self.state != SessionState::Found || !self.route.is_empty() {
            return;
        }
        // A trivial success (start already within tolerance) has no
        // arrival cell and keeps the empty route.
        let Some(arrival) = self.target_point else {
            return;
        };

        let mut points = vec![arrival];
        let mut best_step = self.grid.step_at(arrival.pos).unwrap_or(0);
        let mut cur = arrival.pos;

        loop {
            // Among the neighbors in the search's own enumeration order,
            // take the smallest discovered step strictly below the best so
            // far; ties fall to the smaller distance to target, then to
            // enumeration order.
            let mut next: Option<(PathPoint, u32)> = None;
            for &off in self.topology.offsets() {
                let n = cur + off;
                let Some(step) = self.grid.step_at(n) else {
                    continue;
                };
                if step >= best_step {
                    continue;
                }
                let d = euclidean(n, self.target);
                let better = match next {
                    None => true,
                    Some((bp, bs)) => step < bs || (step == bs && d < bp.dist),
                };
                if better {
                    next = Some((PathPoint::new(n, d), step));
                }
            }
            let Some((p, step)) = next else {
                break;
            };
            if step == 0 {
                // Reached the cell adjacent to the start; the start itself
                // is excluded from the route.
                break;
            }
            best_step = step;
            cur = p.pos;
            points.push(p);
        }

        trace!("route: {} waypoints from {}", points.len(), arrival.pos);
        let cursor = points.len() - 1;
        self.route = Route { points, cursor };
    }

    /// The reconstructed route, if any.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The next cell to move to, or `None` when no successful search and
    /// reconstruction produced a route.
    pub fn get_move(&self) -> Option<Coord> {
        self.route.points.get(self.route.cursor).map(|p| p.pos)
    }

    /// Advance consumption by one step toward the arrival cell.
    ///
    /// Decrements the cursor unless it already sits at the final move.
    pub fn next_move(&mut self) {
        if self.route.cursor > 0 {
            self.route.cursor -= 1;
        }
    }

    /// Whether the current move is the final one, or no route exists.
    pub fn is_last_move(&self) -> bool {
        self.route.cursor == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{chebyshev, manhattan};
    use crate::topology::Topology;
    use stargrid_core::Rect;

    fn searched(
        bounds: Rect,
        start: Coord,
        target: Coord,
        topology: Topology,
        blocked: impl Fn(Coord) -> bool,
    ) -> SearchSession {
        let mut s = SearchSession::new(bounds, start, target, 0, topology, blocked);
        assert!(s.search());
        s.build_route();
        s
    }

    /// Drain the cursor protocol, returning every move in execution order.
    fn consume(s: &mut SearchSession) -> Vec<Coord> {
        let mut moves = Vec::new();
        while let Some(m) = s.get_move() {
            moves.push(m);
            if s.is_last_move() {
                break;
            }
            s.next_move();
        }
        moves
    }

    #[test]
    fn open_grid_omni_route_is_chebyshev_optimal() {
        let start = Coord::ZERO;
        let target = Coord::new(4, 4);
        let mut s = searched(Rect::sized(5, 5), start, target, Topology::Omni, |_| false);
        assert_eq!(s.route().len(), chebyshev(start, target) as usize);
        let moves = consume(&mut s);
        assert_eq!(
            moves,
            vec![
                Coord::new(1, 1),
                Coord::new(2, 2),
                Coord::new(3, 3),
                Coord::new(4, 4),
            ]
        );
    }

    #[test]
    fn open_grid_cardinal_route_is_manhattan_optimal() {
        let start = Coord::ZERO;
        let target = Coord::new(3, 0);
        let mut s = searched(
            Rect::sized(5, 5),
            start,
            target,
            Topology::Cardinal,
            |_| false,
        );
        assert_eq!(s.route().len(), manhattan(start, target) as usize);
        for m in consume(&mut s) {
            // Every move is orthogonal: same row as the straight-line path.
            assert_eq!(m.y, 0);
        }
    }

    #[test]
    fn route_detours_around_obstacle() {
        let wall = Coord::new(2, 2);
        let mut s = searched(
            Rect::sized(5, 5),
            Coord::ZERO,
            Coord::new(4, 4),
            Topology::Omni,
            |c| c == wall,
        );
        let moves = consume(&mut s);
        assert!(!moves.contains(&wall));
        assert_eq!(*moves.last().unwrap(), Coord::new(4, 4));
        // Consecutive moves stay topology-adjacent.
        for w in moves.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1);
        }
    }

    #[test]
    fn route_never_enters_impassable_cells() {
        let blocked = |c: Coord| (c.x + 2 * c.y) % 5 == 3;
        let mut s = SearchSession::new(
            Rect::sized(9, 9),
            Coord::ZERO,
            Coord::new(8, 8),
            0,
            Topology::Omni,
            blocked,
        );
        if s.search() {
            s.build_route();
            for m in consume(&mut s) {
                assert!(!blocked(m));
            }
        }
    }

    #[test]
    fn cursor_protocol_counts_down() {
        let mut s = searched(
            Rect::sized(5, 5),
            Coord::ZERO,
            Coord::new(4, 4),
            Topology::Omni,
            |_| false,
        );
        let len = s.route().len();
        assert!(len > 0);
        assert!(!s.is_last_move());
        // The cursor starts on the move adjacent to the start; one
        // decrement per remaining waypoint lands on the arrival cell.
        for _ in 0..len - 1 {
            s.next_move();
        }
        assert!(s.is_last_move());
        assert_eq!(s.get_move(), Some(Coord::new(4, 4)));
        // Further calls stay put.
        s.next_move();
        assert!(s.is_last_move());
        assert_eq!(s.get_move(), Some(Coord::new(4, 4)));
    }

    #[test]
    fn no_search_means_no_move() {
        let mut s = SearchSession::new(
            Rect::sized(5, 5),
            Coord::ZERO,
            Coord::new(4, 4),
            0,
            Topology::Omni,
            |_| false,
        );
        // build_route before search is a well-defined no-op.
        s.build_route();
        assert_eq!(s.get_move(), None);
        assert!(s.is_last_move());
    }

    #[test]
    fn failed_search_means_no_move() {
        let target = Coord::new(3, 3);
        let mut s = SearchSession::new(
            Rect::sized(7, 7),
            Coord::ZERO,
            target,
            0,
            Topology::Omni,
            |c| c != target && chebyshev(c, target) <= 1,
        );
        assert!(!s.search());
        s.build_route();
        assert_eq!(s.get_move(), None);
        assert!(s.is_last_move());
    }

    #[test]
    fn trivial_success_yields_empty_route() {
        let at = Coord::new(2, 2);
        let mut s = SearchSession::new(Rect::sized(5, 5), at, at, 0, Topology::Omni, |_| false);
        assert!(s.search());
        s.build_route();
        assert!(s.route().is_empty());
        assert_eq!(s.get_move(), None);
        assert!(s.is_last_move());
    }

    #[test]
    fn relaxed_tolerance_lands_adjacent() {
        let target = Coord::new(4, 4);
        let mut s = SearchSession::new(
            Rect::sized(6, 6),
            Coord::ZERO,
            target,
            0,
            Topology::Omni,
            |c| c == target,
        );
        assert_eq!(s.stopping_tolerance(), 1);
        assert!(s.search());
        s.build_route();
        let moves = consume(&mut s);
        let last = *moves.last().unwrap();
        assert_ne!(last, target);
        assert_eq!(chebyshev(last, target), 1);
        assert!(!moves.contains(&target));
    }

    #[test]
    fn build_route_is_idempotent() {
        let mut s = searched(
            Rect::sized(5, 5),
            Coord::ZERO,
            Coord::new(4, 4),
            Topology::Omni,
            |_| false,
        );
        let first: Vec<_> = s.route().points().to_vec();
        s.build_route();
        assert_eq!(s.route().points(), first.as_slice());
    }

    #[test]
    fn identical_sessions_produce_identical_routes() {
        let blocked = |c: Coord| c.x == 3 && c.y < 4;
        let run = || {
            let mut s = SearchSession::new(
                Rect::sized(8, 8),
                Coord::ZERO,
                Coord::new(7, 2),
                0,
                Topology::CardinalFirst,
                blocked,
            );
            assert!(s.search());
            s.build_route();
            s.route().points().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn random_fields_obey_route_invariants() {
        use rand::rngs::SmallRng;
        use rand::{RngExt, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0x5747_4149);
        for round in 0..40 {
            let mut field = [[false; 12]; 12];
            for row in field.iter_mut() {
                for cell in row.iter_mut() {
                    *cell = rng.random_bool(0.3);
                }
            }
            let blocked = |c: Coord| field[c.y as usize][c.x as usize];
            let topology = if round % 2 == 0 {
                Topology::Omni
            } else {
                Topology::Cardinal
            };
            let mut s = SearchSession::new(
                Rect::sized(12, 12),
                Coord::ZERO,
                Coord::new(11, 11),
                0,
                topology,
                blocked,
            );
            if !s.search() {
                continue;
            }
            s.build_route();
            let moves = consume(&mut s);
            let mut prev = Coord::ZERO;
            for m in moves {
                assert!(s.grid().passable(m));
                assert!(!blocked(m));
                match topology {
                    Topology::Cardinal => assert_eq!(manhattan(prev, m), 1),
                    _ => assert_eq!(chebyshev(prev, m), 1),
                }
                prev = m;
            }
        }
    }
}
