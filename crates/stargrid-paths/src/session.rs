use log::{debug, trace};
use stargrid_core::{Coord, Rect};

use crate::distance::euclidean;
use crate::frontier::{Frontier, PathPoint};
use crate::grid::{CellState, DiscoveryGrid};
use crate::route::Route;
use crate::topology::Topology;

/// Phase of a [`SearchSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed; [`search`](SearchSession::search) not yet called.
    Ready,
    /// Inside the expansion loop.
    Expanding,
    /// A cell satisfying the stopping tolerance was discovered.
    Found,
    /// The frontier emptied before the tolerance was satisfied.
    Exhausted,
}

/// A single-use path query.
///
/// One query owns one fresh world snapshot ([`DiscoveryGrid`]), one
/// [`Frontier`], and (after success) one reconstructed [`Route`]. Nothing
/// is cached or shared across queries; independent sessions may run on
/// independent threads without synchronization.
///
/// The search is an approximate best-first expansion, not A*: the frontier
/// is only locally biased toward the target, and the first cell whose
/// rounded-up Euclidean distance to the target equals the stopping
/// tolerance ends the search. Routes are therefore good, not provably
/// shortest.
pub struct SearchSession {
    pub(crate) grid: DiscoveryGrid,
    pub(crate) frontier: Frontier,
    pub(crate) start: Coord,
    pub(crate) target: Coord,
    pub(crate) tolerance: i32,
    pub(crate) topology: Topology,
    pub(crate) step: u32,
    pub(crate) state: SessionState,
    pub(crate) target_point: Option<PathPoint>,
    pub(crate) route: Route,
}

impl SearchSession {
    /// Build a session for one query.
    ///
    /// `blocked` is evaluated exactly once per cell of `bounds`, in
    /// O(width × height); the session never queries the world again. If
    /// `target` itself is blocked and `tolerance` is 0, the tolerance is
    /// relaxed to 1 so the query lands adjacent instead of failing
    /// outright.
    pub fn new(
        bounds: Rect,
        start: Coord,
        target: Coord,
        tolerance: i32,
        topology: Topology,
        blocked: impl Fn(Coord) -> bool,
    ) -> Self {
        let grid = DiscoveryGrid::new(bounds, start, blocked);
        let mut tolerance = tolerance.max(0);
        if tolerance == 0 && grid.state(target) == Some(CellState::Impassable) {
            tolerance = 1;
        }
        let mut frontier = Frontier::new();
        if bounds.contains(start) {
            frontier.seed(PathPoint::new(start, euclidean(start, target)));
        }
        Self {
            grid,
            frontier,
            start,
            target,
            tolerance,
            topology,
            step: 0,
            state: SessionState::Ready,
            target_point: None,
            route: Route::empty(),
        }
    }

    /// Current phase of the session.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The effective stopping tolerance, reflecting any auto-relaxation.
    #[inline]
    pub fn stopping_tolerance(&self) -> i32 {
        self.tolerance
    }

    /// The query target.
    #[inline]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// The per-query world snapshot.
    #[inline]
    pub fn grid(&self) -> &DiscoveryGrid {
        &self.grid
    }

    /// The arrival cell, once the session is [`Found`](SessionState::Found).
    ///
    /// `None` for a trivial success where the start already satisfied the
    /// tolerance.
    #[inline]
    pub fn target_point(&self) -> Option<PathPoint> {
        self.target_point
    }

    /// Run the expansion loop to completion.
    ///
    /// Returns whether a cell within the stopping tolerance of the target
    /// was reached. A finished session returns its recorded outcome; the
    /// loop never runs twice.
    pub fn search(&mut self) -> bool {
        match self.state {
            SessionState::Found => return true,
            SessionState::Exhausted => return false,
            SessionState::Ready | SessionState::Expanding => {}
        }
        self.state = SessionState::Expanding;

        // Start already within tolerance: trivial success, empty route.
        if euclidean(self.start, self.target).ceil() as i32 <= self.tolerance {
            self.state = SessionState::Found;
            trace!("search: start {} already within tolerance", self.start);
            return true;
        }

        loop {
            self.step += 1;
            let Some(cur) = self.frontier.pop() else {
                self.state = SessionState::Exhausted;
                debug!(
                    "search: exhausted after {} steps, no path {} -> {}",
                    self.step, self.start, self.target
                );
                return false;
            };

            for &off in self.topology.offsets() {
                let n = cur.pos + off;
                // Skips out-of-bounds, blocked, and already-discovered cells.
                if !self.grid.discover(n, self.step) {
                    continue;
                }
                let d = euclidean(n, self.target);
                let p = PathPoint::new(n, d);
                self.frontier.insert(p, cur.dist);
                if d.ceil() as i32 == self.tolerance {
                    self.target_point = Some(p);
                    self.state = SessionState::Found;
                    trace!(
                        "search: arrived at {} after {} steps (tolerance {})",
                        n, self.step, self.tolerance
                    );
                    return true;
                }
            }
        }
    }
}
