//! Grid path search for the combat arena and the strategic starmap.
//!
//! One engine serves the game's two movement callers: tactical unit
//! movement on a small bounded arena, and fleet navigation on the large
//! bounded starmap. A query is a single-use [`SearchSession`]:
//!
//! 1. Construction snapshots the world into a [`DiscoveryGrid`] by
//!    evaluating a blocking predicate once per cell (see [`profiles`] for
//!    the caller-facing constructors).
//! 2. [`SearchSession::search`] runs an approximate best-first expansion
//!    under one of three movement [`Topology`] variants, stopping as soon
//!    as a cell within the stopping tolerance of the target is discovered.
//! 3. [`SearchSession::build_route`] reconstructs an ordered [`Route`] by
//!    descending the discovery-step gradient backward from the arrival
//!    cell.
//! 4. [`SearchSession::get_move`] / [`SearchSession::next_move`] /
//!    [`SearchSession::is_last_move`] hand the route to the movement
//!    executor one step at a time.
//!
//! A session owns all of its state and is discarded after one
//! search-plus-consume cycle; independent sessions may run on independent
//! threads without synchronization.

mod distance;
mod frontier;
mod grid;
pub mod profiles;
mod route;
mod session;
mod topology;

pub use distance::{chebyshev, euclidean, manhattan};
pub use frontier::{Frontier, PathPoint};
pub use grid::{CellState, DiscoveryGrid};
pub use profiles::{ChartView, GuardZone};
pub use route::Route;
pub use session::{SearchSession, SessionState};
pub use topology::Topology;
