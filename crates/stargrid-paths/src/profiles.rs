//! Caller-facing construction profiles.
//!
//! Each profile assembles a [`SearchSession`] from narrow inputs — grid
//! dimensions, coordinates, scalars and per-cell predicates — so neither
//! the arena's unit roster nor the starmap's fleet model ever crosses into
//! the engine. Every predicate is evaluated once per cell at construction
//! and never again.

use log::trace;
use stargrid_core::{Coord, Rect};

use crate::distance::euclidean;
use crate::session::SearchSession;
use crate::topology::Topology;

// ---------------------------------------------------------------------------
// Arena profiles
// ---------------------------------------------------------------------------

/// The home plate sealed around a stationary defender.
///
/// When the attacking side outnumbers the defenders, every cell of the
/// plate is treated as blocked so assault paths cannot cut through it —
/// except cells where the attacker already has a unit of their own
/// standing, which stay passable.
pub struct GuardZone<'a> {
    /// The plate rectangle.
    pub plate: Rect,
    /// Attacking units committed to the assault.
    pub attackers: u32,
    /// Units defending the plate.
    pub defenders: u32,
    /// Whether a cell holds one of the attacker's own units.
    pub friendly: &'a dyn Fn(Coord) -> bool,
}

impl GuardZone<'_> {
    #[inline]
    fn seals(&self, c: Coord) -> bool {
        self.attackers > self.defenders && self.plate.contains(c)
    }
}

/// Arena movement toward another ship.
///
/// Cells occupied by any unit are impassable. If a [`GuardZone`] is given
/// and active, its plate overrides plain occupancy (see [`GuardZone`]).
/// Stopping tolerance is 0, auto-relaxed to 1 when the target cell itself
/// is blocked (closing with an occupied ship means landing beside it).
pub fn arena_ship_to_ship(
    bounds: Rect,
    start: Coord,
    target: Coord,
    topology: Topology,
    occupied: impl Fn(Coord) -> bool,
    guard: Option<GuardZone<'_>>,
) -> SearchSession {
    SearchSession::new(bounds, start, target, 0, topology, |c| {
        if let Some(g) = &guard {
            if g.seals(c) {
                return !(g.friendly)(c);
            }
        }
        occupied(c)
    })
}

/// Arena movement toward a fixed coordinate, typically the transit point
/// used to leave the arena.
///
/// Same occupancy blocking as [`arena_ship_to_ship`], but the `transit`
/// cell is force-passable even when occupied.
pub fn arena_ship_to_coord(
    bounds: Rect,
    start: Coord,
    target: Coord,
    topology: Topology,
    occupied: impl Fn(Coord) -> bool,
    transit: Coord,
) -> SearchSession {
    SearchSession::new(bounds, start, target, 0, topology, |c| {
        c != transit && occupied(c)
    })
}

// ---------------------------------------------------------------------------
// Starmap profiles
// ---------------------------------------------------------------------------

/// What blocks a starmap cell for the navigating fleet.
pub struct ChartView<'a> {
    /// Terrain the fleet can never cross.
    pub terrain_blocked: &'a dyn Fn(Coord) -> bool,
    /// Hazardous cells, only honored when `avoid_hazards` is set.
    pub hazardous: &'a dyn Fn(Coord) -> bool,
    /// Whether hazardous cells count as blocked for this query.
    pub avoid_hazards: bool,
    /// A fleet of a different faction than the one at the start cell.
    pub foreign_fleet: &'a dyn Fn(Coord) -> bool,
}

impl ChartView<'_> {
    #[inline]
    fn blocks(&self, c: Coord) -> bool {
        (self.terrain_blocked)(c)
            || (self.avoid_hazards && (self.hazardous)(c))
            || (self.foreign_fleet)(c)
    }
}

/// Starmap navigation that only needs to get within `radius` of the
/// target, used when rerouting around a local obstruction.
///
/// The stopping tolerance is derived as
/// `max(0, round(start-to-target distance) - radius)`.
pub fn starmap_within_radius(
    bounds: Rect,
    start: Coord,
    target: Coord,
    radius: i32,
    view: ChartView<'_>,
) -> SearchSession {
    let tolerance = (euclidean(start, target).round() as i32 - radius).max(0);
    trace!(
        "starmap query {} -> {} radius {} gives tolerance {}",
        start, target, radius, tolerance
    );
    SearchSession::new(bounds, start, target, tolerance, Topology::Omni, |c| {
        view.blocks(c)
    })
}

/// Starmap navigation to the exact target cell (tolerance 0, with the
/// usual auto-relaxation when the target itself is blocked).
pub fn starmap_exact(
    bounds: Rect,
    start: Coord,
    target: Coord,
    view: ChartView<'_>,
) -> SearchSession {
    SearchSession::new(bounds, start, target, 0, Topology::Omni, |c| view.blocks(c))
}

/// Special-purpose starmap navigation over an externally supplied
/// eligibility filter: only eligible cells are passable.
pub fn starmap_filtered(
    bounds: Rect,
    start: Coord,
    target: Coord,
    eligible: impl Fn(Coord) -> bool,
) -> SearchSession {
    SearchSession::new(bounds, start, target, 0, Topology::Omni, |c| !eligible(c))
}
