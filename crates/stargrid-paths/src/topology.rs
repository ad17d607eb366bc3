use stargrid_core::Coord;

// Offsets are enumerated in a fixed order; the same table drives both
// expansion and backward route reconstruction, so changing an order changes
// tie-breaking and therefore the exact cells chosen on detours.

const OMNI: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

const CARDINAL: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
];

const CARDINAL_FIRST: [Coord; 8] = [
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(1, 1),
];

/// Which neighboring cells a move may target, and in which fixed order they
/// are enumerated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// All eight neighbors, row-major order.
    Omni,
    /// The four orthogonal neighbors only (N, E, S, W).
    Cardinal,
    /// All eight neighbors, cardinals enumerated before diagonals.
    ///
    /// Same reachable set as [`Omni`](Topology::Omni), but the discovery
    /// order biases reconstructed routes toward straight segments on ties.
    CardinalFirst,
}

impl Topology {
    /// The fixed neighbor-offset enumeration for this topology.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        match self {
            Topology::Omni => &OMNI,
            Topology::Cardinal => &CARDINAL,
            Topology::CardinalFirst => &CARDINAL_FIRST,
        }
    }
}
