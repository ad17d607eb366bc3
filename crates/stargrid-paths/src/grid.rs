use stargrid_core::{Coord, Rect};

/// State of a single cell in a [`DiscoveryGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// The cell can never be entered this query.
    Impassable,
    /// Passable, not yet reached by the search.
    Undiscovered,
    /// First reached when the session step counter read this value.
    DiscoveredAt(u32),
}

/// Dense per-query snapshot of the world: which cells are blocked, and at
/// which step each passable cell was first discovered.
///
/// The blocking predicate is evaluated exactly once per cell at
/// construction; no world queries happen during the search. The start cell
/// is always seeded as `DiscoveredAt(0)`, even if the predicate blocks it
/// (the moving unit occupies its own cell). A cell's step is set at most
/// once and never decreases.
pub struct DiscoveryGrid {
    bounds: Rect,
    cells: Vec<CellState>,
}

impl DiscoveryGrid {
    /// Snapshot `blocked` over every cell of `bounds` and seed `start`.
    pub fn new(bounds: Rect, start: Coord, blocked: impl Fn(Coord) -> bool) -> Self {
        let mut cells = Vec::with_capacity(bounds.len());
        for c in bounds.iter() {
            cells.push(if blocked(c) {
                CellState::Impassable
            } else {
                CellState::Undiscovered
            });
        }
        let mut grid = Self { bounds, cells };
        if let Some(i) = grid.idx(start) {
            grid.cells[i] = CellState::DiscoveredAt(0);
        }
        grid
    }

    /// The rectangle this grid covers.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let x = (c.x - self.bounds.min.x) as usize;
        let y = (c.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// State at `c`, or `None` when out of bounds.
    #[inline]
    pub fn state(&self, c: Coord) -> Option<CellState> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// The step at which `c` was discovered, if it has been.
    #[inline]
    pub fn step_at(&self, c: Coord) -> Option<u32> {
        match self.state(c) {
            Some(CellState::DiscoveredAt(n)) => Some(n),
            _ => None,
        }
    }

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    pub fn passable(&self, c: Coord) -> bool {
        matches!(
            self.state(c),
            Some(CellState::Undiscovered | CellState::DiscoveredAt(_))
        )
    }

    /// Record the first discovery of `c` at `step`.
    ///
    /// Returns `false` when the cell is out of bounds, blocked, or already
    /// discovered: a step is set at most once.
    pub fn discover(&mut self, c: Coord, step: u32) -> bool {
        let Some(i) = self.idx(c) else {
            return false;
        };
        match self.cells[i] {
            CellState::Undiscovered => {
                self.cells[i] = CellState::DiscoveredAt(step);
                true
            }
            _ => false,
        }
    }
}
