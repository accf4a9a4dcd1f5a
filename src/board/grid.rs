//! Square game board.
//!
//! Owns cell existence, per-cell structures, and the actor ↔ cell mapping.
//! All rule checks live in [`actions`](crate::actions); the board only
//! answers questions and applies already-validated mutations.

use smallvec::SmallVec;

use super::occupancy::Occupancy;
use crate::core::{ActorId, Cell, RuleError};
use crate::structures::Structure;

/// Neighbour list. Never more than eight cells.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// A `dimension × dimension` grid with structures and occupancy.
///
/// ## Usage
///
/// ```
/// use santorini_engine::board::Board;
/// use santorini_engine::core::{ActorId, Cell};
///
/// let mut board = Board::new(5);
/// let corner = board.cell_at(0, 0).unwrap();
///
/// board.place(ActorId(0), corner);
/// assert_eq!(board.occupant_of(corner), Some(ActorId(0)));
/// assert_eq!(board.adjacent_cells(corner).len(), 3);
/// assert!(board.cell_at(5, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: usize,

    /// Row-major structure per cell.
    structures: Vec<Structure>,

    occupancy: Occupancy,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            structures: vec![Structure::Empty; dimension * dimension],
            occupancy: Occupancy::new(),
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Look up the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, RuleError> {
        if row < self.dimension && col < self.dimension {
            Ok(Cell::new(row, col))
        } else {
            Err(RuleError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            })
        }
    }

    /// Check whether `cell` lies on this board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.dimension && cell.col() < self.dimension
    }

    /// Like [`Board::contains`], but as a `Result` for validators.
    pub fn ensure_contains(&self, cell: Cell) -> Result<(), RuleError> {
        self.cell_at(cell.row(), cell.col()).map(|_| ())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dim = self.dimension;
        (0..dim).flat_map(move |row| (0..dim).map(move |col| Cell::new(row, col)))
    }

    /// In-bounds neighbours of `cell`, scanned row by row from the top-left.
    #[must_use]
    pub fn adjacent_cells(&self, cell: Cell) -> Neighbors {
        let mut out = Neighbors::new();
        let rows = cell.row().saturating_sub(1)..=cell.row() + 1;

        for row in rows {
            for col in cell.col().saturating_sub(1)..=cell.col() + 1 {
                let candidate = Cell::new(row, col);
                if candidate != cell && self.contains(candidate) {
                    out.push(candidate);
                }
            }
        }

        out
    }

    /// True when `cell` is on the outer ring.
    #[must_use]
    pub fn is_perimeter(&self, cell: Cell) -> bool {
        cell.is_perimeter(self.dimension)
    }

    // === Structures ===

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row() * self.dimension + cell.col())
    }

    /// Structure on a cell. Out-of-bounds cells read as `Empty`.
    #[must_use]
    pub fn structure_at(&self, cell: Cell) -> Structure {
        self.index(cell)
            .map_or(Structure::Empty, |i| self.structures[i])
    }

    /// Overwrite the structure on a cell.
    ///
    /// Returns the previous structure, or `None` if the cell is off the board.
    pub fn set_structure(&mut self, cell: Cell, structure: Structure) -> Option<Structure> {
        let i = self.index(cell)?;
        Some(std::mem::replace(&mut self.structures[i], structure))
    }

    /// Climb height of a cell.
    #[must_use]
    pub fn height_at(&self, cell: Cell) -> u8 {
        self.structure_at(cell).height()
    }

    // === Occupancy ===

    /// Cell an actor stands on.
    #[must_use]
    pub fn location_of(&self, actor: ActorId) -> Option<Cell> {
        self.occupancy.location_of(actor)
    }

    /// Actor standing on a cell.
    #[must_use]
    pub fn occupant_of(&self, cell: Cell) -> Option<ActorId> {
        self.occupancy.occupant_of(cell)
    }

    /// Check whether an actor stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupancy.is_occupied(cell)
    }

    /// Put an actor on the board. Callers must not double-place.
    pub fn place(&mut self, actor: ActorId, cell: Cell) {
        debug_assert!(self.contains(cell), "placing off the board at {cell}");
        self.occupancy.place(actor, cell);
    }

    /// Move a placed actor, returning the cell it left.
    pub fn relocate(&mut self, actor: ActorId, cell: Cell) -> Option<Cell> {
        self.occupancy.relocate(actor, cell)
    }

    /// Read-only view of the occupancy mapping.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }
}
