//! Board coordinates.
//!
//! A `Cell` is an immutable `(row, col)` pair. It knows nothing about the
//! board it belongs to; bounds are checked by [`Board`](crate::board::Board).
//!
//! ## Adjacency
//!
//! Two cells are adjacent when they are a king's move apart: both coordinate
//! deltas are at most 1 and the cells are not identical.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the grid.
///
/// Ordering is row-major, which is also the scan order used for
/// deterministic neighbour iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Create a cell at the given coordinates.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Chebyshev distance between two cells.
    #[must_use]
    pub fn distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Check whether `other` is one king's move away.
    ///
    /// ```
    /// use santorini_engine::core::Cell;
    ///
    /// let center = Cell::new(2, 2);
    /// assert!(center.is_adjacent_to(Cell::new(1, 1)));
    /// assert!(center.is_adjacent_to(Cell::new(2, 3)));
    /// assert!(!center.is_adjacent_to(Cell::new(2, 4)));
    /// assert!(!center.is_adjacent_to(center));
    /// ```
    #[must_use]
    pub fn is_adjacent_to(self, other: Cell) -> bool {
        self.distance(other) == 1
    }

    /// Check whether the cell lies on the outer ring of a `dimension`-sized grid.
    #[must_use]
    pub fn is_perimeter(self, dimension: usize) -> bool {
        let last = dimension.saturating_sub(1);
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_includes_diagonals() {
        let cell = Cell::new(1, 1);
        for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert!(cell.is_adjacent_to(Cell::new(r, c)), "({r}, {c}) should be adjacent");
        }
    }

    #[test]
    fn test_not_adjacent_to_self() {
        let cell = Cell::new(3, 4);
        assert!(!cell.is_adjacent_to(cell));
        assert_eq!(cell.distance(cell), 0);
    }

    #[test]
    fn test_not_adjacent_two_away() {
        assert!(!Cell::new(0, 0).is_adjacent_to(Cell::new(0, 2)));
        assert!(!Cell::new(0, 0).is_adjacent_to(Cell::new(2, 2)));
        assert_eq!(Cell::new(0, 0).distance(Cell::new(2, 1)), 2);
    }

    #[test]
    fn test_perimeter() {
        assert!(Cell::new(0, 2).is_perimeter(5));
        assert!(Cell::new(2, 0).is_perimeter(5));
        assert!(Cell::new(4, 2).is_perimeter(5));
        assert!(Cell::new(2, 4).is_perimeter(5));
        assert!(!Cell::new(1, 1).is_perimeter(5));
        assert!(!Cell::new(3, 2).is_perimeter(5));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn test_display_and_serialization() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.to_string(), "(2, 3)");

        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
