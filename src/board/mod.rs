//! Board: cell existence, adjacency, structures, and occupancy.

mod grid;
mod occupancy;

pub use grid::{Board, Neighbors};
pub use occupancy::Occupancy;
