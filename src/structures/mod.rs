//! Structure model: towers, domes, walls, and the build mode toggle.

mod mode;
mod structure;

pub use mode::BuildMode;
pub use structure::{Structure, DOME_HEIGHT, MAX_TOWER_LEVEL, MAX_WALL_PHASE};
