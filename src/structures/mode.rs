//! Build mode selected by the presentation layer.

use serde::{Deserialize, Serialize};

/// Which track a Build action works on.
///
/// This is a UI toggle read at build time, not part of the turn state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildMode {
    /// Raise a tower, or cap a level-3 tower with a dome.
    #[default]
    Normal,
    /// Start or complete a wall.
    Wall,
    /// Knock a wall back one phase.
    Break,
}

impl BuildMode {
    /// Human-readable mode name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BuildMode::Normal => "Tower Build",
            BuildMode::Wall => "Wall Build",
            BuildMode::Break => "Break Wall",
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
