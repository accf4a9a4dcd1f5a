//! The buildable content of a cell.
//!
//! ## Progressions
//!
//! - Tower: `Empty → Tower(1) → Tower(2) → Tower(3) → Dome`, then idempotent.
//! - Wall: `Empty → Wall(1) → Wall(2)` on build, `Wall(2) → Wall(1) → Empty`
//!   on break. A wall never reaches phase 0; retreating from phase 1 clears
//!   the cell back to `Empty`.
//!
//! The two tracks never mix: tower builds skip walls and wall builds skip
//! towers. Every transition is a pure function returning the next value.

use serde::{Deserialize, Serialize};

use super::mode::BuildMode;

/// Highest tower level before a dome caps it.
pub const MAX_TOWER_LEVEL: u8 = 3;

/// Height of a dome for movement comparisons.
pub const DOME_HEIGHT: u8 = 4;

/// Fully built wall phase.
pub const MAX_WALL_PHASE: u8 = 2;

/// Tagged structure variant.
///
/// `Empty` is the same as "no structure": a cleared cell holds `Empty`,
/// never a zero-phase wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    /// Bare ground, height 0.
    #[default]
    Empty,
    /// Tower at level 1..=3.
    Tower { level: u8 },
    /// Dome capping a level-3 tower.
    Dome,
    /// Wall at phase 1 (partial) or 2 (full).
    Wall { phase: u8 },
}

impl Structure {
    /// True for `Empty` or a tower that can still be raised a level.
    ///
    /// ```
    /// use santorini_engine::structures::Structure;
    ///
    /// assert!(Structure::Empty.is_buildable());
    /// assert!(Structure::Tower { level: 2 }.is_buildable());
    /// assert!(!Structure::Tower { level: 3 }.is_buildable());
    /// assert!(!Structure::Dome.is_buildable());
    /// assert!(!Structure::Wall { phase: 1 }.is_buildable());
    /// ```
    #[must_use]
    pub fn is_buildable(self) -> bool {
        match self {
            Structure::Empty => true,
            Structure::Tower { level } => level < MAX_TOWER_LEVEL,
            Structure::Dome | Structure::Wall { .. } => false,
        }
    }

    /// Result of a normal (tower) build.
    ///
    /// Walls are returned unchanged; validators reject tower builds on them
    /// before this is reached.
    #[must_use]
    pub fn next_after_build(self) -> Structure {
        match self {
            Structure::Empty => Structure::Tower { level: 1 },
            Structure::Tower { level } if level < MAX_TOWER_LEVEL => {
                Structure::Tower { level: level + 1 }
            }
            Structure::Tower { .. } | Structure::Dome => Structure::Dome,
            wall @ Structure::Wall { .. } => wall,
        }
    }

    /// Advance the wall track one phase, starting a partial wall on `Empty`.
    #[must_use]
    pub fn wall_advance(self) -> Structure {
        match self {
            Structure::Empty => Structure::Wall { phase: 1 },
            Structure::Wall { phase } => Structure::Wall {
                phase: (phase + 1).min(MAX_WALL_PHASE),
            },
            other => other,
        }
    }

    /// Knock the wall track back one phase. Phase 0 clears the cell.
    #[must_use]
    pub fn wall_retreat(self) -> Structure {
        match self {
            Structure::Wall { phase } if phase > 1 => Structure::Wall { phase: phase - 1 },
            Structure::Wall { .. } => Structure::Empty,
            other => other,
        }
    }

    /// Height used by the climb rule.
    ///
    /// Walls report 0 but are never climbable; check [`Structure::is_wall`]
    /// before comparing heights.
    #[must_use]
    pub fn height(self) -> u8 {
        match self {
            Structure::Empty | Structure::Wall { .. } => 0,
            Structure::Tower { level } => level,
            Structure::Dome => DOME_HEIGHT,
        }
    }

    /// True for any wall phase.
    #[must_use]
    pub fn is_wall(self) -> bool {
        matches!(self, Structure::Wall { .. })
    }

    /// Wall phase, or 0 when the cell holds no wall.
    #[must_use]
    pub fn wall_phase(self) -> u8 {
        match self {
            Structure::Wall { phase } => phase,
            _ => 0,
        }
    }

    /// True when the value is reachable by building: towers 1..=3, walls 1..=2.
    ///
    /// ```
    /// use santorini_engine::structures::Structure;
    ///
    /// assert!(Structure::Tower { level: 3 }.is_valid());
    /// assert!(!Structure::Tower { level: 0 }.is_valid());
    /// assert!(!Structure::Wall { phase: 0 }.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Structure::Empty | Structure::Dome => true,
            Structure::Tower { level } => (1..=MAX_TOWER_LEVEL).contains(&level),
            Structure::Wall { phase } => (1..=MAX_WALL_PHASE).contains(&phase),
        }
    }

    /// Whether a build in `mode` may target this structure.
    ///
    /// Normal mode also accepts a level-3 tower, which it caps with a dome.
    #[must_use]
    pub fn accepts(self, mode: BuildMode) -> bool {
        match mode {
            BuildMode::Normal => {
                self.is_buildable() || self == Structure::Tower { level: MAX_TOWER_LEVEL }
            }
            BuildMode::Wall => match self {
                Structure::Empty => true,
                Structure::Wall { phase } => phase < MAX_WALL_PHASE,
                Structure::Tower { .. } | Structure::Dome => false,
            },
            BuildMode::Break => self.is_wall(),
        }
    }

    /// Structure produced by a build in `mode`.
    #[must_use]
    pub fn built(self, mode: BuildMode) -> Structure {
        match mode {
            BuildMode::Normal => self.next_after_build(),
            BuildMode::Wall => self.wall_advance(),
            BuildMode::Break => self.wall_retreat(),
        }
    }

    /// Short display label: `""`, `"L1"`..`"L3"`, `"Dome"`, `"W1"`, `"W2"`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Structure::Empty => String::new(),
            Structure::Tower { level } => format!("L{level}"),
            Structure::Dome => "Dome".to_string(),
            Structure::Wall { phase } => format!("W{phase}"),
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Structure::Empty => write!(f, "empty"),
            Structure::Tower { level } => write!(f, "tower level {level}"),
            Structure::Dome => write!(f, "dome"),
            Structure::Wall { phase } => write!(f, "wall phase {phase}"),
        }
    }
}
