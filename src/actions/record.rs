//! Action history records.
//!
//! Every applied Move, Build or Break is recorded with the player, the
//! actor, the global turn number, and its sequence within the turn.
//! Rejected actions never appear here.

use serde::{Deserialize, Serialize};

use crate::core::{ActorId, Cell, PlayerId};
use crate::structures::{BuildMode, Structure};

/// What happened on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Actor moved between two cells.
    Move { from: Cell, to: Cell },
    /// Structure changed by a build in the given mode.
    Build {
        cell: Cell,
        mode: BuildMode,
        before: Structure,
        after: Structure,
    },
}

impl ActionKind {
    /// Target cell of the action.
    #[must_use]
    pub fn cell(&self) -> Cell {
        match self {
            ActionKind::Move { to, .. } => *to,
            ActionKind::Build { cell, .. } => *cell,
        }
    }

    /// True for moves.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, ActionKind::Move { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Presentation (last-move highlighting)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The actor that performed it.
    pub actor: ActorId,

    /// The action taken.
    pub action: ActionKind,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, actor: ActorId, action: ActionKind, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            actor,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_cell() {
        let mv = ActionKind::Move {
            from: Cell::new(0, 0),
            to: Cell::new(0, 1),
        };
        assert_eq!(mv.cell(), Cell::new(0, 1));
        assert!(mv.is_move());

        let build = ActionKind::Build {
            cell: Cell::new(1, 1),
            mode: BuildMode::Wall,
            before: Structure::Empty,
            after: Structure::Wall { phase: 1 },
        };
        assert_eq!(build.cell(), Cell::new(1, 1));
        assert!(!build.is_move());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            ActorId(2),
            ActionKind::Move {
                from: Cell::new(2, 2),
                to: Cell::new(3, 3),
            },
            4,
            0,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
