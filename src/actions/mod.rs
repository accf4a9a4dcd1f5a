//! Action validators: Move, Build, Break.
//!
//! Every action is a pure predicate (`validate`) plus an effect (`apply`).
//! [`BoardAction::execute`] runs both back to back against the same `&mut
//! Board`, so nothing can change the board between the check and the write.
//!
//! ## Example
//!
//! ```
//! use santorini_engine::actions::{BoardAction, MoveAction};
//! use santorini_engine::board::Board;
//! use santorini_engine::core::{ActorId, Cell, RuleError};
//! use santorini_engine::structures::Structure;
//!
//! let mut board = Board::new(5);
//! board.place(ActorId(0), Cell::new(2, 2));
//! board.set_structure(Cell::new(1, 1), Structure::Tower { level: 2 });
//!
//! let climb = MoveAction::new(ActorId(0), Cell::new(1, 1));
//! assert!(matches!(climb.execute(&mut board), Err(RuleError::HeightViolation { .. })));
//! assert_eq!(board.location_of(ActorId(0)), Some(Cell::new(2, 2)));
//! ```

mod build;
mod demolish;
mod movement;
mod record;

pub use build::{BuildAction, StructureChange};
pub use demolish::BreakAction;
pub use movement::{legal_destinations, MoveAction, MoveOutcome, WINNING_HEIGHT};
pub use record::{ActionKind, ActionRecord};

use crate::board::Board;
use crate::core::RuleError;

/// A validate-then-apply board mutation.
pub trait BoardAction {
    /// What a successful application reports back.
    type Outcome;

    /// Check the action against the current board without touching it.
    fn validate(&self, board: &Board) -> Result<(), RuleError>;

    /// Apply a validated action.
    ///
    /// Only call this directly right after a successful [`validate`](Self::validate)
    /// on the same board.
    fn apply(&self, board: &mut Board) -> Self::Outcome;

    /// Validate and apply in one step. A rejected action leaves the board untouched.
    fn execute(&self, board: &mut Board) -> Result<Self::Outcome, RuleError> {
        self.validate(board)?;
        Ok(self.apply(board))
    }
}
