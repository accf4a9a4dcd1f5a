//! Move validation.
//!
//! A move is legal when the target is on the board, unoccupied, not a wall,
//! adjacent to the mover, and at most one level higher than the source.
//! Dropping any number of levels is allowed.

use super::BoardAction;
use crate::board::{Board, Neighbors};
use crate::core::{ActorId, Cell, RuleError};
use crate::structures::MAX_TOWER_LEVEL;

/// Standing on this height after a move wins the game.
pub const WINNING_HEIGHT: u8 = MAX_TOWER_LEVEL;

/// Move `actor` to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: ActorId,
    pub target: Cell,
}

/// Result of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Cell,
    pub to: Cell,
    /// Height of the destination.
    pub height: u8,
}

impl MoveOutcome {
    /// True when the mover arrived on a level-3 tower.
    #[must_use]
    pub fn reached_summit(&self) -> bool {
        self.height == WINNING_HEIGHT
    }
}

impl MoveAction {
    #[must_use]
    pub const fn new(actor: ActorId, target: Cell) -> Self {
        Self { actor, target }
    }

    /// Check the move from an explicit source cell.
    fn check_from(board: &Board, from: Cell, to: Cell) -> Result<(), RuleError> {
        board.ensure_contains(to)?;

        if board.is_occupied(to) {
            return Err(RuleError::Occupied(to));
        }

        let structure = board.structure_at(to);
        if structure.is_wall() {
            return Err(RuleError::WallBlocked(to));
        }

        if !from.is_adjacent_to(to) {
            return Err(RuleError::NotAdjacent { from, to });
        }

        let from_height = board.height_at(from);
        let to_height = structure.height();
        if i16::from(to_height) - i16::from(from_height) > 1 {
            return Err(RuleError::HeightViolation {
                from: from_height,
                to: to_height,
            });
        }

        Ok(())
    }
}

impl BoardAction for MoveAction {
    type Outcome = MoveOutcome;

    fn validate(&self, board: &Board) -> Result<(), RuleError> {
        let from = board
            .location_of(self.actor)
            .ok_or(RuleError::ActorNotPlaced(self.actor))?;
        Self::check_from(board, from, self.target)
    }

    fn apply(&self, board: &mut Board) -> MoveOutcome {
        let from = board.relocate(self.actor, self.target).unwrap_or(self.target);
        MoveOutcome {
            from,
            to: self.target,
            height: board.height_at(self.target),
        }
    }
}

/// Every cell `actor` could legally move to, in scan order.
#[must_use]
pub fn legal_destinations(board: &Board, actor: ActorId) -> Neighbors {
    let Some(from) = board.location_of(actor) else {
        return Neighbors::new();
    };

    board
        .adjacent_cells(from)
        .into_iter()
        .filter(|&to| MoveAction::check_from(board, from, to).is_ok())
        .collect()
}
