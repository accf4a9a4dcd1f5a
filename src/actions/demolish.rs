//! Break validation: knock a wall back one phase.

use super::build::StructureChange;
use super::BoardAction;
use crate::board::Board;
use crate::core::{ActorId, Cell, RuleError};

/// Break the wall on `target` next to `actor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakAction {
    pub actor: ActorId,
    pub target: Cell,
}

impl BreakAction {
    #[must_use]
    pub const fn new(actor: ActorId, target: Cell) -> Self {
        Self { actor, target }
    }
}

impl BoardAction for BreakAction {
    type Outcome = StructureChange;

    fn validate(&self, board: &Board) -> Result<(), RuleError> {
        board.ensure_contains(self.target)?;

        if !board.structure_at(self.target).is_wall() {
            return Err(RuleError::NotAWall(self.target));
        }

        let from = board
            .location_of(self.actor)
            .ok_or(RuleError::ActorNotPlaced(self.actor))?;
        if !from.is_adjacent_to(self.target) {
            return Err(RuleError::NotAdjacent {
                from,
                to: self.target,
            });
        }

        Ok(())
    }

    fn apply(&self, board: &mut Board) -> StructureChange {
        let before = board.structure_at(self.target);
        let after = before.wall_retreat();
        board.set_structure(self.target, after);

        StructureChange {
            cell: self.target,
            before,
            after,
        }
    }
}
