//! Triton: every move onto the perimeter grants another optional move.

use super::{Power, PowerKind, TurnContext};
use crate::core::{Cell, RuleError};
use crate::rules::TurnPhase;

/// Chained moves along the board edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerimeterMove;

impl Power for PerimeterMove {
    fn kind(&self) -> PowerKind {
        PowerKind::PerimeterMove
    }

    fn handle_move(&self, ctx: &mut TurnContext<'_>, target: Cell) -> Result<(), RuleError> {
        match ctx.phase() {
            TurnPhase::Move | TurnPhase::ExtraMove => {
                let outcome = ctx.move_selected(target)?;
                let next = if ctx.board().is_perimeter(outcome.to) {
                    TurnPhase::ExtraMove
                } else {
                    TurnPhase::Build
                };
                ctx.set_phase(next);
                Ok(())
            }
            phase => Err(RuleError::WrongPhase(phase)),
        }
    }

    fn skip(&self, ctx: &mut TurnContext<'_>) -> Result<(), RuleError> {
        ctx.expect_phase(TurnPhase::ExtraMove)
            .map_err(|_| RuleError::NoPendingSkip)?;
        ctx.set_phase(TurnPhase::Build);
        Ok(())
    }
}
