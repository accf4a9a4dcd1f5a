//! Artemis: an optional second move that may not return to the start.

use super::{Power, PowerKind, TurnContext};
use crate::core::{Cell, RuleError};
use crate::rules::TurnPhase;

/// One optional extra move per turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtraMove;

impl Power for ExtraMove {
    fn kind(&self) -> PowerKind {
        PowerKind::ExtraMove
    }

    fn handle_move(&self, ctx: &mut TurnContext<'_>, target: Cell) -> Result<(), RuleError> {
        match ctx.phase() {
            TurnPhase::Move => {
                ctx.move_selected(target)?;
                ctx.set_phase(TurnPhase::ExtraMove);
                Ok(())
            }
            TurnPhase::ExtraMove => {
                if ctx.turn().start_cell() == Some(target) {
                    return Err(RuleError::ReturnToStart(target));
                }
                ctx.move_selected(target)?;
                ctx.set_phase(TurnPhase::Build);
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

#[cfg(test)]
mod tests {
    use im::Vector;

    use super::*;
    use crate::actions::ActionRecord;
    use crate::board::Board;
    use crate::core::{ActorId, PlayerId};
    use crate::rules::Turn;
    use crate::structures::BuildMode;

    fn fixture() -> (Board, Turn, Vector<ActionRecord>) {
        let mut board = Board::new(5);
        board.place(ActorId(0), Cell::new(2, 2));
        let mut turn = Turn::new(1);
        turn.select(ActorId(0));
        (board, turn, Vector::new())
    }

    #[test]
    fn test_second_move_then_build() {
        let (mut board, mut turn, mut history) = fixture();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        ExtraMove.handle_move(&mut ctx, Cell::new(2, 3)).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::ExtraMove);

        ExtraMove.handle_move(&mut ctx, Cell::new(2, 4)).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::Build);
        assert_eq!(ctx.board().location_of(ActorId(0)), Some(Cell::new(2, 4)));
    }

    #[test]
    fn test_cannot_return_to_start() {
        let (mut board, mut turn, mut history) = fixture();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        ExtraMove.handle_move(&mut ctx, Cell::new(2, 3)).unwrap();
        let err = ExtraMove.handle_move(&mut ctx, Cell::new(2, 2));
        assert_eq!(err, Err(RuleError::ReturnToStart(Cell::new(2, 2))));
        assert_eq!(ctx.phase(), TurnPhase::ExtraMove);
        assert_eq!(ctx.board().location_of(ActorId(0)), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_skip_only_when_pending() {
        let (mut board, mut turn, mut history) = fixture();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        assert_eq!(ExtraMove.skip(&mut ctx), Err(RuleError::NoPendingSkip));
        ExtraMove.handle_move(&mut ctx, Cell::new(1, 1)).unwrap();
        ExtraMove.skip(&mut ctx).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::Build);
        assert_eq!(ExtraMove.skip(&mut ctx), Err(RuleError::NoPendingSkip));
    }
}
