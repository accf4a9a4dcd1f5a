//! Demeter: an optional second build on a different cell.

use super::{Power, PowerKind, TurnContext};
use crate::core::{Cell, RuleError};
use crate::rules::TurnPhase;

/// One optional extra build per turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtraBuild;

impl Power for ExtraBuild {
    fn kind(&self) -> PowerKind {
        PowerKind::ExtraBuild
    }

    fn handle_build(&self, ctx: &mut TurnContext<'_>, target: Cell) -> Result<(), RuleError> {
        match ctx.phase() {
            TurnPhase::Build => {
                ctx.build_selected(target)?;
                ctx.set_phase(TurnPhase::ExtraBuild);
                Ok(())
            }
            TurnPhase::ExtraBuild => {
                if ctx.turn().first_build() == Some(target) {
                    return Err(RuleError::SameBuildCell(target));
                }
                ctx.build_selected(target)?;
                ctx.set_phase(TurnPhase::Complete);
                Ok(())
            }
            phase => Err(RuleError::WrongPhase(phase)),
        }
    }

    fn skip(&self, ctx: &mut TurnContext<'_>) -> Result<(), RuleError> {
        ctx.expect_phase(TurnPhase::ExtraBuild)
            .map_err(|_| RuleError::NoPendingSkip)?;
        ctx.set_phase(TurnPhase::Complete);
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
    use crate::structures::{BuildMode, Structure};

    fn fixture() -> (Board, Turn, Vector<ActionRecord>) {
        let mut board = Board::new(5);
        board.place(ActorId(0), Cell::new(2, 2));
        let mut turn = Turn::new(1);
        turn.select(ActorId(0));
        turn.set_phase(TurnPhase::Build);
        (board, turn, Vector::new())
    }

    #[test]
    fn test_two_builds_on_different_cells() {
        let (mut board, mut turn, mut history) = fixture();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        ExtraBuild.handle_build(&mut ctx, Cell::new(1, 1)).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::ExtraBuild);

        let err = ExtraBuild.handle_build(&mut ctx, Cell::new(1, 1));
        assert_eq!(err, Err(RuleError::SameBuildCell(Cell::new(1, 1))));
        assert_eq!(ctx.board().structure_at(Cell::new(1, 1)), Structure::Tower { level: 1 });
        assert_eq!(ctx.phase(), TurnPhase::ExtraBuild);

        ExtraBuild.handle_build(&mut ctx, Cell::new(3, 3)).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::Complete);
        assert_eq!(ctx.board().structure_at(Cell::new(3, 3)), Structure::Tower { level: 1 });
    }

    #[test]
    fn test_skip_extra_build() {
        let (mut board, mut turn, mut history) = fixture();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        assert_eq!(ExtraBuild.skip(&mut ctx), Err(RuleError::NoPendingSkip));
        ExtraBuild.handle_build(&mut ctx, Cell::new(2, 1)).unwrap();
        ExtraBuild.skip(&mut ctx).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::Complete);
    }

    #[test]
    fn test_moves_use_default_rules() {
        let mut board = Board::new(5);
        board.place(ActorId(0), Cell::new(2, 2));
        let mut turn = Turn::new(1);
        turn.select(ActorId(0));
        let mut history = Vector::new();
        let mut ctx = TurnContext::new(&mut board, &mut turn, &mut history, PlayerId::new(0), BuildMode::Normal);

        ExtraBuild.handle_move(&mut ctx, Cell::new(3, 2)).unwrap();
        assert_eq!(ctx.phase(), TurnPhase::Build);
    }
}
