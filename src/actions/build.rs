//! Build validation.
//!
//! The build mode is read at call time. Normal and Wall modes share the
//! same placement checks (on board, unoccupied, adjacent) and differ only
//! in which structures they accept. Break mode hands off to [`BreakAction`].

use super::demolish::BreakAction;
use super::BoardAction;
use crate::board::Board;
use crate::core::{ActorId, Cell, RuleError};
use crate::structures::{BuildMode, Structure};

/// Build on `target` next to `actor`, using `mode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildAction {
    pub actor: ActorId,
    pub target: Cell,
    pub mode: BuildMode,
}

/// Before/after view of a structure mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureChange {
    pub cell: Cell,
    pub before: Structure,
    pub after: Structure,
}

impl BuildAction {
    #[must_use]
    pub const fn new(actor: ActorId, target: Cell, mode: BuildMode) -> Self {
        Self { actor, target, mode }
    }

    fn as_break(&self) -> BreakAction {
        BreakAction::new(self.actor, self.target)
    }
}

impl BoardAction for BuildAction {
    type Outcome = StructureChange;

    fn validate(&self, board: &Board) -> Result<(), RuleError> {
        if self.mode == BuildMode::Break {
            return self.as_break().validate(board);
        }

        board.ensure_contains(self.target)?;

        if board.is_occupied(self.target) {
            return Err(RuleError::Occupied(self.target));
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

        if !board.structure_at(self.target).accepts(self.mode) {
            return Err(RuleError::NotBuildable(self.target));
        }

        Ok(())
    }

    fn apply(&self, board: &mut Board) -> StructureChange {
        if self.mode == BuildMode::Break {
            return self.as_break().apply(board);
        }

        let before = board.structure_at(self.target);
        let after = before.built(self.mode);
        board.set_structure(self.target, after);

        StructureChange {
            cell: self.target,
            before,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Board {
        let mut board = Board::new(5);
        board.place(ActorId(0), Cell::new(2, 2));
        board
    }

    #[test]
    fn test_normal_build_progression() {
        let mut board = setup();
        let target = Cell::new(2, 3);
        let build = BuildAction::new(ActorId(0), target, BuildMode::Normal);

        let expected = [
            Structure::Tower { level: 1 },
            Structure::Tower { level: 2 },
            Structure::Tower { level: 3 },
            Structure::Dome,
        ];
        for want in expected {
            let change = build.execute(&mut board).unwrap();
            assert_eq!(change.after, want);
            assert_eq!(board.structure_at(target), want);
        }

        assert_eq!(build.execute(&mut board), Err(RuleError::NotBuildable(target)));
        assert_eq!(board.structure_at(target), Structure::Dome);
    }

    #[test]
    fn test_build_rejects_occupied_and_far() {
        let mut board = setup();
        board.place(ActorId(1), Cell::new(1, 1));

        let err = BuildAction::new(ActorId(0), Cell::new(1, 1), BuildMode::Normal).execute(&mut board);
        assert_eq!(err, Err(RuleError::Occupied(Cell::new(1, 1))));

        let err = BuildAction::new(ActorId(0), Cell::new(0, 0), BuildMode::Normal).execute(&mut board);
        assert!(matches!(err, Err(RuleError::NotAdjacent { .. })));

        let err = BuildAction::new(ActorId(0), Cell::new(2, 9), BuildMode::Normal).execute(&mut board);
        assert!(matches!(err, Err(RuleError::OutOfBounds { .. })));
    }

    #[test]
    fn test_cannot_build_tower_on_wall() {
        let mut board = setup();
        board.set_structure(Cell::new(3, 3), Structure::Wall { phase: 1 });

        let err = BuildAction::new(ActorId(0), Cell::new(3, 3), BuildMode::Normal).execute(&mut board);
        assert_eq!(err, Err(RuleError::NotBuildable(Cell::new(3, 3))));
        assert_eq!(board.structure_at(Cell::new(3, 3)), Structure::Wall { phase: 1 });
    }

    #[test]
    fn test_wall_mode() {
        let mut board = setup();
        let target = Cell::new(1, 2);
        let build = BuildAction::new(ActorId(0), target, BuildMode::Wall);

        assert_eq!(build.execute(&mut board).unwrap().after, Structure::Wall { phase: 1 });
        assert_eq!(build.execute(&mut board).unwrap().after, Structure::Wall { phase: 2 });
        assert_eq!(build.execute(&mut board), Err(RuleError::NotBuildable(target)));

        board.set_structure(Cell::new(1, 1), Structure::Tower { level: 1 });
        let err = BuildAction::new(ActorId(0), Cell::new(1, 1), BuildMode::Wall).execute(&mut board);
        assert_eq!(err, Err(RuleError::NotBuildable(Cell::new(1, 1))));
    }

    #[test]
    fn test_break_mode_delegates() {
        let mut board = setup();
        let target = Cell::new(3, 2);
        board.set_structure(target, Structure::Wall { phase: 2 });

        let build = BuildAction::new(ActorId(0), target, BuildMode::Break);
        let change = build.execute(&mut board).unwrap();
        assert_eq!(change.before, Structure::Wall { phase: 2 });
        assert_eq!(change.after, Structure::Wall { phase: 1 });

        build.execute(&mut board).unwrap();
        assert_eq!(board.structure_at(target), Structure::Empty);
        assert_eq!(build.execute(&mut board), Err(RuleError::NotAWall(target)));
    }
}
