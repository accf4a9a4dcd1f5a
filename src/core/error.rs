//! Error types.
//!
//! `RuleError` covers every recoverable, user-facing rejection. Its `Display`
//! text is what the presentation layer shows through `on_error`. A rejected
//! event never changes game state.
//!
//! `SetupError` covers invalid game construction and is returned from
//! [`GameBuilder::build`](crate::rules::GameBuilder::build).

use super::actor::ActorId;
use super::cell::Cell;
use super::player::PlayerId;
use crate::powers::PowerKind;
use crate::rules::TurnPhase;
use crate::structures::Structure;

/// Rule violations reported back to the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("cell ({row}, {col}) is outside the {dimension}x{dimension} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("cell {0} is occupied")]
    Occupied(Cell),

    #[error("cell {to} is not adjacent to {from}")]
    NotAdjacent { from: Cell, to: Cell },

    #[error("cannot climb from level {from} to level {to}")]
    HeightViolation { from: u8, to: u8 },

    #[error("a wall blocks cell {0}")]
    WallBlocked(Cell),

    #[error("cannot build on cell {0}")]
    NotBuildable(Cell),

    #[error("there is no wall to break at cell {0}")]
    NotAWall(Cell),

    #[error("that is not allowed during the {0} phase")]
    WrongPhase(TurnPhase),

    #[error("the worker at {0} is not yours")]
    NotYourActor(Cell),

    #[error("there is no worker at {0}")]
    NoActor(Cell),

    #[error("{0} is not on the board")]
    ActorNotPlaced(ActorId),

    #[error("there is no optional action to skip")]
    NoPendingSkip,

    #[error("you can't move back to the starting cell {0}")]
    ReturnToStart(Cell),

    #[error("cannot build on cell {0} again this turn")]
    SameBuildCell(Cell),

    #[error("{0} is not in the game")]
    UnknownPlayer(PlayerId),

    #[error("the game is over")]
    GameOver,
}

/// Invalid game construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a game needs exactly two players, got {0}")]
    PlayerCount(usize),

    #[error("board dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),

    #[error("each player needs at least one actor")]
    NoActors,

    #[error("power {0} is assigned to more than one player")]
    DuplicatePower(PowerKind),

    #[error("no unassigned power left to draw")]
    PowersExhausted,

    #[error("expected {expected} actor placements, got {got}")]
    PlacementCount { expected: usize, got: usize },

    #[error("placement {0} is outside the board")]
    PlacementOutOfBounds(Cell),

    #[error("placement {0} is already taken")]
    PlacementOccupied(Cell),

    #[error("placement {0} is on a wall or dome")]
    PlacementBlocked(Cell),

    #[error("structure at {0} is outside the board")]
    StructureOutOfBounds(Cell),

    #[error("{1} at {0} cannot be built")]
    InvalidStructure(Cell, Structure),

    #[error("{needed} actors do not fit on {available} cells")]
    NotEnoughCells { needed: usize, available: usize },
}
