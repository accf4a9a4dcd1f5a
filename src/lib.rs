//! # santorini-engine
//!
//! Rules engine for a two-player build-and-climb board game in the style of
//! Santorini, with per-player god powers and an optional wall track.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders or waits on input.
//!    A presentation layer forwards clicks and clock ticks into a [`Game`]
//!    and receives callbacks through a [`GameObserver`].
//!
//! 2. **Validate, Then Apply**: Every action is a pure check followed by a
//!    mutation. A rejected event leaves the session exactly as it was and
//!    reports one error.
//!
//! 3. **Explicit Session**: No global game. Each [`Game`] owns its board,
//!    players, clocks and history, so several can run side by side.
//!
//! ## Architecture
//!
//! - **Tagged Structures**: A cell holds `Empty`, `Tower { level }`, `Dome`
//!   or `Wall { phase }`; validators match on the tag.
//!
//! - **Stateless Powers**: Powers are strategies behind the [`Power`] trait.
//!   Per-turn bookkeeping lives on the [`Turn`], which is rebuilt every turn.
//!
//! - **Persistent History**: Applied actions go into an `im::Vector`.
//!
//! ## Modules
//!
//! - `core`: Cells, actors, players, configuration, RNG, errors
//! - `structures`: Structure variants and build modes
//! - `board`: Grid and actor ↔ cell occupancy
//! - `actions`: Move, Build and Break validators plus history records
//! - `powers`: The power trait and its four variants
//! - `rules`: Turn state machine, session, setup, clock
//! - `events`: Observer callbacks

pub mod actions;
pub mod board;
pub mod core;
pub mod events;
pub mod powers;
pub mod rules;
pub mod structures;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorId, Cell, GameConfig, GameRng, Player, PlayerId, PlayerMap,
    RuleError, SetupError,
};

pub use crate::structures::{BuildMode, Structure};

pub use crate::board::Board;

pub use crate::actions::{ActionKind, ActionRecord};

pub use crate::powers::{Power, PowerKind, TurnContext};

pub use crate::rules::{
    format_clock, Game, GameBuilder, GameResult, Turn, TurnPhase, VictoryReason,
};

pub use crate::events::{EventLog, GameEvent, GameObserver, NullObserver};
