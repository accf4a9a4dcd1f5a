//! Core engine types: cells, actors, players, configuration, RNG, errors.
//!
//! These are the identities and value types every other module builds on.
//! None of them hold game state on their own.

pub mod actor;
pub mod cell;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use actor::{Actor, ActorId};
pub use cell::Cell;
pub use config::GameConfig;
pub use error::{RuleError, SetupError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
