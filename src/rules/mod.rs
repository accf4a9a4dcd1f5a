//! Turn state machine and game session.
//!
//! - [`Turn`] / [`TurnPhase`]: per-turn state, rebuilt every turn
//! - [`Game`]: the session object every inbound event goes through
//! - [`GameBuilder`]: validated setup with seeded random fill-in
//! - [`GameResult`]: winner and reason
//! - [`format_clock`]: countdown rendering helper

mod clock;
mod game;
mod result;
mod setup;
mod turn;

pub use clock::format_clock;
pub use game::Game;
pub use result::{GameResult, VictoryReason};
pub use setup::{GameBuilder, PLAYER_COUNT};
pub use turn::{Turn, TurnPhase};
