//! Outbound callbacks to the presentation layer.
//!
//! The engine never renders anything. It reports what changed through a
//! [`GameObserver`] owned by the [`Game`](crate::rules::Game).

use serde::{Deserialize, Serialize};

/// Receiver for engine notifications. Every method defaults to a no-op.
pub trait GameObserver {
    /// Structures or occupancy changed; redraw the board.
    fn on_board_changed(&mut self) {}

    /// New status line for the active player.
    fn on_status(&mut self, _text: &str) {}

    /// An event was rejected. Called exactly once per rejection.
    fn on_error(&mut self, _message: &str) {}

    /// The game ended with `winner` (player name) victorious.
    fn on_game_over(&mut self, _winner: &str) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A single recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BoardChanged,
    Status(String),
    Error(String),
    GameOver { winner: String },
}

/// Observer that keeps every notification in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Most recent status line.
    #[must_use]
    pub fn last_status(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Status(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every error message, oldest first.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Error(msg) => Some(msg.as_str()),
            _ => None,
        })
    }

    /// Winner name, if the game-over callback fired.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            GameEvent::GameOver { winner } => Some(winner.as_str()),
            _ => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_board_changed(&mut self) {
        self.events.push(GameEvent::BoardChanged);
    }

    fn on_status(&mut self, text: &str) {
        self.events.push(GameEvent::Status(text.to_owned()));
    }

    fn on_error(&mut self, message: &str) {
        self.events.push(GameEvent::Error(message.to_owned()));
    }

    fn on_game_over(&mut self, winner: &str) {
        self.events.push(GameEvent::GameOver {
            winner: winner.to_owned(),
        });
    }
}
