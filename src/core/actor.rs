//! Actor (worker) identification.
//!
//! An actor is an opaque token plus the player that owns it. It carries no
//! position: where an actor stands is answered by the board's occupancy
//! mapping, never by the actor itself.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially at setup, player by player:
//! with two actors each, player 0 owns `0, 1` and player 1 owns `2, 3`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Unique identifier for an actor within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Create an actor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// A worker piece and its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Identity token.
    pub id: ActorId,
    /// Owning player.
    pub owner: PlayerId,
    /// Position of this actor in its owner's roster (0-based).
    pub slot: u8,
}

impl Actor {
    /// Create an actor.
    #[must_use]
    pub const fn new(id: ActorId, owner: PlayerId, slot: u8) -> Self {
        Self { id, owner, slot }
    }

    /// Display label, e.g. `P1W2` for the second worker of the first player.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}W{}", self.owner, self.slot + 1)
    }
}
