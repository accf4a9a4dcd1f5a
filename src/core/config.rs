//! Game configuration.
//!
//! The defaults reproduce the physical game: a 5×5 board, two workers per
//! player, and a five-minute time bank each. The seed only affects random
//! setup (placement and power assignment).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default side length of the square board.
pub const DEFAULT_DIMENSION: usize = 5;

/// Default number of actors each player controls.
pub const DEFAULT_ACTORS_PER_PLAYER: usize = 2;

/// Default per-player time bank.
pub const DEFAULT_TIME_BANK: Duration = Duration::from_secs(5 * 60);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub dimension: usize,

    /// Actors placed for each player at setup.
    pub actors_per_player: usize,

    /// Countdown each player starts with. Only runs on that player's turn.
    pub time_bank: Duration,

    /// Seed for random placement and power assignment.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            actors_per_player: DEFAULT_ACTORS_PER_PLAYER,
            time_bank: DEFAULT_TIME_BANK,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the number of actors per player.
    #[must_use]
    pub fn with_actors_per_player(mut self, count: usize) -> Self {
        self.actors_per_player = count;
        self
    }

    /// Set the per-player time bank.
    #[must_use]
    pub fn with_time_bank(mut self, time_bank: Duration) -> Self {
        self.time_bank = time_bank;
        self
    }

    /// Set the setup seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }
}
