//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryReason {
    /// An actor moved onto a level-3 tower.
    Summit,
    /// The opponent started a turn with no legal move.
    NoLegalMoves,
    /// The opponent's clock ran out.
    Timeout,
    /// The opponent resigned.
    Resignation,
}

impl std::fmt::Display for VictoryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            VictoryReason::Summit => "reached the third level",
            VictoryReason::NoLegalMoves => "opponent has no legal move",
            VictoryReason::Timeout => "opponent ran out of time",
            VictoryReason::Resignation => "opponent resigned",
        };
        f.write_str(text)
    }
}

/// Final result of a finished game. There are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: VictoryReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: PlayerId, reason: VictoryReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result() {
        let result = GameResult::new(PlayerId::new(1), VictoryReason::Timeout);
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.reason.to_string(), "opponent ran out of time");
    }

    #[test]
    fn test_result_serialization() {
        let result = GameResult::new(PlayerId::new(0), VictoryReason::Summit);
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
