//! Per-turn state.
//!
//! A [`Turn`] is created fresh when a player's turn begins and dropped when
//! it ends. It holds the phase, the selected actor, and the bookkeeping the
//! powers consult (start cell, first build cell, move count).

use serde::{Deserialize, Serialize};

use crate::actions::MoveOutcome;
use crate::core::{ActorId, Cell};

/// Step of a player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the player to pick one of their actors.
    #[default]
    Select,
    /// Waiting for a move target.
    Move,
    /// Optional extra move offered by a power.
    ExtraMove,
    /// Waiting for a build target.
    Build,
    /// Optional extra build offered by a power.
    ExtraBuild,
    /// Turn finished, control passes on.
    Complete,
}

impl TurnPhase {
    /// True while a power offers an action the player may skip.
    #[must_use]
    pub fn is_optional(self) -> bool {
        matches!(self, TurnPhase::ExtraMove | TurnPhase::ExtraBuild)
    }

    /// True for phases that take a move target.
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, TurnPhase::Move | TurnPhase::ExtraMove)
    }

    /// True for phases that take a build target.
    #[must_use]
    pub fn is_build(self) -> bool {
        matches!(self, TurnPhase::Build | TurnPhase::ExtraBuild)
    }

    /// Status suffix shown after the player's name.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            TurnPhase::Select => "Select a worker",
            TurnPhase::Move => "Move phase",
            TurnPhase::ExtraMove => "Extra move (optional)",
            TurnPhase::Build => "Build phase",
            TurnPhase::ExtraBuild => "Extra build (optional)",
            TurnPhase::Complete => "Turn complete",
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Select => "Select",
            TurnPhase::Move => "Move",
            TurnPhase::ExtraMove => "Extra move",
            TurnPhase::Build => "Build",
            TurnPhase::ExtraBuild => "Extra build",
            TurnPhase::Complete => "Complete",
        };
        f.write_str(name)
    }
}

/// Ephemeral state of the turn in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    number: u32,
    phase: TurnPhase,
    selected: Option<ActorId>,
    /// Cell the selected actor stood on before its first move.
    start_cell: Option<Cell>,
    first_build: Option<Cell>,
    moves_made: u8,
    builds_made: u8,
    summit_reached: bool,
    sequence: u32,
}

impl Turn {
    /// Start turn `number` in the selection phase.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            phase: TurnPhase::Select,
            selected: None,
            start_cell: None,
            first_build: None,
            moves_made: 0,
            builds_made: 0,
            summit_reached: false,
            sequence: 0,
        }
    }

    /// Global 1-based turn number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn selected(&self) -> Option<ActorId> {
        self.selected
    }

    /// Choose the actor for this turn and wait for a move.
    pub fn select(&mut self, actor: ActorId) {
        self.selected = Some(actor);
        self.phase = TurnPhase::Move;
    }

    /// True until the first move lands. Reselection is only allowed then.
    #[must_use]
    pub fn can_reselect(&self) -> bool {
        self.phase == TurnPhase::Move && self.moves_made == 0
    }

    #[must_use]
    pub fn start_cell(&self) -> Option<Cell> {
        self.start_cell
    }

    #[must_use]
    pub fn first_build(&self) -> Option<Cell> {
        self.first_build
    }

    #[must_use]
    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }

    #[must_use]
    pub fn builds_made(&self) -> u8 {
        self.builds_made
    }

    /// True once a move this turn landed on a level-3 tower.
    #[must_use]
    pub fn summit_reached(&self) -> bool {
        self.summit_reached
    }

    /// True while an optional extra action is on offer.
    #[must_use]
    pub fn pending_optional_action(&self) -> bool {
        self.phase.is_optional()
    }

    pub(crate) fn record_move(&mut self, outcome: MoveOutcome) {
        if self.moves_made == 0 {
            self.start_cell = Some(outcome.from);
        }
        self.moves_made = self.moves_made.saturating_add(1);
        self.summit_reached |= outcome.reached_summit();
    }

    pub(crate) fn record_build(&mut self, cell: Cell) {
        if self.builds_made == 0 {
            self.first_build = Some(cell);
        }
        self.builds_made = self.builds_made.saturating_add(1);
    }

    /// Hand out the next in-turn sequence number.
    pub(crate) fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn_awaits_selection() {
        let turn = Turn::new(4);
        assert_eq!(turn.number(), 4);
        assert_eq!(turn.phase(), TurnPhase::Select);
        assert_eq!(turn.selected(), None);
        assert!(!turn.pending_optional_action());
        assert!(!turn.can_reselect());
    }

    #[test]
    fn test_select_and_record() {
        let mut turn = Turn::new(1);
        turn.select(ActorId(3));
        assert_eq!(turn.phase(), TurnPhase::Move);
        assert!(turn.can_reselect());

        turn.record_move(MoveOutcome {
            from: Cell::new(1, 1),
            to: Cell::new(1, 2),
            height: 0,
        });
        turn.record_move(MoveOutcome {
            from: Cell::new(1, 2),
            to: Cell::new(1, 3),
            height: 3,
        });
        assert_eq!(turn.start_cell(), Some(Cell::new(1, 1)));
        assert_eq!(turn.moves_made(), 2);
        assert!(turn.summit_reached());
        assert!(!turn.can_reselect());

        turn.record_build(Cell::new(0, 0));
        turn.record_build(Cell::new(0, 1));
        assert_eq!(turn.first_build(), Some(Cell::new(0, 0)));
        assert_eq!(turn.builds_made(), 2);
    }

    #[test]
    fn test_phase_texts() {
        assert_eq!(TurnPhase::Build.to_string(), "Build");
        assert_eq!(TurnPhase::ExtraMove.prompt(), "Extra move (optional)");
        assert!(TurnPhase::ExtraBuild.is_optional());
        assert!(TurnPhase::ExtraMove.is_move());
        assert!(!TurnPhase::Select.is_build());
    }

    #[test]
    fn test_sequence_numbers() {
        let mut turn = Turn::new(1);
        assert_eq!(turn.next_sequence(), 0);
        assert_eq!(turn.next_sequence(), 1);
    }
}
