//! Power strategy trait and the context it operates on.
//!
//! A power interprets a clicked cell against the current turn phase. It runs
//! actions through [`TurnContext`] and picks the next phase. Powers are
//! stateless: everything a power needs to remember within a turn (start
//! cell, first build cell) lives on the [`Turn`], which is rebuilt for every
//! turn.
//!
//! The trait's default methods are the standard rules (one move, then one
//! build). Variants override only what they change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{ExtraBuild, ExtraMove, PerimeterMove, Standard};
use crate::actions::{
    ActionKind, ActionRecord, BoardAction, BuildAction, MoveAction, MoveOutcome, StructureChange,
};
use crate::board::Board;
use crate::core::{ActorId, Cell, PlayerId, RuleError};
use crate::rules::{Turn, TurnPhase};
use crate::structures::BuildMode;

/// Identifies a power variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    /// No special ability.
    Standard,
    /// Optional second move, not back to the starting cell.
    ExtraMove,
    /// Optional second build, not on the same cell.
    ExtraBuild,
    /// Optional extra move after every move onto the perimeter.
    PerimeterMove,
}

impl PowerKind {
    /// The powers drawn from during random assignment.
    pub const SPECIAL: [PowerKind; 3] = [
        PowerKind::ExtraMove,
        PowerKind::ExtraBuild,
        PowerKind::PerimeterMove,
    ];

    /// Card name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PowerKind::Standard => "Mortal",
            PowerKind::ExtraMove => "Artemis",
            PowerKind::ExtraBuild => "Demeter",
            PowerKind::PerimeterMove => "Triton",
        }
    }

    /// Card text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PowerKind::Standard => "No special ability.",
            PowerKind::ExtraMove => {
                "Your worker may move one additional time, but not back to its initial space."
            }
            PowerKind::ExtraBuild => {
                "Your worker may build one additional time, but not on the same space."
            }
            PowerKind::PerimeterMove => {
                "Each time your worker moves into a perimeter space, it may immediately move again."
            }
        }
    }

    /// Create the strategy object for this power.
    #[must_use]
    pub fn instantiate(self) -> Box<dyn Power> {
        match self {
            PowerKind::Standard => Box::new(Standard),
            PowerKind::ExtraMove => Box::new(ExtraMove),
            PowerKind::ExtraBuild => Box::new(ExtraBuild),
            PowerKind::PerimeterMove => Box::new(PerimeterMove),
        }
    }
}

impl std::fmt::Display for PowerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player move/build strategy.
pub trait Power: std::fmt::Debug {
    /// Which variant this is.
    fn kind(&self) -> PowerKind;

    /// Interpret a click during a move phase.
    fn handle_move(&self, ctx: &mut TurnContext<'_>, target: Cell) -> Result<(), RuleError> {
        ctx.expect_phase(TurnPhase::Move)?;
        ctx.move_selected(target)?;
        ctx.set_phase(TurnPhase::Build);
        Ok(())
    }

    /// Interpret a click during a build phase.
    fn handle_build(&self, ctx: &mut TurnContext<'_>, target: Cell) -> Result<(), RuleError> {
        ctx.expect_phase(TurnPhase::Build)?;
        ctx.build_selected(target)?;
        ctx.set_phase(TurnPhase::Complete);
        Ok(())
    }

    /// Decline the pending optional action.
    fn skip(&self, _ctx: &mut TurnContext<'_>) -> Result<(), RuleError> {
        Err(RuleError::NoPendingSkip)
    }
}

/// Mutable view of one player's turn, handed to a [`Power`].
///
/// Every action goes through [`BoardAction::execute`], so a failed call
/// leaves the board, the turn and the history exactly as they were.
pub struct TurnContext<'a> {
    board: &'a mut Board,
    turn: &'a mut Turn,
    history: &'a mut Vector<ActionRecord>,
    player: PlayerId,
    mode: BuildMode,
}

impl<'a> TurnContext<'a> {
    /// Bundle the pieces of game state a power may touch.
    pub fn new(
        board: &'a mut Board,
        turn: &'a mut Turn,
        history: &'a mut Vector<ActionRecord>,
        player: PlayerId,
        mode: BuildMode,
    ) -> Self {
        Self {
            board,
            turn,
            history,
            player,
            mode,
        }
    }

    /// Read-only board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Read-only turn bookkeeping.
    #[must_use]
    pub fn turn(&self) -> &Turn {
        self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Active build mode.
    #[must_use]
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Fail with `WrongPhase` unless the turn is in `phase`.
    pub fn expect_phase(&self, phase: TurnPhase) -> Result<(), RuleError> {
        if self.turn.phase() == phase {
            Ok(())
        } else {
            Err(RuleError::WrongPhase(self.turn.phase()))
        }
    }

    /// Transition to `phase`.
    pub fn set_phase(&mut self, phase: TurnPhase) {
        tracing::debug!(player = %self.player, from = %self.turn.phase(), to = %phase, "phase change");
        self.turn.set_phase(phase);
    }

    /// The actor chosen for this turn.
    pub fn actor(&self) -> Result<ActorId, RuleError> {
        self.turn
            .selected()
            .ok_or(RuleError::WrongPhase(TurnPhase::Select))
    }

    /// Move the selected actor to `target`.
    pub fn move_selected(&mut self, target: Cell) -> Result<MoveOutcome, RuleError> {
        let actor = self.actor()?;
        let outcome = MoveAction::new(actor, target).execute(self.board)?;

        tracing::debug!(
            player = %self.player,
            actor = %actor,
            from = %outcome.from,
            to = %outcome.to,
            height = outcome.height,
            "move applied"
        );

        self.turn.record_move(outcome);
        self.push_record(
            actor,
            ActionKind::Move {
                from: outcome.from,
                to: outcome.to,
            },
        );
        Ok(outcome)
    }

    /// Build next to the selected actor using the active build mode.
    pub fn build_selected(&mut self, target: Cell) -> Result<StructureChange, RuleError> {
        let actor = self.actor()?;
        let change = BuildAction::new(actor, target, self.mode).execute(self.board)?;

        tracing::debug!(
            player = %self.player,
            actor = %actor,
            cell = %change.cell,
            mode = %self.mode,
            before = %change.before,
            after = %change.after,
            "build applied"
        );

        self.turn.record_build(change.cell);
        self.push_record(
            actor,
            ActionKind::Build {
                cell: change.cell,
                mode: self.mode,
                before: change.before,
                after: change.after,
            },
        );
        Ok(change)
    }

    fn push_record(&mut self, actor: ActorId, action: ActionKind) {
        let sequence = self.turn.next_sequence();
        self.history.push_back(ActionRecord::new(
            self.player,
            actor,
            action,
            self.turn.number(),
            sequence,
        ));
    }
}
