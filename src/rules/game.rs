//! The game session: turn state machine and inbound event handling.
//!
//! ## Event flow
//!
//! The presentation layer calls one of the `on_*` entry points. The session
//! resolves it against the current [`TurnPhase`]: selection is handled
//! here, moves and builds are delegated to the active player's [`Power`].
//! A rejected event returns its [`RuleError`], reports it once through
//! [`GameObserver::on_error`], and leaves the session untouched.
//!
//! ## Turn lifecycle
//!
//! Every turn starts with the no-legal-move check. A player who cannot move
//! any actor loses before selecting. Once a power reports
//! [`TurnPhase::Complete`], control passes round-robin to the next active
//! player and a fresh [`Turn`] begins.
//!
//! ## Out-of-band events
//!
//! Timeouts and resignations are accepted in any phase. They preempt any
//! pending optional action and remove the player from the rotation without
//! skipping or repeating anyone else.

use std::time::Duration;

use im::Vector;

use super::result::{GameResult, VictoryReason};
use super::turn::{Turn, TurnPhase};
use crate::actions::{legal_destinations, ActionRecord};
use crate::board::Board;
use crate::core::{Actor, ActorId, Cell, GameConfig, Player, PlayerId, PlayerMap, RuleError};
use crate::events::{GameObserver, NullObserver};
use crate::powers::{Power, TurnContext};
use crate::structures::BuildMode;

/// A running game.
pub struct Game<O: GameObserver = NullObserver> {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    /// Indexed by `ActorId`.
    actors: Vec<Actor>,
    /// Players still in the rotation, in turn order.
    active: Vec<PlayerId>,
    /// Index into `active`.
    current: usize,
    turn: Turn,
    turn_number: u32,
    build_mode: BuildMode,
    clocks: PlayerMap<Duration>,
    history: Vector<ActionRecord>,
    result: Option<GameResult>,
    observer: O,
}

impl<O: GameObserver> Game<O> {
    /// Assemble a session from validated setup and start the first turn.
    pub(crate) fn new(
        config: GameConfig,
        board: Board,
        players: PlayerMap<Player>,
        actors: Vec<Actor>,
        observer: O,
    ) -> Self {
        let clocks = PlayerMap::with_value(players.player_count(), config.time_bank);
        let active = players.player_ids().collect();

        let mut game = Self {
            config,
            board,
            players,
            actors,
            active,
            current: 0,
            turn: Turn::new(1),
            turn_number: 1,
            build_mode: BuildMode::Normal,
            clocks,
            history: Vector::new(),
            result: None,
            observer,
        };
        game.begin_turn();
        game
    }

    // === Inbound events ===

    /// A board cell was clicked.
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> Result<(), RuleError> {
        let outcome = self.activate(row, col);
        self.report(outcome)
    }

    /// The player declined the pending optional action.
    pub fn on_skip_requested(&mut self) -> Result<(), RuleError> {
        let outcome = self.skip();
        self.report(outcome)
    }

    /// `player`'s countdown reached zero. They lose immediately.
    pub fn on_time_expired(&mut self, player: PlayerId) -> Result<(), RuleError> {
        let outcome = self.ensure_active(player);
        if outcome.is_ok() {
            tracing::info!(player = %player, "time expired");
            self.clocks[player] = Duration::ZERO;
            self.remove_player(player, VictoryReason::Timeout);
        }
        self.report(outcome)
    }

    /// `player` gave up.
    pub fn on_resign(&mut self, player: PlayerId) -> Result<(), RuleError> {
        let outcome = self.ensure_active(player);
        if outcome.is_ok() {
            tracing::info!(player = %player, "player resigned");
            self.remove_player(player, VictoryReason::Resignation);
        }
        self.report(outcome)
    }

    /// Advance the active player's clock by `elapsed`.
    ///
    /// Saturates at zero and delivers the timeout itself. Ignored once the
    /// game is over.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.is_over() {
            return;
        }
        let player = self.active_player();
        let remaining = self.clocks[player].saturating_sub(elapsed);
        self.clocks[player] = remaining;

        if remaining.is_zero() {
            // The player is active, so this cannot be rejected.
            let _ = self.on_time_expired(player);
        }
    }

    /// Switch the build mode used by subsequent builds.
    pub fn set_build_mode(&mut self, mode: BuildMode) {
        tracing::debug!(mode = %mode, "build mode changed");
        self.build_mode = mode;
        self.observer.on_status(&format!("Mode: {}", mode.label()));
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Look up an actor by id.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.raw() as usize)
    }

    /// Players still in the rotation, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Whose turn it is. After game over, the winner.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active[self.current]
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// True while the presentation layer should offer a skip control.
    #[must_use]
    pub fn pending_optional_action(&self) -> bool {
        !self.is_over() && self.turn.pending_optional_action()
    }

    /// Remaining countdown for `player`.
    #[must_use]
    pub fn remaining_time(&self, player: PlayerId) -> Option<Duration> {
        self.clocks.get(player).copied()
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Status line for the current phase.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.result {
            Some(result) => format!("{} wins - {}", self.name_of(result.winner), result.reason),
            None => format!(
                "{}'s turn - {}",
                self.name_of(self.active_player()),
                self.turn.phase().prompt()
            ),
        }
    }

    /// True when `player` has at least one legal move with any actor.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId) -> bool {
        self.players.get(player).is_some_and(|p| {
            p.actors()
                .iter()
                .any(|&actor| !legal_destinations(&self.board, actor).is_empty())
        })
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // === Event handling ===

    fn activate(&mut self, row: usize, col: usize) -> Result<(), RuleError> {
        self.ensure_running()?;
        let cell = self.board.cell_at(row, col)?;

        match self.turn.phase() {
            TurnPhase::Select => self.select(cell),
            TurnPhase::Move if self.turn.can_reselect() && self.owns_actor_at(cell) => {
                self.select(cell)
            }
            phase if phase.is_move() => {
                self.run_power(|power, ctx| power.handle_move(ctx, cell))?;
                self.observer.on_board_changed();
                self.advance();
                Ok(())
            }
            phase if phase.is_build() => {
                self.run_power(|power, ctx| power.handle_build(ctx, cell))?;
                self.observer.on_board_changed();
                self.advance();
                Ok(())
            }
            phase => Err(RuleError::WrongPhase(phase)),
        }
    }

    fn skip(&mut self) -> Result<(), RuleError> {
        self.ensure_running()?;
        if !self.turn.pending_optional_action() {
            return Err(RuleError::NoPendingSkip);
        }
        self.run_power(|power, ctx| power.skip(ctx))?;
        self.advance();
        Ok(())
    }

    fn select(&mut self, cell: Cell) -> Result<(), RuleError> {
        let player = self.active_player();
        let actor = self
            .board
            .occupant_of(cell)
            .ok_or(RuleError::NoActor(cell))?;
        if !self.players[player].owns(actor) {
            return Err(RuleError::NotYourActor(cell));
        }

        self.turn.select(actor);
        self.players[player].set_turn_in_progress(true);
        tracing::debug!(player = %player, actor = %actor, cell = %cell, "actor selected");
        self.emit_status();
        Ok(())
    }

    fn owns_actor_at(&self, cell: Cell) -> bool {
        self.board
            .occupant_of(cell)
            .and_then(|actor| self.actor(actor))
            .is_some_and(|actor| actor.owner == self.active_player())
    }

    /// Hand the active player's power a context over the session state.
    fn run_power(
        &mut self,
        f: impl FnOnce(&dyn Power, &mut TurnContext<'_>) -> Result<(), RuleError>,
    ) -> Result<(), RuleError> {
        let player = self.active_player();
        let power = self.players[player].power();
        let mut ctx = TurnContext::new(
            &mut self.board,
            &mut self.turn,
            &mut self.history,
            player,
            self.build_mode,
        );
        f(power, &mut ctx)
    }

    /// Check for a win, then either end the turn or announce the new phase.
    fn advance(&mut self) {
        let player = self.active_player();
        if self.turn.summit_reached() {
            self.finish(player, VictoryReason::Summit);
        } else if self.turn.phase() == TurnPhase::Complete {
            self.end_turn();
        } else {
            self.emit_status();
        }
    }

    fn end_turn(&mut self) {
        let player = self.active_player();
        self.players[player].set_turn_in_progress(false);
        self.current = (self.current + 1) % self.active.len();
        self.turn_number += 1;
        tracing::info!(from = %player, to = %self.active_player(), turn = self.turn_number, "turn handed off");
        self.begin_turn();
    }

    /// Start a fresh turn for the active player, eliminating them if stuck.
    fn begin_turn(&mut self) {
        self.turn = Turn::new(self.turn_number);
        let player = self.active_player();

        if self.has_legal_move(player) {
            tracing::debug!(player = %player, turn = self.turn_number, "turn started");
            self.emit_status();
        } else {
            tracing::info!(player = %player, "no legal move, player eliminated");
            self.remove_player(player, VictoryReason::NoLegalMoves);
        }
    }

    /// Drop `player` from the rotation. `reason` credits the last survivor.
    fn remove_player(&mut self, player: PlayerId, reason: VictoryReason) {
        let Some(pos) = self.active.iter().position(|&p| p == player) else {
            return;
        };
        let was_current = pos == self.current;

        self.active.remove(pos);
        self.players[player].set_turn_in_progress(false);
        if pos < self.current {
            self.current -= 1;
        }
        if self.current >= self.active.len() {
            self.current = 0;
        }

        if let [winner] = self.active[..] {
            self.finish(winner, reason);
        } else if was_current {
            self.turn_number += 1;
            self.begin_turn();
        }
    }

    fn finish(&mut self, winner: PlayerId, reason: VictoryReason) {
        for id in self.players.player_ids().collect::<Vec<_>>() {
            self.players[id].set_turn_in_progress(false);
        }
        self.result = Some(GameResult::new(winner, reason));

        let name = self.name_of(winner).to_owned();
        tracing::info!(winner = %winner, player_name = %name, reason = %reason, "game over");
        self.observer.on_game_over(&name);
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        if self.is_over() {
            Err(RuleError::GameOver)
        } else {
            Ok(())
        }
    }

    fn ensure_active(&self, player: PlayerId) -> Result<(), RuleError> {
        self.ensure_running()?;
        if self.active.contains(&player) {
            Ok(())
        } else {
            Err(RuleError::UnknownPlayer(player))
        }
    }

    /// Forward a rejection to the observer, exactly once.
    fn report(&mut self, outcome: Result<(), RuleError>) -> Result<(), RuleError> {
        if let Err(err) = &outcome {
            tracing::debug!(error = %err, phase = %self.turn.phase(), "event rejected");
            self.observer.on_error(&err.to_string());
        }
        outcome
    }

    fn emit_status(&mut self) {
        let text = self.status_text();
        self.observer.on_status(&text);
    }

    fn name_of(&self, player: PlayerId) -> &str {
        self.players.get(player).map_or("", Player::name)
    }
}
