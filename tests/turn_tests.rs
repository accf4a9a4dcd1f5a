//! Turn state machine tests.
//!
//! These drive a full [`Game`] through clicks and check:
//! - Select → Move → Build → hand-off sequencing
//! - Winning by climbing to level 3
//! - Elimination of a player with no legal move, before selection
//! - Rejected events leave the session unchanged

use santorini_engine::actions::ActionKind;
use santorini_engine::core::{ActorId, Cell, PlayerId, RuleError};
use santorini_engine::events::{EventLog, GameEvent};
use santorini_engine::powers::PowerKind;
use santorini_engine::rules::{Game, GameBuilder, GameResult, TurnPhase, VictoryReason};
use santorini_engine::structures::{BuildMode, Structure};

const ROBBY: PlayerId = PlayerId(0);
const MIGUEL: PlayerId = PlayerId(1);

/// Two standard players. Robby: (0,0), (0,1). Miguel: (4,4), (4,3).
fn builder() -> GameBuilder {
    GameBuilder::new()
        .player_with_power("Robby", PowerKind::Standard)
        .player_with_power("Miguel", PowerKind::Standard)
        .placements(vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(4, 4),
            Cell::new(4, 3),
        ])
}

fn game() -> Game<EventLog> {
    builder().build(EventLog::new()).unwrap()
}

/// Callbacks for one complete turn arrive in order.
#[test]
fn test_turn_event_sequence() {
    let mut game = game();
    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 0).unwrap();
    game.on_cell_activated(2, 0).unwrap();

    assert_eq!(
        game.observer().events(),
        &[
            GameEvent::Status("Robby's turn - Select a worker".into()),
            GameEvent::Status("Robby's turn - Move phase".into()),
            GameEvent::BoardChanged,
            GameEvent::Status("Robby's turn - Build phase".into()),
            GameEvent::BoardChanged,
            GameEvent::Status("Miguel's turn - Select a worker".into()),
        ]
    );
    assert_eq!(game.active_player(), MIGUEL);
    assert_eq!(game.phase(), TurnPhase::Select);
}

/// Turns alternate and each turn's actions are recorded with their number.
#[test]
fn test_round_robin_and_history() {
    let mut game = game();

    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 1).unwrap();
    game.on_cell_activated(2, 2).unwrap();

    game.on_cell_activated(4, 4).unwrap();
    game.on_cell_activated(3, 3).unwrap();
    game.on_cell_activated(2, 2).unwrap();

    assert_eq!(game.active_player(), ROBBY);
    assert_eq!(game.turn().number(), 3);
    assert_eq!(game.board().structure_at(Cell::new(2, 2)), Structure::Tower { level: 2 });

    let history = game.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].player, ROBBY);
    assert_eq!(history[0].turn, 1);
    assert_eq!(
        history[0].action,
        ActionKind::Move {
            from: Cell::new(0, 0),
            to: Cell::new(1, 1)
        }
    );
    assert_eq!(history[1].sequence, 1);
    assert_eq!(history[2].player, MIGUEL);
    assert_eq!(history[2].actor, ActorId(2));
    assert_eq!(history[3].turn, 2);
}

/// Climbing onto a level-3 tower ends the game for the mover.
#[test]
fn test_win_by_summit() {
    let mut game = builder()
        .structure(Cell::new(0, 0), Structure::Tower { level: 2 })
        .structure(Cell::new(1, 1), Structure::Tower { level: 3 })
        .build(EventLog::new())
        .unwrap();

    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 1).unwrap();

    assert_eq!(game.result(), Some(&GameResult::new(ROBBY, VictoryReason::Summit)));
    assert_eq!(game.observer().winner(), Some("Robby"));
    assert!(!game.pending_optional_action());

    assert_eq!(game.on_cell_activated(2, 2), Err(RuleError::GameOver));
    assert_eq!(game.observer().errors().last(), Some("the game is over"));
}

/// Stepping down off a level-3 tower does not win; only the landing height counts.
#[test]
fn test_standing_on_level_three_is_not_enough() {
    let mut game = builder()
        .structure(Cell::new(0, 0), Structure::Tower { level: 3 })
        .build(EventLog::new())
        .unwrap();

    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 0).unwrap();

    assert!(!game.is_over());
    assert_eq!(game.phase(), TurnPhase::Build);
}

/// A player boxed in at game start loses before any click.
#[test]
fn test_no_legal_move_at_start() {
    let game = builder()
        .structure(Cell::new(0, 2), Structure::Wall { phase: 1 })
        .structure(Cell::new(1, 0), Structure::Wall { phase: 2 })
        .structure(Cell::new(1, 1), Structure::Tower { level: 2 })
        .structure(Cell::new(1, 2), Structure::Dome)
        .build(EventLog::new())
        .unwrap();

    assert_eq!(
        game.result(),
        Some(&GameResult::new(MIGUEL, VictoryReason::NoLegalMoves))
    );
    assert_eq!(game.observer().winner(), Some("Miguel"));
    assert!(game.history().is_empty());
}

/// The check runs when the turn begins, not when the player first clicks.
#[test]
fn test_no_legal_move_at_hand_off() {
    let mut game = builder()
        .structure(Cell::new(3, 2), Structure::Wall { phase: 2 })
        .structure(Cell::new(3, 3), Structure::Wall { phase: 2 })
        .structure(Cell::new(3, 4), Structure::Wall { phase: 2 })
        .structure(Cell::new(4, 2), Structure::Wall { phase: 2 })
        .build(EventLog::new())
        .unwrap();
    assert!(!game.is_over());
    assert!(!game.has_legal_move(MIGUEL));

    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 0).unwrap();
    game.on_cell_activated(2, 0).unwrap();

    assert_eq!(
        game.result(),
        Some(&GameResult::new(ROBBY, VictoryReason::NoLegalMoves))
    );
}

/// Each rejection reports exactly one error and changes nothing.
#[test]
fn test_rejection_leaves_state_unchanged() {
    let mut game = builder()
        .structure(Cell::new(1, 1), Structure::Tower { level: 2 })
        .build(EventLog::new())
        .unwrap();
    game.on_cell_activated(0, 0).unwrap();

    let board = game.board().clone();
    let turn = game.turn().clone();
    let errors_before = game.observer().errors().count();

    let attempts = [(1, 1), (3, 3), (7, 7)];
    for (row, col) in attempts {
        assert!(game.on_cell_activated(row, col).is_err());
    }
    assert_eq!(game.on_skip_requested(), Err(RuleError::NoPendingSkip));

    assert_eq!(game.board(), &board);
    assert_eq!(game.turn(), &turn);
    assert!(game.history().is_empty());
    assert_eq!(game.observer().errors().count(), errors_before + 4);
}

/// Wall mode builds walls, and a wall blocks the next move onto it.
#[test]
fn test_wall_build_blocks_movement() {
    let mut game = game();
    game.set_build_mode(BuildMode::Wall);

    game.on_cell_activated(0, 0).unwrap();
    game.on_cell_activated(1, 0).unwrap();
    game.on_cell_activated(2, 0).unwrap();
    assert_eq!(game.board().structure_at(Cell::new(2, 0)), Structure::Wall { phase: 1 });

    game.on_cell_activated(4, 4).unwrap();
    game.on_cell_activated(3, 3).unwrap();
    game.on_cell_activated(3, 2).unwrap();

    game.on_cell_activated(1, 0).unwrap();
    assert_eq!(
        game.on_cell_activated(2, 0),
        Err(RuleError::WallBlocked(Cell::new(2, 0)))
    );

    game.set_build_mode(BuildMode::Break);
    game.on_cell_activated(2, 1).unwrap();
    game.on_cell_activated(2, 0).unwrap();
    assert_eq!(game.board().structure_at(Cell::new(2, 0)), Structure::Empty);
}
