//! Tests for local session management over the engine contract.

use std::sync::Arc;

use arena_engine::{
    Connect4Engine, Connect4Move, GameEngine, GameState, LocalGame, Outcome, Player, Position,
    SessionError, TicTacToeEngine,
};

type Connect4Game<E = Connect4Engine> =
    LocalGame<arena_engine::Connect4State, Connect4Move, E>;

fn play(game: &mut Connect4Game, cols: &[i32]) {
    for &col in cols {
        game.make_move(Connect4Move::new(col)).expect("legal move");
    }
}

#[test]
fn test_turn_enforcement_leaves_state_unchanged() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[3, 4]);
    let before = game.game_state().clone();

    let err = game
        .make_move_as(Connect4Move::new(0), Player::B)
        .unwrap_err();

    assert_eq!(err, SessionError::NotYourTurn(Player::B));
    assert_eq!(err.to_string(), "It's not player b's turn");
    assert_eq!(game.game_state(), &before);
}

#[test]
fn test_make_move_as_current_player() {
    let mut game = LocalGame::new(Connect4Engine);
    game.make_move_as(Connect4Move::new(2), Player::A).unwrap();
    game.make_move_as(Connect4Move::new(2), Player::B).unwrap();
    assert_eq!(game.current_player(), Player::A);
    assert_eq!(game.move_history().len(), 2);
}

#[test]
fn test_invalid_move_leaves_state_unchanged() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[0, 0, 0, 0, 0, 0]);
    let before = game.game_state().clone();

    let err = game.make_move(Connect4Move::new(0)).unwrap_err();

    assert_eq!(err, SessionError::InvalidMove("Column 0 is full".to_string()));
    assert_eq!(game.game_state(), &before);

    // The session stays usable.
    game.make_move(Connect4Move::new(1)).unwrap();
    assert_eq!(game.move_history().len(), 7);
}

#[test]
fn test_win_completes_game() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

    assert!(game.is_game_complete());
    assert_eq!(game.winner(), Some(Outcome::Winner(Player::A)));
    assert_eq!(game.current_player(), Player::B);

    let before = game.game_state().clone();
    let err = game.make_move(Connect4Move::new(5)).unwrap_err();
    assert_eq!(err, SessionError::GameComplete);
    assert_eq!(game.game_state(), &before);
}

#[test]
fn test_turn_checked_before_completion() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

    let err = game
        .make_move_as(Connect4Move::new(5), Player::A)
        .unwrap_err();
    assert_eq!(err, SessionError::NotYourTurn(Player::A));
}

#[test]
fn test_undo_matches_replay_of_prefix() {
    let cols = [3, 3, 4, 2, 5, 6, 0, 3];
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &cols);

    let history = game.move_history().to_vec();
    game.undo_last_move().unwrap();

    let expected =
        LocalGame::from_history(Connect4Engine, history[..history.len() - 1].to_vec()).unwrap();
    assert_eq!(game.game_state(), expected.game_state());

    let mut fresh = LocalGame::new(Connect4Engine);
    play(&mut fresh, &cols[..cols.len() - 1]);
    assert_eq!(
        game.game_state().board_state(),
        fresh.game_state().board_state()
    );
    assert_eq!(game.current_player(), Player::B);
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
    assert!(game.is_game_complete());

    game.undo_last_move().unwrap();

    assert!(!game.is_game_complete());
    assert_eq!(game.current_player(), Player::A);
    game.make_move(Connect4Move::new(6)).unwrap();
    assert_eq!(game.winner(), None);
}

#[test]
fn test_undo_everything() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[1, 2, 3]);
    while game.can_undo() {
        game.undo_last_move().unwrap();
    }
    assert_eq!(game.game_state(), &GameState::new(Connect4Engine.initial_state()));
}

#[test]
fn test_reset_returns_to_start() {
    let initial = GameState::new(Connect4Engine.initial_state());

    let mut game = LocalGame::new(Connect4Engine);
    game.reset_game();
    assert_eq!(game.game_state(), &initial);

    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
    game.reset_game();
    assert_eq!(game.game_state(), &initial);
    assert_eq!(game.current_player(), Player::A);
    assert!(!game.can_undo());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_sessions_share_one_engine() {
    let engine = Arc::new(Connect4Engine);

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let mut game: Connect4Game<Arc<Connect4Engine>> = LocalGame::new(engine);
                for col in [offset, offset, offset] {
                    game.make_move(Connect4Move::new(col)).unwrap();
                }
                game.game_state().board_state().clone()
            })
        })
        .collect();

    for (offset, handle) in handles.into_iter().enumerate() {
        let board = handle.join().unwrap();
        assert_eq!(board.legal_columns().len(), 7);
        assert_eq!(board.drop_row(offset), Some(2));
    }
}

#[test]
fn test_borrowed_engine_drives_two_sessions() {
    let engine = Connect4Engine;
    let mut first: Connect4Game<&Connect4Engine> = LocalGame::new(&engine);
    let mut second: Connect4Game<&Connect4Engine> = LocalGame::new(&engine);

    first.make_move(Connect4Move::new(0)).unwrap();
    second.reset_game();

    assert!(first.can_undo());
    assert!(!second.can_undo());
    assert_ne!(
        first.game_state().board_state(),
        second.game_state().board_state()
    );
}

#[test]
fn test_tictactoe_through_session() {
    let mut game = LocalGame::new(TicTacToeEngine);
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
    ] {
        game.make_move(pos).unwrap();
    }

    let err = game.make_move(Position::Center).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidMove("Square Center is already occupied".to_string())
    );

    game.make_move(Position::TopRight).unwrap();
    assert_eq!(game.winner(), Some(Outcome::Winner(Player::A)));
    assert!(game.state_string().starts_with("A|A|A"));

    game.undo_last_move().unwrap();
    assert_eq!(game.current_player(), Player::A);
    assert!(!game.is_game_complete());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = LocalGame::new(Connect4Engine);
    play(&mut game, &[3, 3, 2]);

    let json = serde_json::to_string(game.game_state()).unwrap();
    let restored: GameState<arena_engine::Connect4State, Connect4Move> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.game_state());
    assert!(json.contains("\"current_player\":\"b\""));

    let rebuilt = LocalGame::from_history(Connect4Engine, restored.move_history().to_vec()).unwrap();
    assert_eq!(rebuilt.game_state(), game.game_state());
}
