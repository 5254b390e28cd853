//! Integration tests for the game engine lifecycle.

use trioline::{Game, GameStatus, MoveError, MoveOutcome, Outcome, Player, Square};

/// Plays a sequence of moves, asserting each one is accepted.
fn play(game: &mut Game, moves: &[usize]) -> MoveOutcome {
    let mut last = MoveOutcome::Ignored;
    for &pos in moves {
        last = game.apply_move(pos).expect("position in range");
        assert_ne!(last, MoveOutcome::Ignored, "move at {pos} was rejected");
    }
    last
}

#[test]
fn first_move_on_empty_board() {
    let mut game = Game::new();

    let outcome = game.apply_move(0).expect("valid position");

    assert_eq!(outcome, MoveOutcome::Placed);
    assert_eq!(game.state().board().get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(game.state().to_move(), Player::O);
    assert_eq!(game.state().status(), GameStatus::InProgress);
}

#[test]
fn top_row_win_ends_game_and_freezes_turn() {
    let mut game = Game::new();

    // X takes the top row while O fills the middle row.
    let last = play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(last, MoveOutcome::Ended(Outcome::Winner(Player::X)));
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    // Turn is frozen at the winner; the game is over so it never flipped.
    assert_eq!(game.state().to_move(), Player::X);
}

#[test]
fn full_board_with_no_line_is_a_draw() {
    let mut game = Game::new();

    // X: 0, 1, 5, 6, 8 - O: 2, 3, 4, 7. No three in a row anywhere.
    let last = play(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(last, MoveOutcome::Ended(Outcome::Draw));
    assert_eq!(game.state().status(), GameStatus::Draw);
}

#[test]
fn replaying_an_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.apply_move(0).expect("valid position");
    let snapshot = game.clone();

    let outcome = game.apply_move(0).expect("valid position");

    assert_eq!(outcome, MoveOutcome::Ignored);
    assert_eq!(game, snapshot);
}

#[test]
fn out_of_range_position_is_rejected_with_error() {
    let mut game = Game::new();
    let snapshot = game.clone();

    assert_eq!(game.apply_move(9), Err(MoveError::InvalidPosition(9)));
    assert_eq!(game.apply_move(usize::MAX), Err(MoveError::InvalidPosition(usize::MAX)));
    assert_eq!(game, snapshot);
}

#[test]
fn out_of_range_surfaces_even_after_game_over() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    // Contract violations are never downgraded to no-ops.
    assert_eq!(game.apply_move(12), Err(MoveError::InvalidPosition(12)));
}

#[test]
fn turns_alternate_on_accepted_moves() {
    let mut game = Game::new();
    let mut expected = Player::X;

    for pos in [4, 0, 8, 2, 6] {
        assert_eq!(game.state().to_move(), expected);
        let outcome = game.apply_move(pos).expect("valid position");
        if outcome == MoveOutcome::Placed {
            expected = expected.opponent();
        }
    }
}

#[test]
fn rejected_moves_do_not_consume_the_turn() {
    let mut game = Game::new();
    game.apply_move(4).expect("valid position");
    assert_eq!(game.state().to_move(), Player::O);

    // O fumbles onto the occupied center; it is still O's turn.
    game.apply_move(4).expect("valid position");
    assert_eq!(game.state().to_move(), Player::O);

    game.apply_move(0).expect("valid position");
    assert_eq!(game.state().board().get(0), Some(Square::Occupied(Player::O)));
}

#[test]
fn terminal_state_is_stable() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let finished = game.clone();

    for pos in 0..9 {
        assert_eq!(game.apply_move(pos), Ok(MoveOutcome::Ignored));
    }
    assert_eq!(game, finished);
}

#[test]
fn ended_signal_fires_exactly_once() {
    let mut game = Game::new();
    let mut signals = 0;

    for pos in [0, 3, 1, 4, 2, 5, 6, 7, 8] {
        if let MoveOutcome::Ended(_) = game.apply_move(pos).expect("valid position") {
            signals += 1;
        }
    }

    // Only the move that completed the top row signals; the trailing
    // inputs after the win are ignored.
    assert_eq!(signals, 1);
}

#[test]
fn reset_fires_no_signal_and_restores_initial_state() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));

    game.reset();

    assert_eq!(game, Game::new());
    assert_eq!(game.state().to_move(), Player::X);
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert!((0..9).all(|pos| game.state().board().is_empty(pos)));

    // The board is playable again and the next win signals again.
    assert_eq!(
        play(&mut game, &[0, 3, 1, 4, 2]),
        MoveOutcome::Ended(Outcome::Winner(Player::X))
    );
}

#[test]
fn reset_mid_game_abandons_progress() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);

    game.reset();

    assert_eq!(game, Game::new());
}

#[test]
fn o_can_win() {
    let mut game = Game::new();

    // X scatters; O takes the middle column.
    let last = play(&mut game, &[0, 1, 2, 4, 6, 7]);

    assert_eq!(last, MoveOutcome::Ended(Outcome::Winner(Player::O)));
    assert_eq!(game.state().status(), GameStatus::Won(Player::O));
    assert_eq!(game.state().to_move(), Player::O);
}

#[test]
fn outcome_helpers() {
    assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
    assert!(!Outcome::Winner(Player::X).is_draw());
    assert_eq!(Outcome::Draw.winner(), None);
    assert!(Outcome::Draw.is_draw());
}

#[test]
fn state_serializes_for_external_observers() {
    let mut game = Game::new();
    game.apply_move(4).expect("valid position");

    let json = serde_json::to_string(game.state()).expect("state serializes");
    assert!(json.contains("\"to_move\":\"O\""));

    let restored: trioline::GameState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(&restored, game.state());
}
