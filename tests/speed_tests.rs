//! Speed tests - line tally driving the session timers

use monstro::core::{speed_up, Board, GameState, LineTally, Piece};
use monstro::types::{Actions, PieceKind, Rotation, Tuning, FULL_ROW};

#[test]
fn test_speed_up_halves_gravity_and_trims_lock_delay() {
    let tuning = speed_up(Tuning::default());
    assert_eq!(tuning.drop_limit, 32);
    assert_eq!(tuning.snap_limit, 57);
    let tuning = speed_up(tuning);
    assert_eq!(tuning.drop_limit, 16);
    assert_eq!(tuning.snap_limit, 50);
}

#[test]
fn test_apply_updates_session_after_eleven_lines() {
    let mut state = GameState::new(5);
    let mut tally = LineTally::new();
    let four = Actions::from_cleared_mask(0b1111);

    assert!(!tally.apply(&mut state, four));
    assert!(!tally.apply(&mut state, four));
    assert!(!tally.apply(&mut state, Actions::from_cleared_mask(0b1001)));
    assert_eq!(state.tuning(), Tuning::default());

    assert!(tally.apply(&mut state, Actions::from_cleared_mask(0b0010)));
    assert_eq!(state.tuning().drop_limit, 32);
    assert_eq!(state.tuning().snap_limit, 57);
    assert_eq!(state.tuning().move_limit, 64);
    assert_eq!(tally.total(), 11);
    assert_eq!(tally.level(), 1);
}

#[test]
fn test_ticks_without_clears_do_not_count() {
    let mut state = GameState::new(5);
    let mut tally = LineTally::new();
    for _ in 0..200 {
        let actions = state.tick();
        assert!(!tally.apply(&mut state, actions));
    }
    assert_eq!(tally.total(), 0);
}

#[test]
fn test_faster_gravity_after_speed_up() {
    let tuning = speed_up(Tuning::default());
    let mut state = GameState::from_parts(
        Board::new(),
        Piece::at(PieceKind::T, Rotation::North, 6, 10),
        tuning,
        1,
    )
    .expect("piece fits");

    let first_drop = (1..=100).find(|_| state.tick().contains(Actions::DROP));
    assert_eq!(first_drop, Some(33));
}

#[test]
fn test_cleared_rows_from_real_lock_are_tallied() {
    let mut board = Board::new();
    for y in 1..=4 {
        board.set_row(y, FULL_ROW & !(1 << 7));
    }
    let mut state = GameState::from_parts(
        board,
        Piece::at(PieceKind::I, Rotation::East, 6, 1),
        Tuning::default(),
        1,
    )
    .expect("piece fits");
    let mut tally = LineTally::new();

    loop {
        let actions = state.tick();
        tally.apply(&mut state, actions);
        if actions.contains(Actions::SNAP) {
            break;
        }
    }
    assert_eq!(tally.total(), 4);
    assert_eq!(tally.pending(), 4);
}
