//! Snapshot module - a plain copy of the session for observers
//!
//! Renderers and tests read a [`Snapshot`] instead of borrowing the live
//! [`crate::GameState`]; [`crate::GameState::snapshot_into`] refills one in
//! place without allocating.

use crate::game_state::Piece;
use crate::types::{Actions, Inputs, BOARD_ROWS, FLOOR_ROW, WALL_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub move_count: i32,
    pub drop_count: i32,
    pub snap_count: i32,
}

/// Copy of everything a front end reads after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Board rows, row 0 (the floor) first; the active piece is included
    pub rows: [u16; BOARD_ROWS],
    pub piece: Piece,
    pub inputs: Inputs,
    pub actions: Actions,
    pub timers: TimersSnapshot,
    pub game_over: bool,
    pub ticks: u64,
}

impl Snapshot {
    pub fn new(piece: Piece) -> Self {
        let mut rows = [WALL_ROW; BOARD_ROWS];
        rows[0] = FLOOR_ROW;
        Self {
            rows,
            piece,
            inputs: Inputs::empty(),
            actions: Actions::empty(),
            timers: TimersSnapshot::default(),
            game_over: false,
            ticks: 0,
        }
    }
}
