//! Game state module - the session and its per-tick pipeline
//!
//! A [`GameState`] owns the board, the active piece, the held inputs, the
//! three timers and the spawner. [`GameState::tick`] runs one fixed-order
//! pass: erase the piece, resolve inputs and gravity, attempt rotation
//! recovery, gate the result against the board, place the piece back, then
//! lock and clear rows once the snap timer runs out.
//!
//! The front end owns the loop: it sets [`Inputs`], calls `tick` at the fixed
//! rate, reads the returned [`Actions`] and calls [`GameState::spawn_piece`]
//! whenever SPAWN is set. A failed spawn ends the session.

use log::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{get_pattern, Pattern, SPAWN_POSITION};
use crate::snapshot::{Snapshot, TimersSnapshot};
use crate::spawn::Spawner;
use crate::timer::Timer;
use crate::types::{Actions, Inputs, PieceKind, Rotation, Tuning};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column shift applied to the pattern
    pub x: i32,
    /// Board row of the pattern's bottom window row
    pub y: i32,
}

impl Piece {
    /// A piece at the spawn anchor
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self::at(kind, rotation, x, y)
    }

    pub fn at(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Unshifted pattern for the current rotation
    pub fn pattern(&self) -> Pattern {
        get_pattern(self.kind, self.rotation)
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.can_move(self.pattern(), self.x, self.y)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) piece: Piece,
    pub(crate) inputs: Inputs,
    /// Outcome accumulator for the current tick
    pub(crate) actions: Actions,
    pub(crate) move_timer: Timer,
    pub(crate) drop_timer: Timer,
    pub(crate) snap_timer: Timer,
    pub(crate) spin_after_wall_kick: bool,
    spawner: Spawner,
    /// Set on lock; the locked piece must not be erased by another tick
    awaiting_spawn: bool,
    game_over: bool,
    ticks: u64,
    pieces: u32,
}

impl GameState {
    /// New session with default tuning and one spawned piece
    pub fn new(seed: u32) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// New session with custom timer limits and one spawned piece
    pub fn with_tuning(seed: u32, tuning: Tuning) -> Self {
        let placeholder = Piece::new(PieceKind::O, Rotation::North);
        let mut state = Self::empty(Board::new(), placeholder, tuning, seed);
        let spawned = state.spawn_piece();
        debug_assert!(spawned, "spawn on an empty board cannot top out");
        state
    }

    /// Session over a prepared board with a given active piece
    ///
    /// Returns `None` if the piece does not fit; otherwise the piece is placed.
    pub fn from_parts(board: Board, piece: Piece, tuning: Tuning, seed: u32) -> Option<Self> {
        if !piece.fits(&board) {
            return None;
        }
        let mut state = Self::empty(board, piece, tuning, seed);
        state.board.place(piece.pattern(), piece.x, piece.y);
        state.pieces = 1;
        Some(state)
    }

    fn empty(board: Board, piece: Piece, tuning: Tuning, seed: u32) -> Self {
        let mut move_timer = Timer::new(tuning.move_limit, 0);
        // Same state a tick without horizontal input leaves behind.
        move_timer.preload();

        Self {
            board,
            piece,
            inputs: Inputs::empty(),
            actions: Actions::empty(),
            move_timer,
            drop_timer: Timer::new(tuning.drop_limit, 1),
            snap_timer: Timer::new(tuning.snap_limit, 1),
            spin_after_wall_kick: tuning.spin_after_wall_kick,
            spawner: Spawner::new(seed),
            awaiting_spawn: false,
            game_over: false,
            ticks: 0,
            pieces: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The active piece's pattern shifted into board columns, anchored at
    /// `piece().y`
    pub fn active_pattern(&self) -> u64 {
        self.piece.pattern() << self.piece.x
    }

    pub fn inputs(&self) -> Inputs {
        self.inputs
    }

    /// Replace the held inputs for the next tick
    pub fn set_inputs(&mut self, inputs: Inputs) {
        self.inputs = inputs;
    }

    pub fn press(&mut self, inputs: Inputs) {
        self.inputs.insert(inputs);
    }

    pub fn release(&mut self, inputs: Inputs) {
        self.inputs.remove(inputs);
    }

    /// Outcome of the last tick
    pub fn actions(&self) -> Actions {
        self.actions
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True between a lock and the next successful spawn
    pub fn awaiting_spawn(&self) -> bool {
        self.awaiting_spawn
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pieces spawned so far, including the first
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn move_timer(&self) -> Timer {
        self.move_timer
    }

    pub fn drop_timer(&self) -> Timer {
        self.drop_timer
    }

    pub fn snap_timer(&self) -> Timer {
        self.snap_timer
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            move_limit: self.move_timer.limit,
            drop_limit: self.drop_timer.limit,
            snap_limit: self.snap_timer.limit,
            spin_after_wall_kick: self.spin_after_wall_kick,
        }
    }

    /// Change timer limits; counters keep their current values
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.move_timer.limit = tuning.move_limit;
        self.drop_timer.limit = tuning.drop_limit;
        self.snap_timer.limit = tuning.snap_limit;
        self.spin_after_wall_kick = tuning.spin_after_wall_kick;
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.rows = *self.board.rows();
        out.piece = self.piece;
        out.inputs = self.inputs;
        out.actions = self.actions;
        out.timers = TimersSnapshot {
            move_count: self.move_timer.count,
            drop_count: self.drop_timer.count,
            snap_count: self.snap_timer.count,
        };
        out.game_over = self.game_over;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::new(self.piece);
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece at the spawn anchor
    ///
    /// Returns false if the anchor is blocked; that is the game-over
    /// condition and the session stops ticking.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let (kind, rotation) = self.spawner.next_piece();
        self.piece = Piece::new(kind, rotation);
        self.drop_timer.reset();
        self.snap_timer.reset();

        if !self.piece.fits(&self.board) {
            info!(
                "top out after {} pieces, {} ticks: {:?} blocked at spawn",
                self.pieces, self.ticks, kind
            );
            self.game_over = true;
            return false;
        }

        self.board.place(self.piece.pattern(), self.piece.x, self.piece.y);
        self.awaiting_spawn = false;
        self.pieces = self.pieces.wrapping_add(1);
        trace!("spawned {:?} {:?}", kind, rotation);
        true
    }

    /// Advance the session by one tick and return what happened
    ///
    /// A no-op once the game is over, or after a lock until
    /// [`GameState::spawn_piece`] is called.
    pub fn tick(&mut self) -> Actions {
        if self.game_over || self.awaiting_spawn {
            return Actions::empty();
        }
        self.ticks = self.ticks.wrapping_add(1);

        let (ox, oy) = (self.piece.x, self.piece.y);
        self.actions = Actions::empty();
        self.board.erase(self.piece.pattern(), ox, oy);

        self.handle_inputs();
        self.horizontal_movement();
        self.vertical_movement();
        if self.inputs.rotating() {
            self.rotation_movement();
        }
        self.inputs.remove(Inputs::ROTATE);

        let pattern = self.piece.pattern();
        if !self.board.can_move(pattern, self.piece.x, self.piece.y) {
            // Pressed against something below: this is how the lock accrues.
            self.piece.y = oy;
            self.snap_timer.advance();
        }
        self.board.place(pattern, self.piece.x, self.piece.y);

        if self.piece.y != oy {
            self.drop_timer.reset();
            self.snap_timer.reset();
            self.actions.insert(Actions::DROP);
        }
        if self.piece.x != ox {
            self.move_timer.reset();
            self.actions.insert(Actions::MOVE);
        }

        if self.snap_timer.expired() {
            self.lock_piece();
        }

        self.actions
    }

    /// Freeze the piece, flag and remove the full rows of its window
    fn lock_piece(&mut self) {
        self.actions.insert(Actions::SNAP | Actions::SPAWN);

        let y = self.piece.y;
        let full = self.board.full_rows(y);
        self.actions.insert(Actions::from_cleared_mask(full));
        let removed = self.board.clear_completed_rows(y);
        debug_assert_eq!(removed, full.count_ones() as usize);

        self.awaiting_spawn = true;
        debug!(
            "locked {:?} at ({}, {}), cleared mask {:#06b}",
            self.piece.kind, self.piece.x, y, full
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
