//! Movement module - input handling, gravity and rotation recovery
//!
//! These are the middle stages of [`GameState::tick`]. They run with the
//! piece erased from the board and only ever update the piece and the
//! timers; the final fit check and placement stay in `tick`.
//!
//! Rotation recovery, tried in order when the rotated state does not fit:
//!
//! | Stage      | Candidate position            | Flag        |
//! |------------|-------------------------------|-------------|
//! | rotate     | `(x, y)`                      | ROTATE_*    |
//! | wall kick  | `(x - 1, y)`, then `(x + 1, y)` | WALL_KICK |
//! | floor kick | `(x, y + 1)`, `(x, y + 2)` while locking | FLOOR_KICK |
//!
//! The square has no recovery. A flat I that is already locking first swaps
//! to its other vertical state so it can stand up out of a one-row gap.

use log::debug;

use crate::game_state::GameState;
use crate::pieces::{can_kick, get_pattern};
use crate::types::{Actions, Inputs, PieceKind, Rotation, MOVE_STEP_CAP, MOVE_STEP_SEED};

impl GameState {
    /// Derive this tick's timer steps from the held inputs
    pub(crate) fn handle_inputs(&mut self) {
        self.drop_timer.step = 1;
        self.snap_timer.step = 1;

        if self.inputs.contains(Inputs::DOWN) && self.drop_timer.limit > 0 {
            self.drop_timer.step = self.drop_timer.limit;
            self.snap_timer.step = self.snap_timer.limit;
        }

        if !self.inputs.intersects(Inputs::HORIZONTAL) {
            self.move_timer.step = 0;
            self.move_timer.preload();
        } else if self.move_timer.step == 0 {
            self.move_timer.step = MOVE_STEP_SEED;
        }
    }

    /// Auto-shift: the first step fires at once, later ones ramp up
    pub(crate) fn horizontal_movement(&mut self) {
        if !self.move_timer.advance() {
            return;
        }

        let x = self.piece.x;
        // Shifting left moves towards the left wall.
        self.piece.x += if self.inputs.contains(Inputs::LEFT) { 1 } else { -1 };
        if self.move_timer.step < MOVE_STEP_CAP {
            self.move_timer.step = self.move_timer.step * 5 / 2;
        }
        self.move_timer.reset();

        if !self.piece.fits(&self.board) {
            self.piece.x = x;
        }
    }

    /// Gravity; the fit check happens at the end of the tick
    pub(crate) fn vertical_movement(&mut self) {
        if self.drop_timer.advance() {
            self.piece.y -= 1;
        }
    }

    pub(crate) fn rotation_movement(&mut self) {
        let left = self.inputs.contains(Inputs::ROTATE_LEFT);
        let from = self.piece.rotation;
        let to = if left { from.rotate_ccw() } else { from.rotate_cw() };
        let pattern = get_pattern(self.piece.kind, to);
        let (x, y) = (self.piece.x, self.piece.y);

        if self.board.can_move(pattern, x, y) {
            self.piece.rotation = to;
            self.actions.insert(if left {
                Actions::ROTATE_LEFT
            } else {
                Actions::ROTATE_RIGHT
            });
            if self.snap_timer.count > 0 {
                self.snap_timer.reset();
                self.drop_timer.reset();
            }
            return;
        }

        if !can_kick(self.piece.kind) {
            return;
        }

        if let Some(dx) = self.wall_kick_offset(pattern, x, y) {
            self.piece.rotation = to;
            self.piece.x = x + dx;
            self.actions.insert(Actions::WALL_KICK);
            let was_locking = self.snap_timer.count > 0;
            self.snap_timer.reset();
            debug!("wall kick {:?} {:?} -> {:?} dx {}", self.piece.kind, from, to, dx);

            if self.spin_after_wall_kick
                && was_locking
                && self.board.can_move(pattern, self.piece.x, y - 1)
            {
                self.piece.y = y - 1;
                self.actions.insert(Actions::SPIN);
                debug!("spin into ({}, {})", self.piece.x, self.piece.y);
            }
            return;
        }

        self.floor_kick(to);
    }

    /// Horizontal offset that makes `pattern` fit one column either side
    pub(crate) fn wall_kick_offset(&self, pattern: u64, x: i32, y: i32) -> Option<i32> {
        [-1, 1]
            .into_iter()
            .find(|&dx| self.board.can_move(pattern, x + dx, y))
    }

    /// Lift the rotated piece out of the stack; restores everything on failure
    fn floor_kick(&mut self, to: Rotation) {
        let saved = (self.piece, self.snap_timer);
        let mut to = to;

        if self.piece.kind == PieceKind::I
            && self.snap_timer.count > 0
            && self.piece.rotation == Rotation::North
        {
            // Stand up from the other vertical state, two rows higher.
            to = to.flip();
            self.piece.rotation = Rotation::South;
            self.piece.y += 2;
            self.snap_timer.reset();
        }

        let lift = if self.snap_timer.count > 0 { 2 } else { 1 };
        let pattern = get_pattern(self.piece.kind, to);
        let y = self.piece.y + lift;

        if self.board.can_move(pattern, self.piece.x, y) {
            self.piece.rotation = to;
            self.piece.y = y;
            self.actions.insert(Actions::FLOOR_KICK);
            self.snap_timer.reset();
            self.drop_timer.reset();
            debug!(
                "floor kick {:?} -> {:?} up to y {}",
                self.piece.kind, to, self.piece.y
            );
        } else {
            (self.piece, self.snap_timer) = saved;
        }
    }
}
