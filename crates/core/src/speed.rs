//! Speed module - level progression from cleared lines
//!
//! Every time more than [`LINES_PER_SPEEDUP`] lines have been cleared since
//! the last speed-up, gravity doubles and the lock delay shrinks by an
//! eighth. The engine itself never changes its own limits; front ends feed
//! each tick's [`Actions`] through a [`LineTally`].

use crate::game_state::GameState;
use crate::types::{Actions, Tuning, LINES_PER_SPEEDUP};

/// Faster limits for the next level
///
/// A drop limit of 0 makes the piece fall every tick and disables soft drop.
pub fn speed_up(tuning: Tuning) -> Tuning {
    Tuning {
        drop_limit: tuning.drop_limit / 2,
        snap_limit: tuning.snap_limit - tuning.snap_limit / 8,
        ..tuning
    }
}

/// Cleared-line bookkeeping for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    /// Lines since the last speed-up
    pending: u32,
    total: u32,
    level: u32,
}

impl LineTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the rows cleared by one tick; true when a speed-up is due
    pub fn record(&mut self, actions: Actions) -> bool {
        let cleared = actions.cleared_count();
        self.pending += cleared;
        self.total += cleared;
        if self.pending > LINES_PER_SPEEDUP {
            self.pending -= LINES_PER_SPEEDUP;
            self.level += 1;
            return true;
        }
        false
    }

    /// Record and, when due, speed up the session's timers
    pub fn apply(&mut self, state: &mut GameState, actions: Actions) -> bool {
        if !self.record(actions) {
            return false;
        }
        let tuning = speed_up(state.tuning());
        log::info!(
            "level {}: drop limit {}, snap limit {}",
            self.level,
            tuning.drop_limit,
            tuning.snap_limit
        );
        state.set_tuning(tuning);
        true
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}
