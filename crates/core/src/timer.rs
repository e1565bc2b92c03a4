//! Timer module - counter/limit/step triples
//!
//! Each of the three piece timers accumulates `step` into `count` once per
//! tick and fires when `count` goes strictly past `limit`. Levels change the
//! limit; held inputs change the step.

/// One counter with its limit and per-tick increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timer {
    /// Value `count` must exceed to fire
    pub limit: i32,
    pub count: i32,
    /// Added to `count` on each accumulating tick
    pub step: i32,
}

impl Timer {
    pub fn new(limit: i32, step: i32) -> Self {
        Self {
            limit,
            count: 0,
            step,
        }
    }

    /// Add one step and report whether the limit was exceeded
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.count += self.step;
        self.expired()
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.count > self.limit
    }

    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Preload the counter so the next accumulating tick fires
    pub fn preload(&mut self) {
        self.count = self.limit;
    }
}
