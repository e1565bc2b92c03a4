//! Board module - the bit-grid playfield
//!
//! The board is 24 rows of `u16`, row 0 at the bottom. A piece pattern is a
//! `u64` holding 4 stacked rows (bits 0-15 are the lowest row), so any 4
//! consecutive board rows can be read as one 64-bit word and a piece can be
//! placed, erased or collision-tested with a single OR/XOR against it.
//!
//! Rows outside `0..24` read as solid, and column shifts outside
//! `0..=MAX_SHIFT` never fit, so every operation is total over `i32`
//! anchors. The board knows nothing about piece identities.

use crate::types::{BOARD_ROWS, FLOOR_ROW, FLOOR_SCAN_ROW, FULL_ROW, MAX_SHIFT, WALL_ROW};

/// Rows covered by a piece window
pub const WINDOW_ROWS: usize = 4;

/// The playfield: walls, floor, locked cells and the active piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [u16; BOARD_ROWS],
}

impl Board {
    /// Create a board with walls on both sides and a full floor
    pub fn new() -> Self {
        let mut rows = [WALL_ROW; BOARD_ROWS];
        rows[0] = FLOOR_ROW;
        Self { rows }
    }

    pub fn rows(&self) -> &[u16; BOARD_ROWS] {
        &self.rows
    }

    /// Row `y`, or `None` if out of range
    pub fn row(&self, y: i32) -> Option<u16> {
        Self::row_index(y).map(|idx| self.rows[idx])
    }

    /// Overwrite row `y`; returns false if out of range
    pub fn set_row(&mut self, y: i32, value: u16) -> bool {
        match Self::row_index(y) {
            Some(idx) => {
                self.rows[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at bit `bit` of row `y` is filled
    pub fn is_filled(&self, bit: usize, y: i32) -> bool {
        bit < 16 && self.row(y).is_some_and(|row| row & (1 << bit) != 0)
    }

    #[inline(always)]
    fn row_index(y: i32) -> Option<usize> {
        usize::try_from(y).ok().filter(|&idx| idx < BOARD_ROWS)
    }

    /// Board row of window row `k`; `None` past `i32::MAX`
    #[inline(always)]
    fn window_row(y: i32, k: usize) -> Option<i32> {
        y.checked_add(k as i32)
    }

    #[inline(always)]
    fn shift_in_range(x: i32) -> bool {
        (0..=MAX_SHIFT).contains(&x)
    }

    /// Read rows `[y, y+3]` as one word; rows off the board read as solid
    #[inline]
    fn window(&self, y: i32) -> u64 {
        (0..WINDOW_ROWS).fold(0u64, |word, k| {
            let row = Self::window_row(y, k)
                .and_then(|row_y| self.row(row_y))
                .unwrap_or(FULL_ROW);
            word | (u64::from(row) << (16 * k))
        })
    }

    /// Write rows `[y, y+3]` back from a word, skipping rows off the board
    #[inline]
    fn write_window(&mut self, y: i32, word: u64) {
        for k in 0..WINDOW_ROWS {
            if let Some(idx) = Self::window_row(y, k).and_then(Self::row_index) {
                self.rows[idx] = (word >> (16 * k)) as u16;
            }
        }
    }

    /// Merge `pattern << x` into rows `[y, y+3]`
    ///
    /// The caller must have checked [`Board::can_move`]; overlapping bits are
    /// silently merged in release builds.
    pub fn place(&mut self, pattern: u64, x: i32, y: i32) {
        debug_assert!(
            self.can_move(pattern, x, y),
            "place over occupied cells at ({x}, {y})"
        );
        let Some(shifted) = Self::shifted(pattern, x) else {
            return;
        };
        let word = self.window(y) | shifted;
        self.write_window(y, word);
    }

    /// Remove `pattern << x` from rows `[y, y+3]`
    ///
    /// Must mirror an earlier [`Board::place`] with the same arguments.
    pub fn erase(&mut self, pattern: u64, x: i32, y: i32) {
        debug_assert!(
            Self::shifted(pattern, x).is_some_and(|s| self.window(y) & s == s),
            "erase of a piece that is not on the board at ({x}, {y})"
        );
        let Some(shifted) = Self::shifted(pattern, x) else {
            return;
        };
        let word = self.window(y) ^ shifted;
        self.write_window(y, word);
    }

    /// True iff no set bit of `pattern << x` overlaps rows `[y, y+3]`
    pub fn can_move(&self, pattern: u64, x: i32, y: i32) -> bool {
        let Some(shifted) = Self::shifted(pattern, x) else {
            return false;
        };
        let word = self.window(y);
        (word | shifted) ^ shifted == word
    }

    #[inline(always)]
    fn shifted(pattern: u64, x: i32) -> Option<u64> {
        Self::shift_in_range(x).then(|| pattern << x)
    }

    /// Which of rows `[y, y+3]` are completely full, as a 4-bit mask
    ///
    /// Row 0 is scanned as [`FLOOR_SCAN_ROW`] so the floor never counts, and
    /// rows off the board never count.
    pub fn full_rows(&mut self, y: i32) -> u8 {
        self.rows[0] = FLOOR_SCAN_ROW;
        let mut mask = 0u8;
        for k in 0..WINDOW_ROWS {
            let row = Self::window_row(y, k).and_then(|row_y| self.row(row_y));
            if row == Some(FULL_ROW) {
                mask |= 1 << k;
            }
        }
        self.rows[0] = FLOOR_ROW;
        mask
    }

    /// Remove the full rows among `[y, y+3]` and drop everything above
    ///
    /// Surviving window rows are packed down starting at `y`, rows above the
    /// window shift down by the number removed, and the vacated top rows are
    /// refilled with empty wall rows. Returns the number of rows removed.
    pub fn clear_completed_rows(&mut self, y: i32) -> usize {
        self.rows[0] = FLOOR_SCAN_ROW;

        let start = y.clamp(0, BOARD_ROWS as i32) as usize;
        let window_end = y
            .saturating_add(WINDOW_ROWS as i32)
            .clamp(0, BOARD_ROWS as i32) as usize;
        let mut write = start;
        for read in start..BOARD_ROWS {
            let in_window = read < window_end;
            if in_window && self.rows[read] == FULL_ROW {
                continue;
            }
            self.rows[write] = self.rows[read];
            write += 1;
        }
        let removed = BOARD_ROWS - write;
        for row in &mut self.rows[write..] {
            *row = WALL_ROW;
        }

        self.rows[0] = FLOOR_ROW;
        removed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
