//! Color module - per-cell piece identities for renderers
//!
//! The bit board only knows filled or empty. A [`ColorBoard`] mirrors it cell
//! by cell with the kind that filled each cell, stamping a piece when it
//! locks and compacting the same rows the board cleared. Feed it every
//! tick's outcome before calling [`GameState::spawn_piece`].
//!
//! | Value | Meaning                        |
//! |-------|--------------------------------|
//! | 0     | empty                          |
//! | 1..=7 | locked piece, `kind.index() + 1` |
//! | 8     | wall or floor                  |

use arrayvec::ArrayVec;

use crate::board::WINDOW_ROWS;
use crate::game_state::GameState;
use crate::pieces::cells;
use crate::types::{Actions, PieceKind, BOARD_COLS, BOARD_ROWS, WALL_COLS};

pub const COLOR_EMPTY: u8 = 0;
pub const COLOR_WALL: u8 = 8;

/// Color code of a kind
#[inline]
pub fn color_of(kind: PieceKind) -> u8 {
    kind.index() as u8 + 1
}

/// Cell colors indexed `[row][bit]`, row 0 being the floor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorBoard {
    cells: [[u8; BOARD_COLS]; BOARD_ROWS],
}

impl ColorBoard {
    pub fn new() -> Self {
        let mut cells = [Self::empty_row(); BOARD_ROWS];
        cells[0] = [COLOR_WALL; BOARD_COLS];
        Self { cells }
    }

    fn empty_row() -> [u8; BOARD_COLS] {
        let mut row = [COLOR_EMPTY; BOARD_COLS];
        row[..WALL_COLS].fill(COLOR_WALL);
        row[BOARD_COLS - WALL_COLS..].fill(COLOR_WALL);
        row
    }

    /// Color at bit `bit` of row `y`, or `None` off the board
    pub fn get(&self, bit: usize, y: i32) -> Option<u8> {
        let row = usize::try_from(y).ok().filter(|&r| r < BOARD_ROWS)?;
        self.cells[row].get(bit).copied()
    }

    /// Locked piece kind at a cell
    pub fn kind_at(&self, bit: usize, y: i32) -> Option<PieceKind> {
        match self.get(bit, y)? {
            COLOR_EMPTY | COLOR_WALL => None,
            c => PieceKind::from_index(usize::from(c) - 1),
        }
    }

    /// Color at a cell including the active piece
    pub fn color_at(&self, state: &GameState, bit: usize, y: i32) -> Option<u8> {
        let piece = state.piece();
        if !state.awaiting_spawn() && !state.game_over() {
            let dy = y - piece.y;
            if (0..WINDOW_ROWS as i32).contains(&dy) && bit < BOARD_COLS {
                let word = state.active_pattern();
                if word & (1u64 << (dy as usize * BOARD_COLS + bit)) != 0 {
                    return Some(color_of(piece.kind));
                }
            }
        }
        self.get(bit, y)
    }

    /// Apply the outcome of the last tick
    pub fn update(&mut self, state: &GameState, actions: Actions) {
        if !actions.contains(Actions::SNAP) {
            return;
        }

        let piece = state.piece();
        let color = color_of(piece.kind);
        for (bit, row) in cells(piece.pattern()) {
            let x = bit as i32 + piece.x;
            let y = row as i32 + piece.y;
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                if x < BOARD_COLS && y < BOARD_ROWS {
                    self.cells[y][x] = color;
                }
            }
        }

        let cleared: ArrayVec<usize, WINDOW_ROWS> = (0..WINDOW_ROWS)
            .filter(|&k| actions.is_row_cleared(k))
            .filter_map(|k| usize::try_from(piece.y + k as i32).ok())
            .filter(|&y| y > 0 && y < BOARD_ROWS)
            .collect();
        self.remove_rows(&cleared);
    }

    /// Drop the given rows (ascending) and refill the top with empty rows
    fn remove_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }
        let mut write = rows[0];
        for read in rows[0]..BOARD_ROWS {
            if rows.contains(&read) {
                continue;
            }
            self.cells[write] = self.cells[read];
            write += 1;
        }
        for row in &mut self.cells[write..] {
            *row = Self::empty_row();
        }
    }
}

impl Default for ColorBoard {
    fn default() -> Self {
        Self::new()
    }
}
