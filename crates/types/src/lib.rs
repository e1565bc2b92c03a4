//! Shared types - board geometry, timer defaults and the tick I/O bitmasks
//!
//! Everything here is plain data with no dependencies, usable by the core
//! engine and by any front end that drives it.
//!
//! # Board Geometry
//!
//! The playfield is 24 rows of 16-bit masks. Row 0 is the floor and rows grow
//! upwards. Bit `i` of a row is logical column `15 - i`, so shifting a piece
//! left by one moves it one column towards the left of the screen.
//!
//! ```text
//! row 23  1110000000000111   0xE007  (top 4 rows are the spawn area)
//!  ...
//! row 1   1110000000000111   0xE007
//! row 0   1111111111111111   0xFFFF  (floor)
//! ```
//!
//! The 3 outermost bits on each side of every row are walls, leaving a
//! 10-column well in bits 3..=12.
//!
//! # Timer Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_LIMIT` | 64 | Horizontal repeat counter limit |
//! | `DROP_LIMIT` | 64 | Gravity counter limit |
//! | `SNAP_LIMIT` | 65 | Lock counter limit |
//! | `TICK_HZ` | 30 | Nominal tick rate the limits are tuned for |
//!
//! # Examples
//!
//! ```
//! use monstro_types::{Actions, Inputs, PieceKind, Rotation};
//!
//! let mut inputs = Inputs::empty();
//! inputs.insert(Inputs::LEFT | Inputs::ROTATE_RIGHT);
//! assert!(inputs.contains(Inputs::LEFT));
//! assert!(inputs.rotating());
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(PieceKind::from_index(3), Some(PieceKind::J));
//!
//! let actions = Actions::SNAP | Actions::CLEARED0 | Actions::CLEARED2;
//! assert_eq!(actions.cleared_count(), 2);
//! ```

/// Number of rows in the board, including the floor and the spawn area
pub const BOARD_ROWS: usize = 24;

/// Width of a board row in bits
pub const BOARD_COLS: usize = 16;

/// Floor sentinel stored in row 0
pub const FLOOR_ROW: u16 = 0xFFFF;

/// Floor value while scanning for completed rows, so row 0 never reads as full
pub const FLOOR_SCAN_ROW: u16 = 0x7FFF;

/// An empty row: 3 wall bits on each side
pub const WALL_ROW: u16 = 0xE007;

/// A completely filled row
pub const FULL_ROW: u16 = 0xFFFF;

/// Wall width in columns on each side of the well
pub const WALL_COLS: usize = 3;

/// Largest column shift a 4-wide piece pattern can take without spilling
/// out of its 16-bit row
pub const MAX_SHIFT: i32 = (BOARD_COLS - 4) as i32;

/// Spawn anchor column
pub const SPAWN_X: i32 = 6;

/// Spawn anchor row; the pattern covers the top 4 rows
pub const SPAWN_Y: i32 = (BOARD_ROWS - 4) as i32;

/// Default horizontal movement counter limit
pub const MOVE_LIMIT: i32 = 64;

/// Default gravity counter limit
pub const DROP_LIMIT: i32 = 64;

/// Default lock/snap counter limit
pub const SNAP_LIMIT: i32 = 65;

/// Horizontal step seeded when a direction is first held
pub const MOVE_STEP_SEED: i32 = 4;

/// Horizontal step stops accelerating once it reaches this value
pub const MOVE_STEP_CAP: i32 = 32;

/// Nominal tick rate the timer limits are tuned for
pub const TICK_HZ: u32 = 30;

/// Tick interval in milliseconds at [`TICK_HZ`]
pub const TICK_MS: u32 = 1000 / TICK_HZ;

/// Lines that must be exceeded before the speed goes up a step
pub const LINES_PER_SPEEDUP: u32 = 10;

/// Per-session timer limits
///
/// The limits stay constant for a level; player input changes the counter
/// increments instead. A speed-up lowers `drop_limit` and `snap_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    pub move_limit: i32,
    pub drop_limit: i32,
    pub snap_limit: i32,
    /// Test for a spin with the snap count taken before the wall kick resets
    /// it. Off by default: the kick clears the count first, so no spin fires.
    pub spin_after_wall_kick: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_limit: MOVE_LIMIT,
            drop_limit: DROP_LIMIT,
            snap_limit: SNAP_LIMIT,
            spin_after_wall_kick: false,
        }
    }
}


/// The seven piece kinds, in catalog order
///
/// The discriminant order matches the rotation table index used by the
/// catalog and the colour index used by the overlay:
/// - **I**: cyan, 4-long bar
/// - **O**: yellow, 2x2 square
/// - **T**: purple
/// - **J**: blue
/// - **L**: orange
/// - **S**: lime
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use monstro_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Rotation states, indexed 0..4
///
/// Right-rotate steps to the next index and left-rotate to the previous one,
/// wrapping modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Next rotation index (right-rotate)
    ///
    /// # Examples
    ///
    /// ```
    /// use monstro_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous rotation index (left-rotate)
    ///
    /// # Examples
    ///
    /// ```
    /// use monstro_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The opposite rotation (two steps away)
    pub fn flip(&self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

bitflags::bitflags! {
    /// Held/pressed controls for the next tick
    ///
    /// DOWN, LEFT and RIGHT are level-triggered: the front end keeps them set
    /// while the control is held. The rotate bits are edge-triggered: the
    /// engine clears them once a tick has consumed them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Inputs: u8 {
        const DOWN         = 0x02;
        const LEFT         = 0x04;
        const RIGHT        = 0x08;
        const ROTATE_LEFT  = 0x10;
        const ROTATE_RIGHT = 0x20;

        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ROTATE     = Self::ROTATE_LEFT.bits() | Self::ROTATE_RIGHT.bits();
    }
}

impl Inputs {
    /// True if either rotate bit is set
    pub const fn rotating(self) -> bool {
        self.intersects(Self::ROTATE)
    }
}

bitflags::bitflags! {
    /// What happened during a tick
    ///
    /// The front end reads this once per tick: SPAWN asks it to call the
    /// spawner, the CLEARED bits feed line counting, anything else is a
    /// redraw hint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Actions: u16 {
        const MOVE         = 0x0001;
        const DROP         = 0x0002;
        const ROTATE_LEFT  = 0x0004;
        const ROTATE_RIGHT = 0x0008;
        const WALL_KICK    = 0x0010;
        const FLOOR_KICK   = 0x0020;
        const SPIN         = 0x0040;
        const SNAP         = 0x0080;
        const CLEARED0     = 0x0100;
        const CLEARED1     = 0x0200;
        const CLEARED2     = 0x0400;
        const CLEARED3     = 0x0800;
        const SPAWN        = 0x1000;

        /// All four row-cleared bits
        const CLEARED = Self::CLEARED0.bits()
            | Self::CLEARED1.bits()
            | Self::CLEARED2.bits()
            | Self::CLEARED3.bits();
    }
}

impl Actions {
    const CLEARED_SHIFT: u16 = 8;

    /// Row-cleared bit for row `offset` (0..4) of the lock window
    pub const fn cleared_row(offset: usize) -> Self {
        Self::from_bits_truncate(Self::CLEARED0.bits() << offset)
    }

    /// Build the CLEARED bits from a 4-bit mask (bit k = window row k)
    pub const fn from_cleared_mask(mask: u8) -> Self {
        Self::from_bits_truncate(((mask & 0xF) as u16) << Self::CLEARED_SHIFT)
    }

    /// The CLEARED bits as a 4-bit mask
    pub const fn cleared_mask(self) -> u8 {
        ((self.bits() & Self::CLEARED.bits()) >> Self::CLEARED_SHIFT) as u8
    }

    pub const fn is_row_cleared(self, offset: usize) -> bool {
        self.intersects(Self::cleared_row(offset))
    }

    /// Number of rows cleared this tick (0..=4)
    pub const fn cleared_count(self) -> u32 {
        self.cleared_mask().count_ones()
    }
}
