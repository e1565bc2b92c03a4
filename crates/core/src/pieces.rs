//! Pieces module - the rotation table
//!
//! Each rotation state is a `u64` of 4 stacked 16-bit rows (bits 0-15 are the
//! bottom row of the window). Patterns sit in the low 4 bits of each row and
//! are moved across the board by shifting left, which is towards the left of
//! the screen.
//!
//! ```text
//! T North  0x0000_0002_0007_0000   row 2: ..1.
//!                                  row 1: .111
//! ```

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// One rotation state as 4 stacked 16-bit rows
pub type Pattern = u64;

/// The four rotation states of one kind
pub type RotationSet = [Pattern; 4];

const I_ROTATIONS: RotationSet = [0xF00000000, 0x2000200020002, 0xF0000, 0x4000400040004];
const O_ROTATIONS: RotationSet = [0x600060000, 0x600060000, 0x600060000, 0x600060000];
const T_ROTATIONS: RotationSet = [0x200070000, 0x200030002, 0x70002, 0x200060002];
const J_ROTATIONS: RotationSet = [0x400070000, 0x300020002, 0x70001, 0x200020006];
const L_ROTATIONS: RotationSet = [0x100070000, 0x200020003, 0x70004, 0x600020002];
const S_ROTATIONS: RotationSet = [0x300060000, 0x200030001, 0x30006, 0x400060002];
const Z_ROTATIONS: RotationSet = [0x600030000, 0x100030002, 0x60003, 0x200060004];

/// The catalog, indexed by [`PieceKind::index`]
pub const CATALOG: [RotationSet; 7] = [
    I_ROTATIONS,
    O_ROTATIONS,
    T_ROTATIONS,
    J_ROTATIONS,
    L_ROTATIONS,
    S_ROTATIONS,
    Z_ROTATIONS,
];

/// Cells per piece
pub const PIECE_CELLS: u32 = 4;

/// Spawn anchor (x, y) for every piece
pub const SPAWN_POSITION: (i32, i32) = (SPAWN_X, SPAWN_Y);

/// Pattern for a kind in a rotation state
#[inline]
pub fn get_pattern(kind: PieceKind, rotation: Rotation) -> Pattern {
    CATALOG[kind.index()][rotation.index()]
}

/// All four rotation states of a kind
pub fn rotations(kind: PieceKind) -> &'static RotationSet {
    &CATALOG[kind.index()]
}

/// Whether rotation recovery (kicks) applies to this kind
///
/// The square looks the same in every state, so a failed rotation is simply
/// dropped.
pub fn can_kick(kind: PieceKind) -> bool {
    kind != PieceKind::O
}

/// Iterate the (bit, row) cells of a pattern, row 0 being the window bottom
pub fn cells(pattern: Pattern) -> impl Iterator<Item = (usize, usize)> {
    (0..64usize)
        .filter(move |&i| pattern & (1u64 << i) != 0)
        .map(|i| (i % 16, i / 16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_four_cells() {
        for kind in PieceKind::ALL {
            for pattern in rotations(kind) {
                assert_eq!(pattern.count_ones(), PIECE_CELLS, "{kind:?} {pattern:#x}");
            }
        }
    }

    #[test]
    fn patterns_stay_in_low_nibble_of_each_row() {
        for set in CATALOG {
            for pattern in set {
                assert!(cells(pattern).all(|(bit, _)| bit < 4), "{pattern:#x}");
            }
        }
    }

    #[test]
    fn cells_of_flat_t() {
        let cells: Vec<_> = cells(get_pattern(PieceKind::T, Rotation::North)).collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn square_cannot_kick() {
        assert!(!can_kick(PieceKind::O));
        assert!(can_kick(PieceKind::I));
        assert!(can_kick(PieceKind::T));
    }
}
