//! Property tests for board operations and the tick pipeline
//!
//! - place then erase leaves any board unchanged
//! - `can_move` agrees with a cell-by-cell overlap check
//! - anchors anywhere in `i32` are handled, and far-off ones never fit
//! - random play never breaks the walls or the floor, and the active piece
//!   always fits once lifted off the board

use proptest::prelude::*;

use monstro::core::pieces::{cells, get_pattern};
use monstro::core::{Board, GameState};
use monstro::types::{Actions, Inputs, PieceKind, Rotation, BOARD_ROWS, WALL_ROW};

/// Cells strictly inside the walls
const WELL_MASK: u16 = 0x1FF8;

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(any::<u16>(), BOARD_ROWS - 1).prop_map(|noise| {
        let mut board = Board::new();
        for (i, bits) in noise.into_iter().enumerate() {
            // Keep rows sparse so pieces have room
            let sparse = bits & bits.rotate_left(5) & WELL_MASK;
            board.set_row(i as i32 + 1, WALL_ROW | sparse);
        }
        board
    })
}

fn arb_piece() -> impl Strategy<Value = (PieceKind, Rotation)> {
    (0usize..7, 0usize..4).prop_map(|(k, r)| {
        (
            PieceKind::from_index(k).unwrap_or(PieceKind::T),
            Rotation::from_index(r),
        )
    })
}

proptest! {
    #[test]
    fn place_then_erase_is_identity(
        board in arb_board(),
        (kind, rotation) in arb_piece(),
        x in -2i32..15,
        y in -2i32..24,
    ) {
        let pattern = get_pattern(kind, rotation);
        if !board.can_move(pattern, x, y) {
            return Ok(());
        }

        let mut placed = board.clone();
        placed.place(pattern, x, y);
        prop_assert!(!placed.can_move(pattern, x, y));
        placed.erase(pattern, x, y);
        prop_assert_eq!(placed, board);
    }

    #[test]
    fn can_move_matches_cell_overlap(
        board in arb_board(),
        (kind, rotation) in arb_piece(),
        x in -2i32..15,
        y in -2i32..24,
    ) {
        let pattern = get_pattern(kind, rotation);
        let expected = (0..=12).contains(&x)
            && cells(pattern).all(|(bit, row)| {
                let cy = y + row as i32;
                (0..BOARD_ROWS as i32).contains(&cy) && !board.is_filled(bit + x as usize, cy)
            });
        prop_assert_eq!(board.can_move(pattern, x, y), expected);
    }

    #[test]
    fn anchors_far_off_board_never_fit(
        (kind, rotation) in arb_piece(),
        x in any::<i32>(),
        y in prop_oneof![i32::MIN..-3, BOARD_ROWS as i32..=i32::MAX],
    ) {
        let mut board = Board::new();
        prop_assert!(!board.can_move(get_pattern(kind, rotation), x, y));
        prop_assert_eq!(board.full_rows(y), 0);
        prop_assert_eq!(board.clear_completed_rows(y), 0);
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn random_play_keeps_board_invariants(
        seed in any::<u32>(),
        script in prop::collection::vec(0u8..64, 1..600),
    ) {
        let mut state = GameState::new(seed);

        for bits in script {
            state.set_inputs(Inputs::from_bits_truncate(bits));
            let actions = state.tick();
            if actions.contains(Actions::SPAWN) && !state.spawn_piece() {
                break;
            }

            let rows = state.board().rows();
            prop_assert_eq!(rows[0], 0xFFFF);
            for &row in &rows[1..] {
                prop_assert_eq!(row & WALL_ROW, WALL_ROW);
            }

            let piece = state.piece();
            let mut lifted = state.board().clone();
            lifted.erase(piece.pattern(), piece.x, piece.y);
            prop_assert!(lifted.can_move(piece.pattern(), piece.x, piece.y));
        }
    }
}
