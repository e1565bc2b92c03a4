//! Pieces tests - rotation table shape and spawn anchor

use monstro::core::pieces::{cells, get_pattern, rotations, CATALOG, SPAWN_POSITION};
use monstro::core::Board;
use monstro::types::{PieceKind, Rotation};

#[test]
fn test_catalog_order_matches_kind_index() {
    assert_eq!(CATALOG[PieceKind::I.index()][0], 0xF00000000);
    assert_eq!(CATALOG[PieceKind::O.index()][0], 0x600060000);
    assert_eq!(CATALOG[PieceKind::Z.index()][3], 0x200060004);
}

#[test]
fn test_square_identical_in_all_rotations() {
    let set = rotations(PieceKind::O);
    assert!(set.iter().all(|&p| p == set[0]));
}

#[test]
fn test_i_vertical_states_differ_by_one_column() {
    let east = get_pattern(PieceKind::I, Rotation::East);
    let west = get_pattern(PieceKind::I, Rotation::West);
    assert_eq!(east << 1, west);
}

#[test]
fn test_every_state_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    let (x, y) = SPAWN_POSITION;
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            assert!(
                board.can_move(get_pattern(kind, rotation), x, y),
                "{kind:?} {rotation:?}"
            );
        }
    }
}

#[test]
fn test_every_state_fits_in_a_four_row_window() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let p = get_pattern(kind, rotation);
            assert!(cells(p).all(|(bit, row)| bit < 4 && row < 4));
        }
    }
}

#[test]
fn test_rotation_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(get_pattern(kind, r), get_pattern(kind, Rotation::North));
        assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
        assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    }
}
