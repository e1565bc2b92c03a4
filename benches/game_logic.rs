use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monstro::core::pieces::get_pattern;
use monstro::core::{Board, GameState, Piece};
use monstro::types::{Actions, Inputs, PieceKind, Rotation, Tuning, FULL_ROW};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.set_inputs(Inputs::LEFT | Inputs::DOWN);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            let actions = state.tick();
            if actions.contains(Actions::SPAWN) && !state.spawn_piece() {
                state = GameState::new(12345);
                state.set_inputs(Inputs::LEFT | Inputs::DOWN);
            }
            black_box(actions)
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let board = Board::new();
    let pattern = get_pattern(PieceKind::T, Rotation::East);

    c.bench_function("can_move", |b| {
        b.iter(|| board.can_move(black_box(pattern), black_box(6), black_box(10)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 1..=4 {
                board.set_row(y, FULL_ROW);
            }
            let full = board.full_rows(black_box(1));
            black_box((full, board.clear_completed_rows(1)))
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            let resting = Piece::at(PieceKind::O, Rotation::North, 6, 0);
            let mut state = GameState::from_parts(Board::new(), resting, Tuning::default(), 12345)
                .expect("square fits on the floor");
            black_box(state.spawn_piece())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_can_move,
    bench_line_clear,
    bench_piece_spawn
);
criterion_main!(benches);
