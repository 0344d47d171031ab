use criterion::{black_box, criterion_group, criterion_main, Criterion};
use srs_tetris::core::{BagGenerator, Board, GameSnapshot, GameState, Piece};
use srs_tetris::types::{GameAction, PieceType, TICK_SECS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_60hz", |b| {
        b.iter(|| {
            if !state.tick(black_box(TICK_SECS)) && state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceType::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_bag_draw(c: &mut Criterion) {
    let mut bag = BagGenerator::new(12345);

    c.bench_function("bag_next", |b| b.iter(|| black_box(bag.next())));
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            if state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::new(PieceType::T, 0, 10);

    c.bench_function("try_rotate", |b| {
        b.iter(|| srs_tetris::core::try_rotate(black_box(&piece), true, |p| board.fits(p)))
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_bag_draw,
    bench_hard_drop,
    bench_try_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
