//! Minimax search benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tictac_engine::core::{Board, Difficulty, GameRng, Mark};
use tictac_engine::search::{select_move, MinimaxSearch};

fn bench_search(c: &mut Criterion) {
    let empty = Board::new();
    let corner: Board = "X../.../...".parse().expect("valid board");

    let mut group = c.benchmark_group("minimax");

    group.bench_function("alpha_beta_empty", |b| {
        let mut search = MinimaxSearch::new();
        b.iter(|| search.search(black_box(&empty), Mark::O))
    });

    group.bench_function("exhaustive_empty", |b| {
        let mut search = MinimaxSearch::exhaustive();
        b.iter(|| search.search(black_box(&empty), Mark::O))
    });

    group.bench_function("alpha_beta_corner_reply", |b| {
        let mut search = MinimaxSearch::new();
        b.iter(|| search.search(black_box(&corner), Mark::O))
    });

    group.finish();
}

fn bench_select_move(c: &mut Criterion) {
    let corner: Board = "X../.../...".parse().expect("valid board");

    for difficulty in Difficulty::ALL {
        c.bench_function(&format!("select_move_{difficulty}"), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| select_move(black_box(&corner), difficulty, &mut rng))
        });
    }
}

criterion_group!(benches, bench_search, bench_select_move);
criterion_main!(benches);
