//! `gomoku_core::ai::alphabeta` の性能計測（深さごとの `best_move`）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use gomoku_core::ai::alphabeta;
use gomoku_core::engine;

/// 計測する最大の探索深さ。
const MAX_DEPTH: u8 = 2;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default().sample_size(10);
    base.configure_from_args()
}

/// 空の盤面で `best_move` を深さ 0..=`MAX_DEPTH` で計測する。
fn bench_best_move_by_depth(criterion: &mut Criterion) {
    let board = engine::Board::default();
    let mut group = criterion.benchmark_group("ai/alphabeta/best_move_empty");

    for depth in u8::MIN..=MAX_DEPTH {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bench, &input| {
            bench.iter(|| black_box(alphabeta::best_move(&board, engine::Color::White, input)));
        });
    }

    group.finish();
}

/// 静的評価を計測する。
fn bench_static_eval(criterion: &mut Criterion) {
    let board = engine::Board::from_rows(&[
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, -1, 0, 0, 0, 0, 0],
        [0, 0, -1, 1, 0, 0, 0, 0],
        [0, 0, -1, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, -1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ])
    .unwrap_or_default();

    criterion.bench_function("ai/alphabeta/static_eval", |bench| {
        bench.iter(|| black_box(alphabeta::eval::static_eval(&board, engine::Color::Black)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_best_move_by_depth(&mut criterion);
    bench_static_eval(&mut criterion);
    criterion.final_summary();
}
