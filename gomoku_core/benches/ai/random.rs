//! `gomoku_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use gomoku_core::ai::types::Ai;
use gomoku_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// ランダムに指定手数だけ進めた盤面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut white_agent = ai::random::Agent::new(u64::MIN);
    let mut black_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));
    let mut game = engine::Game::new(engine::board::DEFAULT_DIM);

    for _turn in u16::MIN..plies {
        let board = game.board().clone();
        let side = game.side_to_move();

        let choice = match side {
            engine::Color::White => white_agent.select_move(&board, side),
            engine::Color::Black => black_agent.select_move(&board, side),
            _ => None,
        };
        let Some(square) = choice else { break };

        match game.play(square) {
            Ok(engine::GameStatus::InProgress) => {}
            Ok(_) | Err(_) => break,
        }
    }

    game.board().clone()
}

/// ベンチ用に代表局面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    [
        engine::Board::default(),
        board_after_plies(8),
        board_after_plies(24),
    ]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, board) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, board, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(input, engine::Color::White)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
