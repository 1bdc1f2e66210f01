//! 端末で動作するデモと計測ツール。

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use gomoku_core::ai::types::Ai;
use gomoku_core::{ai, engine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku minimax demo and search timing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    game: GameOpts,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log: String,
}

#[derive(Args, Debug, Clone)]
struct GameOpts {
    /// Board side length.
    #[arg(long, default_value_t = engine::board::DEFAULT_DIM)]
    dim: usize,

    /// Search depth below each candidate move.
    #[arg(long, default_value_t = ai::alphabeta::DEFAULT_DEPTH)]
    depth: u8,

    /// Seed for the random opening moves.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of random moves played before the engine takes over.
    #[arg(long, default_value_t = 10)]
    random_plies: usize,

    /// Number of engine moves to play after the opening.
    #[arg(long, default_value_t = 10)]
    turns: usize,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Time best_move on an empty board at increasing depths.
    Bench {
        /// Board side length.
        #[arg(long, default_value_t = engine::board::DEFAULT_DIM)]
        dim: usize,

        /// Deepest search to time.
        #[arg(long, default_value_t = 2)]
        max_depth: u8,

        /// Runs averaged per depth.
        #[arg(long, default_value_t = 3)]
        samples: u32,
    },
    /// Play random opening moves, then let the engine play both sides.
    Play {
        #[command(flatten)]
        game: GameOpts,
    },
}

/// 手番ごとの指し手の決め方。
#[derive(Debug)]
enum Controller {
    Alphabeta(ai::alphabeta::Agent),
    Random(ai::random::Agent),
}

impl Controller {
    /// 次の手と、探索した場合はその評価値を返す。
    fn choose(
        &mut self,
        board: &engine::Board,
        color: engine::Color,
    ) -> Option<(engine::Square, Option<ai::Score>)> {
        match self {
            Self::Alphabeta(agent) => {
                let started = Instant::now();
                let result = ai::alphabeta::analyze(board, color, agent.depth())?;
                tracing::info!(
                    side = color_name(color),
                    x = result.square().x(),
                    y = result.square().y(),
                    score = result.score(),
                    nodes = result.stats().nodes(),
                    cutoffs = result.stats().cutoffs(),
                    elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                    "engine moved"
                );
                Some((result.square(), Some(result.score())))
            }
            Self::Random(agent) => agent
                .select_move(board, color)
                .map(|square| (square, None)),
        }
    }
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn color_name(color: engine::Color) -> &'static str {
    match color {
        engine::Color::White => "White",
        engine::Color::Black => "Black",
        _ => "Unknown",
    }
}

fn status_text(status: engine::GameStatus) -> String {
    match status {
        engine::GameStatus::InProgress => "in progress".to_owned(),
        engine::GameStatus::Won(color) => format!("{} wins", color_name(color)),
        engine::GameStatus::Draw => "draw".to_owned(),
        _ => "unknown".to_owned(),
    }
}

/// `plies` 手を `controller` に打たせる（終局したら止める）。
fn run_phase(
    game: &mut engine::Game,
    controller: &mut Controller,
    plies: usize,
    verbose: bool,
) -> Result<(), engine::PlayError> {
    for _ply in 0..plies {
        if game.is_game_over() {
            break;
        }
        let side = game.side_to_move();
        let Some((square, score)) = controller.choose(game.board(), side) else {
            break;
        };
        game.play(square)?;

        if verbose {
            println!("{}", game.board());
            if let Some(value) = score {
                println!("score: {value}");
            }
            println!();
        }
    }
    Ok(())
}

/// ランダムな序盤のあと、両手番を探索AIに打たせる。
fn play(opts: &GameOpts) -> Result<engine::GameStatus, engine::PlayError> {
    let mut game = engine::Game::new(opts.dim);

    let mut opening = Controller::Random(ai::random::Agent::new(opts.seed));
    run_phase(&mut game, &mut opening, opts.random_plies, false)?;
    println!("{}\n", game.board());

    let mut engine_side = Controller::Alphabeta(ai::alphabeta::Agent::new(opts.depth));
    run_phase(&mut game, &mut engine_side, opts.turns, true)?;

    Ok(game.status())
}

/// 空の盤面で深さごとに `best_move` の平均時間を計測する。
fn bench(dim: usize, max_depth: u8, samples: u32) {
    let board = engine::Board::new(dim);
    let runs = samples.max(1);
    println!("depth\tmean_ms");

    for depth in 0..=max_depth {
        let mut total = Duration::ZERO;
        for _run in 0..runs {
            let started = Instant::now();
            let chosen = ai::alphabeta::best_move(&board, engine::Color::White, depth);
            total = total.saturating_add(started.elapsed());
            if chosen.is_none() {
                tracing::warn!(depth, "board has no empty squares");
            }
        }
        let mean = total.checked_div(runs).unwrap_or(Duration::ZERO);
        println!("{depth}\t{:.3}", mean.as_secs_f64() * 1000.0);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log, cli.json);

    let game_opts = match cli.command {
        Some(Command::Bench {
            dim,
            max_depth,
            samples,
        }) => {
            bench(dim, max_depth, samples);
            return ExitCode::SUCCESS;
        }
        Some(Command::Play { game }) => game,
        None => cli.game,
    };

    match play(&game_opts) {
        Ok(status) => {
            println!("result: {}", status_text(status));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
