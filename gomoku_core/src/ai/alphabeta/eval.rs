use crate::ai::types::Score;
use crate::engine::board::{Board, EMPTY};
use crate::engine::lines::lines;
use crate::engine::types::Color;

use super::FORCED_WIN_SCORE;
use super::line::{ThreatTally, evaluate_line};

/// 盤面全体の脅威の集計（白、黒）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BoardThreats {
    /// 黒の集計。
    pub black: ThreatTally,
    /// 白の集計。
    pub white: ThreatTally,
}

/// 全ライン走査の結果。
enum Scan {
    /// 五が無く、脅威を集計できた。
    Threats(BoardThreats),
    /// 最初に見つかった五の色。
    Won(Color),
}

/// 全ラインを走査して脅威を集計する。
///
/// 五を含むラインが見つかった時点で打ち切る（以降のラインは見ない）。
fn collect_threats(board: &Board) -> Scan {
    let mut totals = BoardThreats::default();
    let mut buf = Vec::with_capacity(board.dim());

    for spec in lines(board.dim()) {
        spec.read_into(board, &mut buf);
        if buf.iter().all(|&value| value == EMPTY) {
            continue;
        }

        let threats = evaluate_line(&buf);
        if threats.white().win() > 0 {
            return Scan::Won(Color::White);
        }
        if threats.black().win() > 0 {
            return Scan::Won(Color::Black);
        }
        totals.white.merge(threats.white());
        totals.black.merge(threats.black());
    }

    Scan::Threats(totals)
}

/// 盤面の静的評価（白有利ほど大きい）。
///
/// - 五があれば白 `+∞` / 黒 `-∞`（最初に見つかったラインで確定）
/// - 手番側がすでに両端の開いた四を持っていれば `±1_000_000 × 個数`
/// - それ以外は重み付き脅威の差
#[must_use]
pub fn static_eval(board: &Board, color: Color) -> Score {
    let totals = match collect_threats(board) {
        Scan::Threats(value) => value,
        Scan::Won(Color::White) => return f64::INFINITY,
        Scan::Won(Color::Black) => return f64::NEG_INFINITY,
    };

    match color {
        Color::White if totals.white.open_four() > 0 => {
            FORCED_WIN_SCORE * f64::from(totals.white.open_four())
        }
        Color::Black if totals.black.open_four() > 0 => {
            -FORCED_WIN_SCORE * f64::from(totals.black.open_four())
        }
        Color::White | Color::Black => totals.white.weighted() - totals.black.weighted(),
    }
}

/// 盤面の脅威の集計を返す（五がある場合は `None`）。
#[must_use]
pub fn threats(board: &Board) -> Option<BoardThreats> {
    match collect_threats(board) {
        Scan::Threats(value) => Some(value),
        Scan::Won(_) => None,
    }
}
