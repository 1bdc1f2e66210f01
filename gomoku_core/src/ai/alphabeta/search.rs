use crate::ai::types::Score;
use crate::engine::board::Board;
use crate::engine::types::Color;

use super::eval::static_eval;
use super::stats::SearchStats;

/// 探索窓（`alpha` / `beta`）。
///
/// 白番は `alpha` を引き上げ、黒番は `beta` を引き下げ、どちらも `beta <= alpha` で残りの子を打ち切る。
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    /// 白番が更新する境界。
    alpha: Score,
    /// 黒番が更新する境界。
    beta: Score,
}

impl Window {
    /// `alpha` を返す。
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> Score {
        self.alpha
    }

    /// `beta` を返す。
    #[inline]
    #[must_use]
    pub const fn beta(&self) -> Score {
        self.beta
    }

    /// `(-∞, +∞)` の窓。枝刈りなしのミニマックスと同じ値を返す。
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    /// `(+∞, -∞)` の窓。
    ///
    /// 開始時点で `beta <= alpha` が成り立つため、各内部ノードは最初の子だけを調べる。
    #[inline]
    #[must_use]
    pub const fn inverted() -> Self {
        Self {
            alpha: f64::INFINITY,
            beta: f64::NEG_INFINITY,
        }
    }

    /// 任意の境界から窓を作る。
    #[inline]
    #[must_use]
    pub const fn new(alpha: Score, beta: Score) -> Self {
        Self { alpha, beta }
    }
}

impl Default for Window {
    #[inline]
    fn default() -> Self {
        Self::full()
    }
}

/// ミニマックス（αβ付き）。評価値は常に白視点。
///
/// `depth == 0` なら静的評価を返す。子局面が無い場合は白番 `-∞`、黒番 `+∞` を返す。
#[inline]
#[must_use]
pub fn minimax(board: &Board, color: Color, depth: u8, window: Window) -> Score {
    let mut stats = SearchStats::default();
    minimax_counted(board, color, depth, window, &mut stats)
}

/// `Window::full()` で探索した評価値を返す。
#[inline]
#[must_use]
pub fn search(board: &Board, color: Color, depth: u8) -> Score {
    minimax(board, color, depth, Window::full())
}

/// 統計を取りながらミニマックス（αβ付き）を行う。
pub(super) fn minimax_counted(
    board: &Board,
    color: Color,
    depth: u8,
    window: Window,
    stats: &mut SearchStats,
) -> Score {
    stats.inc_nodes();
    if depth == 0 {
        return static_eval(board, color);
    }

    let next_depth = depth.wrapping_sub(1);
    let mut alpha = window.alpha;
    let mut beta = window.beta;

    match color {
        Color::White => {
            let mut max_eval = f64::NEG_INFINITY;
            for (_square, child) in board.children(color) {
                let score = minimax_counted(
                    &child,
                    Color::Black,
                    next_depth,
                    Window::new(alpha, beta),
                    stats,
                );
                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    stats.inc_cutoffs();
                    break;
                }
            }
            max_eval
        }
        Color::Black => {
            let mut min_eval = f64::INFINITY;
            for (_square, child) in board.children(color) {
                let score = minimax_counted(
                    &child,
                    Color::White,
                    next_depth,
                    Window::new(alpha, beta),
                    stats,
                );
                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    stats.inc_cutoffs();
                    break;
                }
            }
            min_eval
        }
    }
}

/// 枝刈りなしのミニマックス（テスト用の基準値）。
#[cfg(test)]
pub(super) fn minimax_unpruned(
    board: &Board,
    color: Color,
    depth: u8,
    stats: &mut SearchStats,
) -> Score {
    stats.inc_nodes();
    if depth == 0 {
        return static_eval(board, color);
    }

    let next_depth = depth.wrapping_sub(1);
    let scores = board
        .children(color)
        .map(|(_square, child)| minimax_unpruned(&child, color.opponent(), next_depth, stats));
    match color {
        Color::White => scores.fold(f64::NEG_INFINITY, f64::max),
        Color::Black => scores.fold(f64::INFINITY, f64::min),
    }
}
