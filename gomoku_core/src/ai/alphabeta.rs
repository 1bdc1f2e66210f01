use crate::ai::types::{Ai, Score};
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 盤面全体の静的評価。
pub mod eval;
/// 1本のラインの脅威分類。
pub mod line;
/// ミニマックス（αβ付き）探索。
pub mod search;
/// 探索統計。
pub mod stats;


use search::{Window, minimax_counted};
use stats::SearchStats;

/// 脅威の重み `[四, 止め四, 三, 飛び三, 二]`。
pub const WEIGHTS: [f64; 5] = [100.0, 7.0, 3.0, 2.0, 1.0];

/// 手番側が両端の開いた四を持つときの、1つあたりの評価値。
pub const FORCED_WIN_SCORE: f64 = 1_000_000.0;

/// 既定の探索深さ。
pub const DEFAULT_DEPTH: u8 = 2;

/// ミニマックス（αβ付き）で手を選ぶAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索深さ（候補手を打った後の残り深さ）。
    depth: u8,
}

impl Agent {
    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// `depth` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for Agent {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        best_move(board, color, self.depth).map(|(square, _board)| square)
    }
}

/// 最善手の探索結果。
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// 選んだ手を打った後の盤面。
    board: Board,
    /// 選んだ手の評価値（白視点）。
    score: Score,
    /// 選んだ手。
    square: Square,
    /// 全候補の探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// 選んだ手を打った後の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 選んだ手と盤面に分解する。
    #[inline]
    #[must_use]
    pub fn into_move(self) -> (Square, Board) {
        (self.square, self.board)
    }

    /// 選んだ手の評価値を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// 選んだ手を返す。
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// 1手先の全候補を探索し、最善手と評価値を返す（空きマスが無ければ `None`）。
///
/// 各候補は相手番・深さ `depth` で探索する。白は最大、黒は最小を選び、同点なら行優先で先の手を採る。
/// 探索窓は [`Window::full`] で、結果は枝刈りなしのミニマックスと一致する。
#[inline]
#[must_use]
pub fn analyze(board: &Board, color: Color, depth: u8) -> Option<SearchResult> {
    analyze_with(board, color, depth, Window::full())
}

/// [`analyze`] と同じだが、各候補の探索に `window` を使う。
///
/// [`Window::inverted`] を渡すと各節点は最初の子だけを調べる。
#[must_use]
pub fn analyze_with(
    board: &Board,
    color: Color,
    depth: u8,
    window: Window,
) -> Option<SearchResult> {
    let mut stats = SearchStats::default();
    let mut best: Option<(Square, Board, Score)> = None;

    for (square, child) in board.children(color) {
        let score = minimax_counted(
            &child,
            color.opponent(),
            depth,
            window,
            &mut stats,
        );
        tracing::trace!(x = square.x(), y = square.y(), score, "candidate scored");

        let improves = match best.as_ref() {
            None => true,
            Some(&(_, _, best_score)) => match color {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            },
        };
        if improves {
            best = Some((square, child, score));
        }
    }

    let (square, chosen, score) = best?;
    tracing::debug!(
        ?color,
        depth,
        x = square.x(),
        y = square.y(),
        score,
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        "best move selected"
    );

    Some(SearchResult {
        board: chosen,
        score,
        square,
        stats,
    })
}

/// 最善手とその手を打った後の盤面を返す（空きマスが無ければ `None`）。
///
/// 探索窓は常に [`Window::full`]。別の窓で選ぶ場合は [`analyze_with`] を使う。
#[inline]
#[must_use]
pub fn best_move(board: &Board, color: Color, depth: u8) -> Option<(Square, Board)> {
    analyze(board, color, depth).map(SearchResult::into_move)
}
