use core::fmt;

use crate::engine::board::{Board, PlaceError};
use crate::engine::lines::lines;
use crate::engine::types::{Color, Square};

/// 勝ちに必要な連続数。
pub const WIN_LENGTH: usize = 5;

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 盤面が埋まり、どちらも5連を作れなかった。
    Draw,
    /// 進行中。
    InProgress,
    /// 指定色が5連を作った。
    Won(Color),
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 着手できないマス。
    Place(PlaceError),
}

impl fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GameOver => write!(f, "the game is already over"),
            Self::Place(err) => write!(f, "illegal move: {err}"),
        }
    }
}

impl core::error::Error for PlayError {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match *self {
            Self::GameOver => None,
            Self::Place(ref err) => Some(err),
        }
    }
}

impl From<PlaceError> for PlayError {
    #[inline]
    fn from(err: PlaceError) -> Self {
        Self::Place(err)
    }
}

/// 1ゲームの進行を管理する構造体。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 手番。
    side_to_move: Color,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面と手番から開始する。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() != Status::InProgress
    }

    /// 一辺 `dim` の空の盤面から、白番で開始する。
    #[inline]
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            board: Board::new(dim),
            side_to_move: Color::White,
        }
    }

    /// 1手を適用し、手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::Place`: 指定マスに着手できない場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        self.board = self.board.place(self.side_to_move, square)?;
        self.side_to_move = self.side_to_move.opponent();

        Ok(self.status())
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(color) = winner(&self.board) {
            return Status::Won(color);
        }
        if self.board.is_full() {
            return Status::Draw;
        }

        Status::InProgress
    }
}

/// 5連を持つ色を返す（最初に見つかったラインを採用する）。
#[must_use]
pub fn winner(board: &Board) -> Option<Color> {
    let mut buf = Vec::with_capacity(board.dim());
    lines(board.dim()).find_map(|spec| {
        spec.read_into(board, &mut buf);
        five_in_line(&buf)
    })
}

/// 1本のラインに `WIN_LENGTH` 連があればその色を返す。
///
/// 先頭から順に窓を調べ、最初に見つかった連の色を返す。
#[must_use]
pub fn five_in_line(line: &[i8]) -> Option<Color> {
    line.windows(WIN_LENGTH).find_map(|window| {
        let sum: i32 = window.iter().map(|&value| i32::from(value)).sum();
        if usize::try_from(sum.unsigned_abs()) != Ok(WIN_LENGTH) {
            return None;
        }
        Some(if sum > 0 { Color::White } else { Color::Black })
    })
}
