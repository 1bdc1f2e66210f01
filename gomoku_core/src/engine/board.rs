use core::fmt;

use crate::engine::types::{Color, Square};

/// 既定の盤面の一辺の長さ。
pub const DEFAULT_DIM: usize = 8;

/// 空きマスを表すセル値。
pub(crate) const EMPTY: i8 = 0;

/// 盤面（N×N）。
///
/// 値型として扱い、着手は常に新しい `Board` を返す。生成後に書き換えることはない。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 行優先で並べたセル値（白 `1` / 黒 `-1` / 空き `0`）。
    cells: Vec<i8>,
    /// 一辺の長さ。
    dim: usize,
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlaceError {
    /// 指定マスにすでに石がある。
    Occupied(Square),
    /// 指定マスが盤外。
    OutOfBounds(Square),
}

impl fmt::Display for PlaceError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Occupied(square) => write!(
                f,
                "square ({}, {}) is already occupied",
                square.x(),
                square.y()
            ),
            Self::OutOfBounds(square) => write!(
                f,
                "square ({}, {}) is outside the board",
                square.x(),
                square.y()
            ),
        }
    }
}

impl core::error::Error for PlaceError {}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_DIM)
    }
}

impl Board {
    /// 指定マスのセル値を返す（盤外なら `None`）。
    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> Option<i8> {
        if x >= self.dim || y >= self.dim {
            return None;
        }
        self.cells.get(Square::new(x, y).index(self.dim)).copied()
    }

    /// 指定色で打てる局面（子局面）を行優先で列挙するイテレータを返す。
    ///
    /// 呼び出すたびに先頭から列挙し直す。
    #[inline]
    #[must_use]
    pub const fn children(&self, color: Color) -> Children<'_> {
        Children {
            board: self,
            color,
            next: 0,
        }
    }

    /// 一辺の長さを返す。
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == EMPTY).count()
    }

    /// 空きマスを行優先順に列挙する（盤面は複製しない）。
    #[inline]
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == EMPTY)
            .map(move |(index, _)| Square::from_index(index, dim))
    }

    /// 行のリストから盤面を生成する。
    ///
    /// 正方形でない場合や `-1..=1` 以外の値を含む場合は `None`。
    #[inline]
    #[must_use]
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Option<Self> {
        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim.saturating_mul(dim));
        for row in rows {
            let row_cells = row.as_ref();
            if row_cells.len() != dim {
                return None;
            }
            if row_cells.iter().any(|value| !(-1..=1).contains(value)) {
                return None;
            }
            cells.extend_from_slice(row_cells);
        }
        Some(Self { cells, dim })
    }

    /// すべての石の色を反転させた盤面を返す。
    #[inline]
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|value| value.wrapping_neg()).collect(),
            dim: self.dim,
        }
    }

    /// 空きマスが無いかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// 一辺 `dim` の空の盤面を返す。
    #[inline]
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            cells: vec![EMPTY; dim.saturating_mul(dim)],
            dim,
        }
    }

    /// 指定マスの石を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Color> {
        self.cell(square.x(), square.y()).and_then(Color::from_cell)
    }

    /// 石を置いた新しい盤面を返す。
    ///
    /// # Errors
    ///
    /// - `PlaceError::Occupied`: 指定マスにすでに石がある場合
    /// - `PlaceError::OutOfBounds`: 指定マスが盤外の場合
    ///
    #[inline]
    pub fn place(&self, color: Color, square: Square) -> Result<Self, PlaceError> {
        let current = match self.cell(square.x(), square.y()) {
            Some(value) => value,
            None => return Err(PlaceError::OutOfBounds(square)),
        };
        if current != EMPTY {
            return Err(PlaceError::Occupied(square));
        }

        let mut cells = self.cells.clone();
        if let Some(slot) = cells.get_mut(square.index(self.dim)) {
            *slot = color.sign();
        }

        Ok(Self {
            cells,
            dim: self.dim,
        })
    }

    /// 石が1つ以上置かれているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn has_stones(&self) -> bool {
        self.cells.iter().any(|&value| value != EMPTY)
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.chunks(self.dim.max(1)).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = match Color::from_cell(value) {
                    Some(Color::White) => 'W',
                    Some(Color::Black) => 'B',
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

/// 子局面を行優先で列挙するイテレータ。
#[derive(Clone, Debug)]
pub struct Children<'board> {
    /// 親局面。
    board: &'board Board,
    /// 着手する色。
    color: Color,
    /// 次に調べる行優先インデックス。
    next: usize,
}

impl Iterator for Children<'_> {
    type Item = (Square, Board);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let dim = self.board.dim;
        while let Some(&value) = self.board.cells.get(self.next) {
            let square = Square::from_index(self.next, dim);
            self.next = self.next.wrapping_add(1);
            if value != EMPTY {
                continue;
            }
            if let Ok(child) = self.board.place(self.color, square) {
                return Some((square, child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.board.cells.len().saturating_sub(self.next);
        (0, Some(remaining))
    }
}
