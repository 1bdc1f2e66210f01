use crate::engine::board::Board;
use crate::engine::types::Square;

/// ラインの進行方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// 右方向（行）。
    East,
    /// 右上方向（上向きの斜め）。
    NorthEast,
    /// 下方向（列）。
    South,
    /// 右下方向（下向きの斜め）。
    SouthEast,
}

impl Direction {
    /// 始点から `step` 歩進んだマスを返す（盤外に出る場合は `None`）。
    const fn advance(self, origin: Square, step: usize) -> Option<Square> {
        let (x, y) = (origin.x(), origin.y());
        let moved = match self {
            Self::East => (x.checked_add(step), Some(y)),
            Self::NorthEast => (x.checked_add(step), y.checked_sub(step)),
            Self::South => (Some(x), y.checked_add(step)),
            Self::SouthEast => (x.checked_add(step), y.checked_add(step)),
        };
        match moved {
            (Some(nx), Some(ny)) => Some(Square::new(nx, ny)),
            _ => None,
        }
    }
}

/// 盤面上の1本のライン（行・列・斜め）。
///
/// セル自体は保持せず、始点・方向・長さだけを持つ。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineSpec {
    /// 進行方向。
    direction: Direction,
    /// ラインの長さ。
    len: usize,
    /// 始点。
    origin: Square,
}

impl LineSpec {
    /// ラインの長さを返す。
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// 長さ0かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// ライン上のセル値を `buf` に読み込む（`buf` は先にクリアされる）。
    #[inline]
    pub fn read_into(&self, board: &Board, buf: &mut Vec<i8>) {
        buf.clear();
        for step in 0..self.len {
            let value = self
                .direction
                .advance(self.origin, step)
                .and_then(|square| board.cell(square.x(), square.y()));
            match value {
                Some(cell) => buf.push(cell),
                None => break,
            }
        }
    }

    /// ライン上のマスを順に返す。
    #[inline]
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.len).filter_map(|step| self.direction.advance(self.origin, step))
    }
}

/// 一辺 `dim` の盤面の全ラインを列挙する。
///
/// 順序は 行 → 列 → 右下斜め → 右上斜め。斜めは長さ1の角も含む。
#[inline]
pub fn lines(dim: usize) -> impl Iterator<Item = LineSpec> + Clone {
    let rows = (0..dim).map(move |y| LineSpec {
        direction: Direction::East,
        len: dim,
        origin: Square::new(0, y),
    });
    let columns = (0..dim).map(move |x| LineSpec {
        direction: Direction::South,
        len: dim,
        origin: Square::new(x, 0),
    });
    let down_left = (0..dim).map(move |y| LineSpec {
        direction: Direction::SouthEast,
        len: dim.wrapping_sub(y),
        origin: Square::new(0, y),
    });
    let down_top = (1..dim).map(move |x| LineSpec {
        direction: Direction::SouthEast,
        len: dim.wrapping_sub(x),
        origin: Square::new(x, 0),
    });
    let up_left = (0..dim).map(move |y| LineSpec {
        direction: Direction::NorthEast,
        len: y.wrapping_add(1),
        origin: Square::new(0, y),
    });
    let up_bottom = (1..dim).map(move |x| LineSpec {
        direction: Direction::NorthEast,
        len: dim.wrapping_sub(x),
        origin: Square::new(x, dim.wrapping_sub(1)),
    });

    rows.chain(columns)
        .chain(down_left)
        .chain(down_top)
        .chain(up_left)
        .chain(up_bottom)
}
