/// 石の色（手番）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。盤面上の値は `+1`。
    White,
    /// 後手。盤面上の値は `-1`。
    Black,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// 盤面上のセル値（白 `+1` / 黒 `-1`）を返す。
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// セル値から色を復元する（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn from_cell(value: i8) -> Option<Self> {
        match value {
            1 => Some(Self::White),
            -1 => Some(Self::Black),
            _ => None,
        }
    }
}

/// 盤面上のマス。
///
/// `x` は行内のインデックス、`y` は行のインデックス。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square {
    /// 行内のインデックス（列）。
    x: usize,
    /// 行のインデックス。
    y: usize,
}

impl Square {
    /// 座標（x, y）から `Square` を生成する（範囲チェックなし）。
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// 行内のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// 行のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// 一辺 `dim` の盤面における行優先インデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self, dim: usize) -> usize {
        self.y.wrapping_mul(dim).wrapping_add(self.x)
    }

    /// 行優先インデックスから `Square` を復元する。
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize, dim: usize) -> Self {
        let x = match index.checked_rem(dim) {
            Some(value) => value,
            None => 0,
        };
        let y = match index.checked_div(dim) {
            Some(value) => value,
            None => 0,
        };
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Square};

    #[test]
    fn color_sign_round_trips_through_cell_value() {
        assert_eq!(Color::from_cell(Color::White.sign()), Some(Color::White));
        assert_eq!(Color::from_cell(Color::Black.sign()), Some(Color::Black));
        assert_eq!(Color::from_cell(0), None);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn square_index_is_row_major() {
        let square = Square::new(3, 2);
        assert_eq!(square.index(8), 19);
        assert_eq!(Square::from_index(19, 8), square);
    }
}
