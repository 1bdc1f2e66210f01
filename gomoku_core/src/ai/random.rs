use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - rand クレート不使用
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        // seed が 0 でも動くように軽く攪拌
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // PCG 系で採用される LCG 定数
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 空きマスから一様ランダムに1手を選択するAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Lcg64,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, _color: Color) -> Option<Square> {
        let count = board.empty_count();
        if count == 0 {
            return None;
        }

        let skip = scale(self.rng.next_u32(), count);
        board.empty_squares().nth(skip)
    }
}

/// `random` を `0..count` の範囲に写像する（上位ビットを使う乗算法）。
fn scale(random: u32, count: usize) -> usize {
    let count_u64 = u64::try_from(count).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(count_u64);
    let high = product.wrapping_shr(32);
    usize::try_from(high).unwrap_or(count.wrapping_sub(1))
}

#[cfg(test)]
mod tests {
    use super::{Agent, Lcg64, scale};
    use crate::ai::types::Ai as _;
    use crate::engine::board::Board;
    use crate::engine::types::{Color, Square};

    #[test]
    fn scale_stays_in_range() {
        assert_eq!(scale(0, 10), 0);
        assert_eq!(scale(u32::MAX, 10), 9);
        assert_eq!(scale(u32::MAX / 2, 2), 0);
    }

    #[test]
    fn same_seed_replays_the_same_moves() {
        let board = Board::new(8);
        let mut first = Agent::new(7);
        let mut second = Agent::new(7);
        for _ in 0..16 {
            assert_eq!(
                first.select_move(&board, Color::White),
                second.select_move(&board, Color::White)
            );
        }
    }

    #[test]
    fn only_empty_squares_are_chosen() {
        let mut board = Board::new(3);
        let mut agent = Agent::new(42);
        let mut color = Color::White;
        for _ in 0..9 {
            let choice = agent.select_move(&board, color);
            assert!(choice.is_some());
            let square = choice.unwrap_or(Square::new(0, 0));
            assert_eq!(board.piece_at(square), None);
            board = board.place(color, square).unwrap_or_else(|_| board.clone());
            color = color.opponent();
        }
        assert!(board.is_full());
        assert_eq!(agent.select_move(&board, color), None);
    }

    #[test]
    fn chosen_square_is_the_scaled_index_among_empty_squares() {
        let board = Board::from_rows(&[[1, 0, -1], [0, 0, 1], [-1, 0, 0]]).unwrap_or_default();
        let mut agent = Agent::new(9);
        let mut rng = Lcg64::new(9);
        for _ in 0..8 {
            let skip = scale(rng.next_u32(), board.empty_count());
            let expected = board.empty_squares().nth(skip);
            assert_eq!(agent.select_move(&board, Color::Black), expected);
        }
    }
}
