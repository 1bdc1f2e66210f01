use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 評価値。大きいほど白有利、小さいほど黒有利。
///
/// 5連（勝ち）は `f64::INFINITY` / `f64::NEG_INFINITY` で表す。
pub type Score = f64;

/// 手を選択するAI。
pub trait Ai {
    /// 盤面と手番から次の手を選択する（打てるマスが無ければ `None`）。
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Square>;
}
