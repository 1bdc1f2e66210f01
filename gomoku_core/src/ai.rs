/// ミニマックス（αβ付き）探索AI。
pub mod alphabeta;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type Score = types::Score;
