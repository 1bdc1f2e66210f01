/// 盤面（値型）と子局面の列挙。
pub mod board;
/// ゲーム進行（手番、勝敗判定など）の実装。
pub mod game;
/// 行・列・斜めのライン列挙。
pub mod lines;
pub mod types;

pub type Board = board::Board;
pub type Color = types::Color;
pub type Square = types::Square;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type PlaceError = board::PlaceError;
pub type PlayError = game::PlayError;
