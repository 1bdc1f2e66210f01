//! Gomoku core logic.
//!
//! このクレートは盤面とゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! CLI（`gomoku_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・ライン・進行を提供するモジュール。
pub mod engine;

/// AI（評価関数・探索・手選択）を提供するモジュール。
pub mod ai;
