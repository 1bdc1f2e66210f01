//! 結合テスト: CPU同士の対戦が終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use gomoku_core::ai::types::Ai;
    use gomoku_core::{ai, engine};

    /// `alphabeta` が空きマスのみ選ぶことを確認する。
    #[test]
    fn alphabeta_selects_empty_square() {
        let board = engine::Board::default();
        let mut agent = ai::alphabeta::Agent::new(1);
        let square = agent.select_move(&board, engine::Color::White);
        assert!(square.is_some(), "empty board must have moves");

        let Some(square) = square else { return };
        assert_eq!(board.piece_at(square), None);
    }

    /// 指定したAI同士で1局打ち、最終状態を返す。
    fn play_game(
        dim: usize,
        white: &mut dyn Ai,
        black: &mut dyn Ai,
    ) -> engine::GameStatus {
        let mut game = engine::Game::new(dim);
        let max_turns = dim.saturating_mul(dim);

        for _turn in 0..max_turns {
            let board = game.board().clone();
            let side = game.side_to_move();
            let choice = match side {
                engine::Color::White => white.select_move(&board, side),
                engine::Color::Black => black.select_move(&board, side),
                _ => None,
            };
            assert!(choice.is_some(), "a move must exist while in progress");
            let Some(square) = choice else { break };

            let play_result = game.play(square);
            assert!(play_result.is_ok(), "play must succeed, got={play_result:?}");

            match play_result {
                Ok(engine::GameStatus::InProgress) => {}
                Ok(status) => return status,
                Err(_err) => break,
            }
        }

        game.status()
    }

    /// `random vs alphabeta` が終局まで進む。
    #[test]
    fn random_vs_alphabeta_finishes() {
        let mut white = ai::random::Agent::new(42);
        let mut black = ai::alphabeta::Agent::new(1);
        let status = play_game(6, &mut white, &mut black);
        assert_ne!(status, engine::GameStatus::InProgress);
    }

    /// `random vs random` が終局まで進む。
    #[test]
    fn random_vs_random_finishes() {
        for seed in [0_u64, 1, 4242] {
            let mut white = ai::random::Agent::new(seed);
            let mut black = ai::random::Agent::new(seed.wrapping_add(1));
            let status = play_game(8, &mut white, &mut black);
            assert_ne!(status, engine::GameStatus::InProgress);
        }
    }

    /// `alphabeta` は相手の開いた四を前にしても、自分の五を完成させる。
    #[test]
    fn alphabeta_takes_an_immediate_win() {
        let mut board = engine::Board::new(8);
        for x in 1..5 {
            board = board
                .place(engine::Color::White, engine::Square::new(x, 2))
                .unwrap_or_else(|_| board.clone());
            board = board
                .place(engine::Color::Black, engine::Square::new(x, 5))
                .unwrap_or_else(|_| board.clone());
        }

        let mut game = engine::Game::from_board(board, engine::Color::White);
        let mut agent = ai::alphabeta::Agent::new(0);
        let square = agent.select_move(game.board(), engine::Color::White);
        assert!(square.is_some());
        let Some(square) = square else { return };

        assert_eq!(
            game.play(square),
            Ok(engine::GameStatus::Won(engine::Color::White))
        );
    }
}
