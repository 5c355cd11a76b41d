//! Game simulator
//!
//! Alternates moves between two strategies until the position leaves play.
//! The side passed as `first` always opens, regardless of which strategy
//! variant it is, so the same loop plays table-vs-random, random-vs-random,
//! or table-vs-table.

use rand::rngs::StdRng;

use crate::{
    strategy::Strategy,
    tictactoe::{GameResult, Player, Position},
};

fn drive_game(
    first: &dyn Strategy,
    second: &dyn Strategy,
    rng: &mut StdRng,
    mut on_move: impl FnMut(&Position),
) -> crate::Result<GameResult> {
    let mut pos = Position::start();

    // Every iteration fills a square, so the loop runs at most 9 times.
    loop {
        let result = pos.classify();
        if result.is_terminal() {
            return Ok(result);
        }

        let side = match pos.to_move() {
            Player::X => first,
            Player::O => second,
        };

        // Any strategy failure aborts the game immediately: a malformed
        // strategy is a programming defect, never a transient condition.
        let index = side.choose_move(&pos, rng)?;
        pos = pos.with_move(index)?;
        on_move(&pos);
    }
}

/// Play one game between two strategies and return its terminal result.
///
/// # Errors
///
/// Propagates any strategy failure, including a returned occupied square,
/// which `with_move` rejects as [`crate::Error::SquareOccupied`].
pub fn play_game(
    first: &dyn Strategy,
    second: &dyn Strategy,
    rng: &mut StdRng,
) -> crate::Result<GameResult> {
    drive_game(first, second, rng, |_| {})
}

/// Play one game and record the position after every move, for rendering.
pub fn play_game_with_history(
    first: &dyn Strategy,
    second: &dyn Strategy,
    rng: &mut StdRng,
) -> crate::Result<(GameResult, Vec<Position>)> {
    let mut history = Vec::with_capacity(9);
    let result = drive_game(first, second, rng, |pos| history.push(*pos))?;
    Ok((result, history))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{
        strategy::{RandomStrategy, TableStrategy},
        tictactoe::ReachablePositions,
    };

    /// A deliberately broken strategy that always answers square 0.
    struct StuckStrategy;

    impl Strategy for StuckStrategy {
        fn choose_move(&self, _pos: &Position, _rng: &mut StdRng) -> crate::Result<usize> {
            Ok(0)
        }
    }

    #[test]
    fn test_random_vs_random_terminates_with_result() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let result = play_game(&RandomStrategy, &RandomStrategy, &mut rng).unwrap();
            assert!(result.is_terminal());
        }
    }

    #[test]
    fn test_history_is_bounded_by_nine_plies() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (result, history) =
                play_game_with_history(&RandomStrategy, &RandomStrategy, &mut rng).unwrap();
            assert!(result.is_terminal());
            assert!((5..=9).contains(&history.len()));
            assert_eq!(history.last().unwrap().classify(), result);
        }
    }

    #[test]
    fn test_occupied_square_return_aborts_game() {
        // StuckStrategy replays square 0 on its second turn
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_violation = false;
        for _ in 0..20 {
            match play_game(&StuckStrategy, &RandomStrategy, &mut rng) {
                Err(crate::Error::SquareOccupied { index: 0, .. }) => saw_violation = true,
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => {}
            }
        }
        assert!(saw_violation);
    }

    #[test]
    fn test_table_strategy_plays_first() {
        // A center-first table playing as X always opens at square 4
        let positions = ReachablePositions::enumerate().unwrap();
        let table =
            TableStrategy::from_preference(&positions.gene_space(), &[4, 0, 2, 6, 8, 1, 3, 5, 7])
                .unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let (_, history) = play_game_with_history(&table, &RandomStrategy, &mut rng).unwrap();
        assert_eq!(history[0], Position::start().with_move(4).unwrap());
    }
}
