//! Fitness evaluation of table strategies

use rand::rngs::StdRng;

use crate::{
    simulator::play_game,
    strategy::{RandomStrategy, TableStrategy},
    tictactoe::GameResult,
};

/// Scores a strategy by its win count against the random strategy.
///
/// The strategy under test always moves first. Fitness is re-derived from
/// scratch on every call; nothing is cached across generations.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    num_games: usize,
}

impl FitnessEvaluator {
    pub fn new(num_games: usize) -> Self {
        FitnessEvaluator { num_games }
    }

    pub fn num_games(&self) -> usize {
        self.num_games
    }

    /// Play `num_games` independent games and count first-player wins.
    ///
    /// # Errors
    ///
    /// Propagates simulator failures; a single malformed game aborts the
    /// whole evaluation rather than approximating fitness from a partial
    /// count.
    pub fn evaluate(&self, strategy: &TableStrategy, rng: &mut StdRng) -> crate::Result<usize> {
        let mut wins = 0;
        for _ in 0..self.num_games {
            if play_game(strategy, &RandomStrategy, rng)? == GameResult::XWon {
                wins += 1;
            }
        }
        Ok(wins)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::tictactoe::ReachablePositions;

    #[test]
    fn test_score_is_bounded_by_num_games() {
        let positions = ReachablePositions::enumerate().unwrap();
        let gene_space = positions.gene_space();
        let mut rng = StdRng::seed_from_u64(21);
        let table = TableStrategy::random(&gene_space, &mut rng).unwrap();

        let evaluator = FitnessEvaluator::new(30);
        let score = evaluator.evaluate(&table, &mut rng).unwrap();
        assert!(score <= 30);
    }

    #[test]
    fn test_same_seed_reproduces_score() {
        let positions = ReachablePositions::enumerate().unwrap();
        let gene_space = positions.gene_space();
        let mut build_rng = StdRng::seed_from_u64(8);
        let table = TableStrategy::random(&gene_space, &mut build_rng).unwrap();

        let evaluator = FitnessEvaluator::new(50);
        let a = evaluator
            .evaluate(&table, &mut StdRng::seed_from_u64(123))
            .unwrap();
        let b = evaluator
            .evaluate(&table, &mut StdRng::seed_from_u64(123))
            .unwrap();
        assert_eq!(a, b);
    }
}
