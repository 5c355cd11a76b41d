//! Uniform-random strategy

use rand::{prelude::IndexedRandom, rngs::StdRng};

use super::Strategy;
use crate::tictactoe::Position;

/// Chooses uniformly among the currently blank squares; stateless
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&self, pos: &Position, rng: &mut StdRng) -> crate::Result<usize> {
        let blanks = pos.blanks();
        blanks
            .choose(rng)
            .copied()
            .ok_or_else(|| crate::Error::BoardFull {
                position: pos.encode(),
            })
    }
}
