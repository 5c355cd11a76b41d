//! Strategies: policies mapping board positions to moves
//!
//! A strategy is a closed capability with two variants: a deterministic
//! table-backed strategy (the unit of evolution) and a uniform-random
//! strategy (the benchmark opponent).

pub mod random;
pub mod table;

use rand::rngs::StdRng;

pub use random::RandomStrategy;
pub use table::TableStrategy;

use crate::tictactoe::Position;

/// A policy producing a move for a position.
///
/// The random source is passed explicitly so that callers control seeding
/// and reproducibility. Implementations must return the index of a blank
/// square; the simulator treats any occupied-square return as a fatal
/// contract violation.
pub trait Strategy {
    /// Choose a blank square index (0-8) to play at the given position.
    ///
    /// # Errors
    ///
    /// Fails when the strategy defines no legal move for the position; see
    /// the concrete implementations for their failure modes.
    fn choose_move(&self, pos: &Position, rng: &mut StdRng) -> crate::Result<usize>;
}
