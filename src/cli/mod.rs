//! CLI infrastructure for the evoxo binary
//!
//! Commands for running the genetic algorithm, playing demonstration games,
//! and generating the reachable-position set.

pub mod commands;
pub mod output;

use rand::{SeedableRng, rngs::StdRng};

/// Build the run's random source: seeded for reproducibility when requested,
/// otherwise from OS entropy.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
