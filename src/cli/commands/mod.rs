//! CLI command implementations

pub mod evolve;
pub mod play;
pub mod positions;
