//! Genetic-algorithm machinery: fitness evaluation and the optimizer loop

pub mod fitness;
pub mod optimizer;

pub use fitness::FitnessEvaluator;
pub use optimizer::{EvolutionConfig, GenerationReport, GeneticOptimizer, breed};
