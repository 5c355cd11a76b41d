//! Evolving lookup-table tic-tac-toe strategies with a genetic algorithm
//!
//! This crate provides:
//! - A 9-square board model with terminal-result classification
//! - Exhaustive, deduplicated enumeration of reachable positions
//! - Table-backed and uniform-random strategies behind one trait
//! - A game simulator and win-count fitness evaluator
//! - A genetic optimizer with elitist selection and per-gene crossover

pub mod cli;
pub mod error;
pub mod evolution;
pub mod simulator;
pub mod storage;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
pub use evolution::{EvolutionConfig, FitnessEvaluator, GenerationReport, GeneticOptimizer};
pub use simulator::{play_game, play_game_with_history};
pub use strategy::{RandomStrategy, Strategy, TableStrategy};
pub use tictactoe::{GameResult, Player, Position, ReachablePositions, Square};
