//! Tic-tac-toe board model and position enumeration

pub mod board;
pub mod lines;
pub mod positions;

pub use board::{GameResult, Player, Position, Square};
pub use lines::WINNING_LINES;
pub use positions::ReachablePositions;
