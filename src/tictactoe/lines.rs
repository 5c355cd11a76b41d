//! Winning line analysis for the 3x3 board

use super::board::{Player, Square};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player holds three in a row
pub fn has_won(squares: &[Square; 9], player: Player) -> bool {
    let target = player.to_square();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| squares[idx] == target))
}

/// Find the player holding a completed line, if any.
///
/// A position reached through legal play can contain at most one completed
/// line owner, so the first match is the winner.
pub fn winner(squares: &[Square; 9]) -> Option<Player> {
    if has_won(squares, Player::X) {
        Some(Player::X)
    } else if has_won(squares, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}
