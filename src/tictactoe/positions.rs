//! Exhaustive enumeration of reachable board positions
//!
//! Expands the game breadth-first from the start position, deduplicating by
//! position value so that transpositions reached through different move
//! orders collapse to a single entry. Runs once; the result is immutable.

use std::collections::HashSet;

use super::board::{GameResult, Player, Position};

/// The complete set of distinct positions reachable from the start position.
///
/// Terminal positions are included; callers filter down to the subset they
/// need. The genetic optimizer only consults [`gene_space`], the in-play
/// positions where X is to move.
///
/// [`gene_space`]: ReachablePositions::gene_space
#[derive(Debug, Clone)]
pub struct ReachablePositions {
    all: Vec<Position>,
    ply_counts: [usize; 10],
}

impl ReachablePositions {
    /// Enumerate every reachable position by breadth-first expansion.
    ///
    /// Only in-play frontier positions are expanded, one child per blank
    /// square, placing the mark of the player whose turn it is. Expansion
    /// stops after ply 8, when the board is full.
    ///
    /// # Errors
    ///
    /// Returns an error only if move application fails on a blank square,
    /// which would indicate a board-model defect.
    pub fn enumerate() -> crate::Result<Self> {
        let start = Position::start();
        let mut seen = HashSet::from([start]);
        let mut all = vec![start];
        let mut ply_counts = [0usize; 10];
        ply_counts[0] = 1;

        let mut frontier = vec![start];
        for ply in 0..9 {
            let mut next_frontier = Vec::new();
            for pos in &frontier {
                if pos.classify() != GameResult::InPlay {
                    continue;
                }
                for index in pos.blanks() {
                    let child = pos.with_move(index)?;
                    if seen.insert(child) {
                        all.push(child);
                        ply_counts[ply + 1] += 1;
                        next_frontier.push(child);
                    }
                }
            }
            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
        }

        Ok(ReachablePositions { all, ply_counts })
    }

    /// All distinct reachable positions, terminal ones included
    pub fn all(&self) -> &[Position] {
        &self.all
    }

    /// Total number of distinct reachable positions
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Number of distinct positions first reached at the given ply (0-9)
    pub fn count_at_ply(&self, ply: usize) -> usize {
        self.ply_counts[ply]
    }

    /// The distinct positions that are still in play
    pub fn in_play(&self) -> Vec<Position> {
        self.all
            .iter()
            .filter(|pos| pos.classify() == GameResult::InPlay)
            .copied()
            .collect()
    }

    /// The gene space: in-play positions where X is to move.
    ///
    /// These are the only positions a table strategy playing first is ever
    /// asked about, so they are the positions a strategy defines a move for.
    pub fn gene_space(&self) -> Vec<Position> {
        self.all
            .iter()
            .filter(|pos| pos.classify() == GameResult::InPlay && pos.to_move() == Player::X)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_two_plies() {
        let positions = ReachablePositions::enumerate().unwrap();
        assert_eq!(positions.count_at_ply(0), 1);
        assert_eq!(positions.count_at_ply(1), 9);
        // 9 * 8 ordered move pairs collapse to 72 distinct positions
        assert_eq!(positions.count_at_ply(2), 72);
    }

    #[test]
    fn test_start_position_is_first() {
        let positions = ReachablePositions::enumerate().unwrap();
        assert_eq!(positions.all()[0], Position::start());
    }

    #[test]
    fn test_gene_space_is_x_to_move_and_in_play() {
        let positions = ReachablePositions::enumerate().unwrap();
        for pos in positions.gene_space() {
            assert_eq!(pos.classify(), GameResult::InPlay);
            assert_eq!(pos.to_move(), Player::X);
        }
    }

    #[test]
    fn test_ply_counts_sum_to_total() {
        let positions = ReachablePositions::enumerate().unwrap();
        let sum: usize = (0..10).map(|ply| positions.count_at_ply(ply)).sum();
        assert_eq!(sum, positions.len());
    }
}
