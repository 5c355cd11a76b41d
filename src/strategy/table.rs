//! Table-backed deterministic strategy

use std::collections::HashMap;

use rand::{prelude::IndexedRandom, rngs::StdRng};

use super::Strategy;
use crate::tictactoe::Position;

/// A lookup-table strategy mapping each position to a chosen blank index.
///
/// Each table exclusively owns its mapping; breeding always allocates a new
/// table rather than mutating a parent. Iteration order over the table is
/// unspecified and nothing relies on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStrategy {
    moves: HashMap<Position, usize>,
}

impl TableStrategy {
    /// Build a fresh random strategy over the given gene space: for every
    /// position, one independently and uniformly chosen legal move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BoardFull`] if a position without blanks is
    /// present; the gene space contains only in-play positions, so this
    /// indicates the caller passed the wrong set.
    pub fn random(gene_space: &[Position], rng: &mut StdRng) -> crate::Result<Self> {
        let mut moves = HashMap::with_capacity(gene_space.len());
        for pos in gene_space {
            let index = pos
                .blanks()
                .choose(rng)
                .copied()
                .ok_or_else(|| crate::Error::BoardFull {
                    position: pos.encode(),
                })?;
            moves.insert(*pos, index);
        }
        Ok(TableStrategy { moves })
    }

    /// Build a strategy that plays the first blank square in a fixed
    /// preference order at every position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BoardFull`] when some position has no blank
    /// square among the given order.
    pub fn from_preference(gene_space: &[Position], order: &[usize]) -> crate::Result<Self> {
        let mut moves = HashMap::with_capacity(gene_space.len());
        for pos in gene_space {
            let index = order
                .iter()
                .copied()
                .find(|&idx| idx < 9 && pos.is_blank(idx))
                .ok_or_else(|| crate::Error::BoardFull {
                    position: pos.encode(),
                })?;
            moves.insert(*pos, index);
        }
        Ok(TableStrategy { moves })
    }

    /// Build a strategy from externally supplied entries, validating each.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error when an index is out of bounds, when a
    /// stored move targets an occupied square, or when a position appears
    /// more than once.
    pub fn from_entries<I>(entries: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (Position, usize)>,
    {
        let mut moves = HashMap::new();
        for (pos, index) in entries {
            if index >= 9 {
                return Err(crate::Error::InvalidMoveIndex {
                    index,
                    position: pos.encode(),
                });
            }
            if !pos.is_blank(index) {
                return Err(crate::Error::TableMoveOccupied {
                    index,
                    position: pos.encode(),
                });
            }
            if moves.insert(pos, index).is_some() {
                return Err(crate::Error::DuplicateStrategyEntry {
                    position: pos.encode(),
                });
            }
        }
        Ok(TableStrategy { moves })
    }

    /// Look up the stored move for a position, if any
    pub fn get(&self, pos: &Position) -> Option<usize> {
        self.moves.get(pos).copied()
    }

    /// Number of positions the strategy defines a move for
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over all (position, move) entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = (&Position, usize)> {
        self.moves.iter().map(|(pos, &index)| (pos, index))
    }
}

impl Strategy for TableStrategy {
    fn choose_move(&self, pos: &Position, _rng: &mut StdRng) -> crate::Result<usize> {
        let index = self
            .get(pos)
            .ok_or_else(|| crate::Error::UndefinedPosition {
                position: pos.encode(),
            })?;
        if !pos.is_blank(index) {
            // The table itself is inconsistent; this is a build defect, not
            // a recoverable condition.
            return Err(crate::Error::TableMoveOccupied {
                index,
                position: pos.encode(),
            });
        }
        Ok(index)
    }
}
