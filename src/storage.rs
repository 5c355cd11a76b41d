//! On-disk persistence for position sets and table strategies
//!
//! Positions are stored as JSON arrays of 9-character strings; strategies as
//! a versioned mapping-as-list. Load failures are recoverable: callers are
//! expected to fall back to regenerating the data from scratch.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{strategy::TableStrategy, tictactoe::Position};

/// Current strategy file format version
pub const STRATEGY_FORMAT_VERSION: u32 = 1;

/// Serializable envelope for a table strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedStrategy {
    /// Version of the save format (for future compatibility)
    pub version: u32,
    /// The full position-to-move mapping as a list
    pub entries: Vec<SavedEntry>,
}

/// One strategy table entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntry {
    /// 9-character position encoding
    pub position: String,
    /// Chosen blank index at that position
    pub move_index: usize,
}

fn create_file(path: &Path) -> crate::Result<File> {
    File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })
}

fn open_file(path: &Path) -> crate::Result<File> {
    File::open(path).map_err(|source| crate::Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })
}

/// Write a position list as a JSON array of encoded strings.
///
/// # Errors
///
/// Fails on file creation or serialization errors.
pub fn save_positions(path: &Path, positions: &[Position]) -> crate::Result<()> {
    let mut writer = BufWriter::new(create_file(path)?);
    serde_json::to_writer(&mut writer, positions)?;
    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })?;
    Ok(())
}

/// Load a position list, validating every entry.
///
/// # Errors
///
/// Fails when the file cannot be read or any entry has the wrong shape or
/// invalid symbols. Callers should treat this as a cue to regenerate the
/// set via enumeration.
pub fn load_positions(path: &Path) -> crate::Result<Vec<Position>> {
    let reader = BufReader::new(open_file(path)?);
    let positions: Vec<Position> = serde_json::from_reader(reader)?;
    Ok(positions)
}

/// Write a table strategy as a versioned mapping-as-list.
///
/// Entries are sorted by position encoding so repeated saves of the same
/// strategy produce identical files.
///
/// # Errors
///
/// Fails on file creation or serialization errors.
pub fn save_strategy(path: &Path, strategy: &TableStrategy) -> crate::Result<()> {
    let mut entries: Vec<SavedEntry> = strategy
        .entries()
        .map(|(pos, move_index)| SavedEntry {
            position: pos.encode(),
            move_index,
        })
        .collect();
    entries.sort_by(|a, b| a.position.cmp(&b.position));

    let saved = SavedStrategy {
        version: STRATEGY_FORMAT_VERSION,
        entries,
    };
    let mut writer = BufWriter::new(create_file(path)?);
    serde_json::to_writer_pretty(&mut writer, &saved)?;
    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })?;
    Ok(())
}

/// Load a table strategy, validating structural well-formedness.
///
/// Every entry's position encoding is parsed, the stored move must target a
/// blank square, and duplicate positions are rejected.
///
/// # Errors
///
/// Fails on IO/JSON errors, an unsupported version, or any invalid entry.
pub fn load_strategy(path: &Path) -> crate::Result<TableStrategy> {
    let reader = BufReader::new(open_file(path)?);
    let saved: SavedStrategy = serde_json::from_reader(reader)?;

    if saved.version != STRATEGY_FORMAT_VERSION {
        return Err(crate::Error::UnsupportedVersion {
            version: saved.version,
            expected: STRATEGY_FORMAT_VERSION,
        });
    }

    let mut entries = Vec::with_capacity(saved.entries.len());
    for entry in &saved.entries {
        let pos = Position::from_string(&entry.position)?;
        entries.push((pos, entry.move_index));
    }
    TableStrategy::from_entries(entries)
}
