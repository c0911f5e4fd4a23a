//! CSV loading for the two input tables

use super::types::{RawChapterRow, RawCharacterRow};
use super::{DataError, DataResult};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Load the characters table (`character`, `appearance` columns).
pub fn load_character_rows(path: &Path) -> DataResult<Vec<RawCharacterRow>> {
    read_rows(path)
}

/// Load the chapters table (`chapter`, `volume`, `pages`, `date` columns).
///
/// Numeric columns stay textual here; strict coercion happens in the
/// normalizer so failures name the field and value.
pub fn load_chapter_rows(path: &Path) -> DataResult<Vec<RawChapterRow>> {
    read_rows(path)
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> DataResult<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row = result.map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}
