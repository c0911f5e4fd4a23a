//! Input tables: loading, normalization, and the chapter join

mod join;
mod loader;
mod normalize;
mod types;

use std::path::PathBuf;
use thiserror::Error;

pub use join::join_appearances;
pub use loader::{load_chapter_rows, load_character_rows};
pub use normalize::Normalizer;
pub use types::{
    AppearanceRecord, ChapterRecord, JoinedRecord, RawChapterRow, RawCharacterRow,
};

/// Errors from loading and normalizing the input tables.
///
/// All of these are terminal for a run: malformed input aborts rather
/// than substituting defaults, which would corrupt the statistics.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{table} row {row}: invalid {field} value '{value}'")]
    Parse {
        table: &'static str,
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;
