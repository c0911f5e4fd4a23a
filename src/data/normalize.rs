//! Schema normalization: field extraction and strict type coercion

use super::types::{AppearanceRecord, ChapterRecord, RawChapterRow, RawCharacterRow};
use super::{DataError, DataResult};
use chrono::NaiveDate;
use regex::Regex;

/// Release dates come in the long human-readable form, e.g. "July 19, 1997".
const DATE_FORMAT: &str = "%B %d, %Y";

/// Splits the combined appearance field and coerces the chapters table.
///
/// Coercion is strict: a non-numeric chapter/volume/pages value or a
/// malformed date aborts the run with the row, field, and offending
/// value, instead of defaulting.
pub struct Normalizer {
    chapter_pattern: Regex,
    episode_pattern: Regex,
}

impl Normalizer {
    pub fn new() -> DataResult<Self> {
        Ok(Self {
            chapter_pattern: Regex::new(r"Chapter (\d+)")?,
            episode_pattern: Regex::new(r"Episode (\d+)")?,
        })
    }

    /// Split each appearance field into chapter and episode numbers.
    ///
    /// Either number may be absent; an absent number is `None`, not an
    /// error. Unjoinable rows (no chapter) are dropped later by the join.
    pub fn normalize_characters(
        &self,
        rows: Vec<RawCharacterRow>,
    ) -> Vec<AppearanceRecord> {
        rows.into_iter()
            .map(|row| AppearanceRecord {
                chapter: self.extract_number(&self.chapter_pattern, &row.appearance),
                episode: self.extract_number(&self.episode_pattern, &row.appearance),
                character: row.character,
            })
            .collect()
    }

    /// Coerce the chapters table into typed records.
    pub fn normalize_chapters(
        &self,
        rows: Vec<RawChapterRow>,
    ) -> DataResult<Vec<ChapterRecord>> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                Ok(ChapterRecord {
                    chapter: parse_int(index, "chapter", &row.chapter)?,
                    volume: parse_int(index, "volume", &row.volume)?,
                    pages: parse_int(index, "pages", &row.pages)?,
                    date: parse_date(index, &row.date)?,
                })
            })
            .collect()
    }

    fn extract_number(&self, pattern: &Regex, text: &str) -> Option<i64> {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }
}

fn parse_int(row: usize, field: &'static str, value: &str) -> DataResult<i64> {
    value.parse().map_err(|_| DataError::Parse {
        table: "chapters",
        row,
        field,
        value: value.to_string(),
    })
}

fn parse_date(row: usize, value: &str) -> DataResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DataError::Parse {
        table: "chapters",
        row,
        field: "date",
        value: value.to_string(),
    })
}
