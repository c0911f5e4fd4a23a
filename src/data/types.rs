//! Typed records for the two input tables and their join

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw row of the characters table, as read from CSV.
///
/// The `appearance` field is a combined text column
/// (`"Chapter <N> ; Episode <M>"`) that the normalizer splits apart.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCharacterRow {
    pub character: String,
    pub appearance: String,
}

/// Raw row of the chapters table, as read from CSV.
///
/// Numeric columns are kept as text here so that coercion failures can
/// be reported per field with the offending value, rather than as an
/// opaque CSV deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChapterRow {
    pub chapter: String,
    pub volume: String,
    pub pages: String,
    pub date: String,
}

/// Chapter metadata after strict type coercion.
///
/// `chapter` is the unique key joining the two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub chapter: i64,
    pub volume: i64,
    pub pages: i64,
    pub date: NaiveDate,
}

/// A character appearance with the chapter/episode numbers extracted
/// from the combined text field. Either number may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRecord {
    pub character: String,
    pub chapter: Option<i64>,
    pub episode: Option<i64>,
}

/// An appearance merged with its chapter metadata.
///
/// Only produced for appearances whose chapter number is present and
/// matches a chapter record, so `chapter` is always concrete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub character: String,
    pub chapter: i64,
    pub episode: Option<i64>,
    pub volume: i64,
    pub pages: i64,
    pub date: NaiveDate,
}
