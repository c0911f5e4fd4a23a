//! Descriptive statistics over the chapter and joined tables

use crate::data::{ChapterRecord, JoinedRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One point of the empirical cumulative distribution of page counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcdfPoint {
    pub pages: i64,
    /// Fraction of chapters with at most this many pages.
    pub fraction: f64,
}

/// Mean page count per volume.
pub fn average_pages_per_volume(chapters: &[ChapterRecord]) -> BTreeMap<i64, f64> {
    let mut totals: BTreeMap<i64, (i64, usize)> = BTreeMap::new();
    for chapter in chapters {
        let entry = totals.entry(chapter.volume).or_insert((0, 0));
        entry.0 += chapter.pages;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(volume, (pages, count))| (volume, pages as f64 / count as f64))
        .collect()
}

/// Number of distinct characters appearing in each chapter.
pub fn characters_per_chapter(rows: &[JoinedRecord]) -> BTreeMap<i64, usize> {
    let mut casts: BTreeMap<i64, BTreeSet<&str>> = BTreeMap::new();
    for row in rows {
        casts.entry(row.chapter).or_default().insert(row.character.as_str());
    }
    casts
        .into_iter()
        .map(|(chapter, cast)| (chapter, cast.len()))
        .collect()
}

/// Frequency distribution of page counts: pages value → chapter count.
pub fn page_frequency(chapters: &[ChapterRecord]) -> BTreeMap<i64, usize> {
    let mut frequency = BTreeMap::new();
    for chapter in chapters {
        *frequency.entry(chapter.pages).or_insert(0) += 1;
    }
    frequency
}

/// Empirical CDF of page counts, one point per distinct value.
///
/// Empty input yields an empty curve.
pub fn page_ecdf(chapters: &[ChapterRecord]) -> Vec<EcdfPoint> {
    let frequency = page_frequency(chapters);
    let total: usize = frequency.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut cumulative = 0usize;
    frequency
        .into_iter()
        .map(|(pages, count)| {
            cumulative += count;
            EcdfPoint {
                pages,
                fraction: cumulative as f64 / total as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chapter(number: i64, volume: i64, pages: i64) -> ChapterRecord {
        ChapterRecord {
            chapter: number,
            volume,
            pages,
            date: NaiveDate::from_ymd_opt(1997, 7, 19).unwrap(),
        }
    }

    fn joined(character: &str, chapter: i64) -> JoinedRecord {
        JoinedRecord {
            character: character.to_string(),
            chapter,
            episode: None,
            volume: 1,
            pages: 20,
            date: NaiveDate::from_ymd_opt(1997, 7, 19).unwrap(),
        }
    }

    #[test]
    fn averages_pages_by_volume() {
        let chapters = vec![chapter(1, 1, 50), chapter(2, 1, 20), chapter(3, 2, 19)];
        let averages = average_pages_per_volume(&chapters);

        assert!((averages[&1] - 35.0).abs() < 1e-9);
        assert!((averages[&2] - 19.0).abs() < 1e-9);
    }

    #[test]
    fn counts_distinct_characters_per_chapter() {
        let rows = vec![
            joined("Luffy", 1),
            joined("Luffy", 1),
            joined("Zoro", 1),
            joined("Nami", 8),
        ];
        let counts = characters_per_chapter(&rows);

        assert_eq!(counts[&1], 2);
        assert_eq!(counts[&8], 1);
    }

    #[test]
    fn page_frequency_counts_chapters() {
        let chapters = vec![chapter(1, 1, 19), chapter(2, 1, 19), chapter(3, 1, 23)];
        assert_eq!(page_frequency(&chapters), BTreeMap::from([(19, 2), (23, 1)]));
    }

    #[test]
    fn ecdf_is_monotone_and_ends_at_one() {
        let chapters = vec![chapter(1, 1, 19), chapter(2, 1, 19), chapter(3, 1, 23)];
        let curve = page_ecdf(&chapters);

        assert_eq!(curve.len(), 2);
        assert!((curve[0].fraction - 2.0 / 3.0).abs() < 1e-9);
        assert!((curve[1].fraction - 1.0).abs() < 1e-9);
        assert!(curve.windows(2).all(|w| w[0].fraction <= w[1].fraction));
    }

    #[test]
    fn ecdf_of_empty_input_is_empty() {
        assert!(page_ecdf(&[]).is_empty());
    }
}
