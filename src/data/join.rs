//! Equality join of appearances with chapter metadata

use super::types::{AppearanceRecord, ChapterRecord, JoinedRecord};
use std::collections::HashMap;

/// Join appearance rows with chapter metadata on the chapter number.
///
/// Rows whose chapter is absent, or whose chapter has no matching
/// chapter record, are dropped. This is a documented cleaning step,
/// not a failure: the characters table routinely contains anime-only
/// debuts with no chapter number.
pub fn join_appearances(
    appearances: &[AppearanceRecord],
    chapters: &[ChapterRecord],
) -> Vec<JoinedRecord> {
    let by_chapter: HashMap<i64, &ChapterRecord> =
        chapters.iter().map(|record| (record.chapter, record)).collect();

    let mut joined = Vec::with_capacity(appearances.len());
    let mut dropped_null = 0usize;
    let mut dropped_unmatched = 0usize;

    for appearance in appearances {
        let Some(chapter) = appearance.chapter else {
            dropped_null += 1;
            continue;
        };
        let Some(metadata) = by_chapter.get(&chapter) else {
            dropped_unmatched += 1;
            continue;
        };
        joined.push(JoinedRecord {
            character: appearance.character.clone(),
            chapter,
            episode: appearance.episode,
            volume: metadata.volume,
            pages: metadata.pages,
            date: metadata.date,
        });
    }

    tracing::debug!(
        joined = joined.len(),
        dropped_null,
        dropped_unmatched,
        "joined appearances with chapter metadata"
    );

    joined
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

    fn appearance(character: &str, chapter: Option<i64>) -> AppearanceRecord {
        AppearanceRecord {
            character: character.to_string(),
            chapter,
            episode: None,
        }
    }

    #[test]
    fn joins_on_chapter_number() {
        let chapters = vec![chapter(1, 1, 53), chapter(2, 1, 23)];
        let appearances = vec![appearance("Luffy", Some(1)), appearance("Koby", Some(2))];

        let joined = join_appearances(&appearances, &chapters);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].character, "Luffy");
        assert_eq!(joined[0].pages, 53);
        assert_eq!(joined[1].volume, 1);
    }

    #[test]
    fn drops_null_and_unmatched_chapters() {
        let chapters = vec![chapter(1, 1, 53)];
        let appearances = vec![
            appearance("Luffy", Some(1)),
            appearance("Anime Only", None),
            appearance("Future Debut", Some(999)),
        ];

        let joined = join_appearances(&appearances, &chapters);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].character, "Luffy");
    }

    #[test]
    fn every_joined_row_has_a_concrete_chapter() {
        let chapters = vec![chapter(5, 1, 19)];
        let appearances = vec![appearance("Buggy", Some(5)), appearance("Stray", None)];

        for row in join_appearances(&appearances, &chapters) {
            assert!(chapters.iter().any(|c| c.chapter == row.chapter));
        }
    }
}
