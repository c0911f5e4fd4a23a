//! Batch pipeline: load → normalize → join → graph → metrics → report

use crate::data::{self, DataError, Normalizer};
use crate::graph::{ChapterAppearance, CoOccurrenceGraph, GraphError, GraphSummary};
use crate::report::{RenderConfig, Report, ReportError, ReportWriter};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from any stage of the pipeline. All terminal: this is a
/// one-shot batch run, not a service.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Inputs and render target for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub characters_csv: PathBuf,
    pub chapters_csv: PathBuf,
    pub render: RenderConfig,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub chapter_count: usize,
    pub appearance_count: usize,
    pub joined_count: usize,
    /// Appearances dropped for a null or unmatched chapter.
    pub dropped_count: usize,
    pub summary: GraphSummary,
    pub written: Vec<PathBuf>,
}

/// Run the full analysis once, synchronously.
pub fn run(config: &PipelineConfig) -> Result<AnalysisOutcome, PipelineError> {
    let normalizer = Normalizer::new()?;

    tracing::info!(path = %config.chapters_csv.display(), "loading chapters table");
    let raw_chapters = data::load_chapter_rows(&config.chapters_csv)?;
    let chapters = normalizer.normalize_chapters(raw_chapters)?;

    tracing::info!(path = %config.characters_csv.display(), "loading characters table");
    let raw_characters = data::load_character_rows(&config.characters_csv)?;
    let appearances = normalizer.normalize_characters(raw_characters);
    let appearance_count = appearances.len();

    let joined = data::join_appearances(&appearances, &chapters);
    let dropped_count = appearance_count - joined.len();

    tracing::info!(rows = joined.len(), dropped = dropped_count, "building co-occurrence graph");
    let graph = CoOccurrenceGraph::build(joined.iter().map(ChapterAppearance::from))?;

    let report = Report::assemble(&chapters, &joined, &graph)?;
    let written = ReportWriter::new(config.render.clone()).write(&report)?;

    Ok(AnalysisOutcome {
        chapter_count: chapters.len(),
        appearance_count,
        joined_count: joined.len(),
        dropped_count,
        summary: report.degree_chart.summary,
        written,
    })
}
