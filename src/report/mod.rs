//! Chart-ready payloads and the JSON report writer
//!
//! The analysis core hands pre-aggregated data to whatever draws the
//! charts. Payloads here are plain serializable structs with no
//! dependency on a charting backend, and the render target is explicit
//! configuration rather than process-global state.

mod layout;

use crate::data::{ChapterRecord, JoinedRecord};
use crate::graph::{self, CoOccurrenceGraph, GraphResult, GraphSummary};
use crate::stats::{self, EcdfPoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub use layout::{force_layout, LayoutConfig};

/// Errors from writing report payloads.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Explicit render target for the report writer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory the JSON payloads are written into.
    pub out_dir: PathBuf,
}

/// One chapter in the release time series (bubble chart data:
/// date on x, chapter on y, pages as marker size, volume as color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterPoint {
    pub chapter: i64,
    pub date: NaiveDate,
    pub pages: i64,
    pub volume: i64,
}

/// One bar of the page-count frequency chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    pub pages: i64,
    pub count: usize,
}

/// One point of the degree-distribution scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreePoint {
    pub degree: usize,
    pub count: usize,
}

/// Degree-distribution chart payload: the scatter points plus the
/// summary annotations (node/edge totals, average degree, hub).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeChart {
    pub points: Vec<DegreePoint>,
    pub summary: GraphSummary,
}

/// A positioned node of the network view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub degree: usize,
}

/// A weighted undirected edge of the network view, in canonical
/// (smaller name, larger name) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// The co-occurrence network with precomputed positions, so any
/// backend can draw it without running its own layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkView {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Everything a charting backend needs to render the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub chapter_timeline: Vec<ChapterPoint>,
    pub page_frequency: Vec<FrequencyPoint>,
    pub page_ecdf: Vec<EcdfPoint>,
    pub characters_per_chapter: Vec<(i64, usize)>,
    pub average_pages_per_volume: Vec<(i64, f64)>,
    pub degree_chart: DegreeChart,
    pub network: NetworkView,
}

impl Report {
    /// Aggregate the cleaned tables and graph into chart payloads.
    ///
    /// Fails with `EmptyGraph` when the graph has no nodes, since the
    /// degree chart's summary annotations are undefined there.
    pub fn assemble(
        chapters: &[ChapterRecord],
        joined: &[JoinedRecord],
        graph: &CoOccurrenceGraph,
    ) -> GraphResult<Self> {
        let summary = graph::summarize(graph)?;

        let points = graph::degree_distribution(graph)
            .into_iter()
            .map(|(degree, count)| DegreePoint { degree, count })
            .collect();

        let positions = force_layout(graph, &LayoutConfig::default());
        let nodes = graph
            .nodes()
            .map(|name| {
                let (x, y) = positions[name];
                NetworkNode {
                    name: name.to_string(),
                    x,
                    y,
                    degree: graph::degree(graph, name),
                }
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(source, target, weight)| NetworkEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            })
            .collect();

        Ok(Self {
            chapter_timeline: chapters
                .iter()
                .map(|c| ChapterPoint {
                    chapter: c.chapter,
                    date: c.date,
                    pages: c.pages,
                    volume: c.volume,
                })
                .collect(),
            page_frequency: stats::page_frequency(chapters)
                .into_iter()
                .map(|(pages, count)| FrequencyPoint { pages, count })
                .collect(),
            page_ecdf: stats::page_ecdf(chapters),
            characters_per_chapter: stats::characters_per_chapter(joined).into_iter().collect(),
            average_pages_per_volume: stats::average_pages_per_volume(chapters)
                .into_iter()
                .collect(),
            degree_chart: DegreeChart { points, summary },
            network: NetworkView { nodes, edges },
        })
    }
}

/// Writes each payload of a [`Report`] as a JSON file into the
/// configured output directory.
pub struct ReportWriter {
    config: RenderConfig,
}

impl ReportWriter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Write all payloads, returning the paths written.
    pub fn write(&self, report: &Report) -> Result<Vec<PathBuf>, ReportError> {
        fs::create_dir_all(&self.config.out_dir)?;

        let written = vec![
            self.write_json("chapter_timeline.json", &report.chapter_timeline)?,
            self.write_json("page_frequency.json", &report.page_frequency)?,
            self.write_json("page_ecdf.json", &report.page_ecdf)?,
            self.write_json("characters_per_chapter.json", &report.characters_per_chapter)?,
            self.write_json("average_pages_per_volume.json", &report.average_pages_per_volume)?,
            self.write_json("degree_distribution.json", &report.degree_chart)?,
            self.write_json("network.json", &report.network)?,
        ];

        tracing::info!(
            out_dir = %self.config.out_dir.display(),
            files = written.len(),
            "wrote report payloads"
        );
        Ok(written)
    }

    fn write_json<T: Serialize>(&self, name: &str, payload: &T) -> Result<PathBuf, ReportError> {
        let path = self.config.out_dir.join(name);
        fs::write(&path, serde_json::to_vec_pretty(payload)?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ChapterAppearance;
    use chrono::NaiveDate;
    use tempfile::tempdir;

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
            pages: 53,
            date: NaiveDate::from_ymd_opt(1997, 7, 19).unwrap(),
        }
    }

    fn sample_inputs() -> (Vec<ChapterRecord>, Vec<JoinedRecord>, CoOccurrenceGraph) {
        let chapters = vec![chapter(1, 1, 53), chapter(2, 1, 23)];
        let rows = vec![
            joined("Luffy", 1),
            joined("Shanks", 1),
            joined("Luffy", 2),
            joined("Koby", 2),
        ];
        let graph = CoOccurrenceGraph::build(rows.iter().map(ChapterAppearance::from)).unwrap();
        (chapters, rows, graph)
    }

    #[test]
    fn assembles_all_payloads() {
        let (chapters, rows, graph) = sample_inputs();
        let report = Report::assemble(&chapters, &rows, &graph).unwrap();

        assert_eq!(report.chapter_timeline.len(), 2);
        assert_eq!(report.network.nodes.len(), 3);
        assert_eq!(report.network.edges.len(), 2);
        assert_eq!(report.degree_chart.summary.hub, "Luffy");
        // Luffy bridges both chapters; the others have one neighbor
        assert_eq!(
            report.degree_chart.points,
            vec![
                DegreePoint { degree: 1, count: 2 },
                DegreePoint { degree: 2, count: 1 },
            ]
        );
    }

    #[test]
    fn empty_graph_fails_assembly() {
        let graph = CoOccurrenceGraph::build(Vec::new()).unwrap();
        assert!(Report::assemble(&[], &[], &graph).is_err());
    }

    #[test]
    fn writes_payload_files() {
        let (chapters, rows, graph) = sample_inputs();
        let report = Report::assemble(&chapters, &rows, &graph).unwrap();

        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(RenderConfig {
            out_dir: dir.path().to_path_buf(),
        });
        let written = writer.write(&report).unwrap();

        assert_eq!(written.len(), 7);
        for path in &written {
            assert!(path.exists(), "missing {}", path.display());
        }

        // Payloads round-trip through JSON
        let raw = fs::read_to_string(dir.path().join("network.json")).unwrap();
        let network: NetworkView = serde_json::from_str(&raw).unwrap();
        assert_eq!(network, report.network);
    }
}
