//! Chapternet: character co-occurrence analysis for serialized narratives
//!
//! Ingests two CSV tables — per-chapter metadata and per-character
//! chapter appearances — joins and cleans them, computes descriptive
//! statistics, and builds a weighted character co-occurrence network
//! with degree metrics. The output is a set of chart-ready JSON
//! payloads for an external rendering surface.
//!
//! # Core Concepts
//!
//! - **Chapter**: a numbered installment; the join key between tables
//! - **Co-occurrence**: two characters appearing in the same chapter;
//!   edge weight is the number of shared chapters
//! - **Self-loop**: a permanent zero-weight edge registering a node's
//!   existence, never counted toward degree
//!
//! # Example
//!
//! ```
//! use chapternet::graph::{ChapterAppearance, CoOccurrenceGraph};
//!
//! let rows = vec![
//!     ChapterAppearance { chapter: 1, character: "Luffy".into() },
//!     ChapterAppearance { chapter: 1, character: "Shanks".into() },
//! ];
//! let graph = CoOccurrenceGraph::build(rows).unwrap();
//! assert_eq!(graph.weight("Luffy", "Shanks"), Some(1));
//! ```

pub mod data;
pub mod graph;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use data::{
    AppearanceRecord, ChapterRecord, DataError, JoinedRecord, Normalizer,
};
pub use graph::{ChapterAppearance, CoOccurrenceGraph, GraphError, GraphSummary};
pub use pipeline::{AnalysisOutcome, PipelineConfig, PipelineError};
pub use report::{RenderConfig, Report, ReportError, ReportWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
