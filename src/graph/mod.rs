//! Co-occurrence graph and its network metrics

mod cooccurrence;
mod metrics;

use thiserror::Error;

pub use cooccurrence::{ChapterAppearance, CoOccurrenceGraph};
pub use metrics::{degree, degree_distribution, summarize, GraphSummary};

/// Errors from building or analyzing the co-occurrence graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("appearance row for chapter {chapter} has an empty character name")]
    InvalidInput { chapter: i64 },

    #[error("cannot compute metrics on a graph with no nodes")]
    EmptyGraph,
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
