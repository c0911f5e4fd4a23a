//! Character co-occurrence graph built from chapter-grouped appearances
//!
//! Nodes are character names; an undirected edge between two distinct
//! characters carries an integer weight equal to the number of chapters
//! both appear in. Each unordered pair is incremented exactly once per
//! shared chapter (duplicate appearances of a character within one
//! chapter collapse first, so a chapter contributes at most 1 to any
//! pair).
//!
//! Every character also gets a self-loop with permanent weight 0. The
//! self-loop registers the node's existence without implying
//! self-co-occurrence; it is excluded from the edge count and never
//! contributes to degree.

use super::{GraphError, GraphResult};
use crate::data::JoinedRecord;
use std::collections::{BTreeMap, BTreeSet};

/// One (chapter, character) pair — the builder's input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterAppearance {
    pub chapter: i64,
    pub character: String,
}

impl From<&JoinedRecord> for ChapterAppearance {
    fn from(record: &JoinedRecord) -> Self {
        Self {
            chapter: record.chapter,
            character: record.character.clone(),
        }
    }
}

/// Undirected weighted graph over character names.
///
/// Stored as a canonical adjacency map: for a cross edge the first key
/// is the lexicographically smaller name, so each unordered pair is
/// stored once. Self-loops sit under `(name, name)` with weight 0.
/// BTree ordering makes node and edge iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoOccurrenceGraph {
    adjacency: BTreeMap<String, BTreeMap<String, u64>>,
}

impl CoOccurrenceGraph {
    /// Build the graph from (chapter, character) pairs.
    ///
    /// An empty input yields an empty graph. A pair with an empty (or
    /// whitespace-only) character name fails with `InvalidInput`.
    pub fn build<I>(rows: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = ChapterAppearance>,
    {
        let mut casts: BTreeMap<i64, BTreeSet<String>> = BTreeMap::new();
        for row in rows {
            let name = row.character.trim();
            if name.is_empty() {
                return Err(GraphError::InvalidInput { chapter: row.chapter });
            }
            casts.entry(row.chapter).or_default().insert(name.to_string());
        }

        let mut graph = Self::default();
        for cast in casts.values() {
            // The cast set is sorted, so pairs come out in canonical
            // (smaller, larger) order and each unordered pair is
            // visited once per chapter.
            let cast: Vec<&String> = cast.iter().collect();
            for (i, member) in cast.iter().enumerate() {
                graph.register_node(member.as_str());
                for other in cast.iter().skip(i + 1) {
                    *graph
                        .adjacency
                        .entry((*member).clone())
                        .or_default()
                        .entry((*other).clone())
                        .or_insert(0) += 1;
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            chapters = casts.len(),
            "built co-occurrence graph"
        );
        Ok(graph)
    }

    /// Ensure a node exists, with its zero-weight self-loop.
    fn register_node(&mut self, name: &str) {
        self.adjacency
            .entry(name.to_string())
            .or_default()
            .entry(name.to_string())
            .or_insert(0);
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Distinct unordered pairs, excluding self-loops.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Node names in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Cross edges as (smaller name, larger name, weight), in
    /// lexicographic order. Self-loops are not included.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets.iter().filter_map(move |(target, weight)| {
                (source != target).then_some((source.as_str(), target.as_str(), *weight))
            })
        })
    }

    /// Weight of the edge between two distinct nodes, if it exists.
    pub fn weight(&self, a: &str, b: &str) -> Option<u64> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        self.adjacency.get(first)?.get(second).copied()
    }

    /// The node's self-loop weight — present (and always 0) for every
    /// node in the graph.
    pub fn self_loop(&self, name: &str) -> Option<u64> {
        self.adjacency.get(name)?.get(name).copied()
    }

    /// Distinct neighbors of a node in lexicographic order, excluding
    /// the node itself.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let mut neighbors: Vec<&str> = Vec::new();
        for (source, target, _) in self.edges() {
            if source == name {
                neighbors.push(target);
            } else if target == name {
                neighbors.push(source);
            }
        }
        neighbors.sort_unstable();
        neighbors
    }
}
