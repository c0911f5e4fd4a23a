//! Degree metrics and summary statistics over the co-occurrence graph

use super::cooccurrence::CoOccurrenceGraph;
use super::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of distinct neighbors of a node. Self-loops never count.
///
/// A name absent from the graph has degree 0.
pub fn degree(graph: &CoOccurrenceGraph, node: &str) -> usize {
    graph.neighbors(node).len()
}

/// Frequency histogram of degrees: degree value → node count.
///
/// Isolated nodes are included at degree 0; the histogram always
/// covers the full node set.
pub fn degree_distribution(graph: &CoOccurrenceGraph) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for node in graph.nodes() {
        *distribution.entry(degree(graph, node)).or_insert(0) += 1;
    }
    distribution
}

/// Summary statistics for a co-occurrence graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    /// Distinct unordered pairs, self-loops excluded.
    pub edge_count: usize,
    /// Sum of all degrees divided by the node count, over the same
    /// node set as the distribution (isolated nodes included).
    pub average_degree: f64,
    pub max_degree: usize,
    /// Highest-degree node. Ties break to the lexicographically
    /// smallest name, so output is reproducible.
    pub hub: String,
    /// Neighbors of the hub, lexicographically sorted.
    pub hub_neighbors: Vec<String>,
}

/// Compute summary statistics.
///
/// Fails with `EmptyGraph` on a graph with zero nodes rather than
/// dividing by zero.
pub fn summarize(graph: &CoOccurrenceGraph) -> GraphResult<GraphSummary> {
    let mut degree_sum = 0usize;
    let mut hub: Option<(&str, usize)> = None;

    // Nodes iterate in lexicographic order, so keeping the first
    // strict maximum gives the smallest name on ties.
    for node in graph.nodes() {
        let d = degree(graph, node);
        degree_sum += d;
        match hub {
            Some((_, best)) if d <= best => {}
            _ => hub = Some((node, d)),
        }
    }

    let Some((hub_name, max_degree)) = hub else {
        return Err(GraphError::EmptyGraph);
    };

    Ok(GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        average_degree: degree_sum as f64 / graph.node_count() as f64,
        max_degree,
        hub: hub_name.to_string(),
        hub_neighbors: graph
            .neighbors(hub_name)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ChapterAppearance;

    fn row(chapter: i64, character: &str) -> ChapterAppearance {
        ChapterAppearance {
            chapter,
            character: character.to_string(),
        }
    }

    /// Chapter 1: {A, B, C}; chapter 2: {A, B}.
    fn sample_graph() -> CoOccurrenceGraph {
        CoOccurrenceGraph::build(vec![
            row(1, "A"),
            row(1, "B"),
            row(1, "C"),
            row(2, "A"),
            row(2, "B"),
        ])
        .unwrap()
    }

    #[test]
    fn degree_counts_distinct_neighbors() {
        let graph = sample_graph();
        assert_eq!(degree(&graph, "A"), 2);
        assert_eq!(degree(&graph, "B"), 2);
        assert_eq!(degree(&graph, "C"), 1);
    }

    #[test]
    fn degree_ignores_self_loop() {
        let graph = CoOccurrenceGraph::build(vec![row(5, "Hermit")]).unwrap();
        assert_eq!(graph.self_loop("Hermit"), Some(0));
        assert_eq!(degree(&graph, "Hermit"), 0);
    }

    #[test]
    fn degree_of_unknown_node_is_zero() {
        assert_eq!(degree(&sample_graph(), "Nobody"), 0);
    }

    #[test]
    fn distribution_matches_degrees() {
        let distribution = degree_distribution(&sample_graph());
        assert_eq!(distribution, BTreeMap::from([(1, 1), (2, 2)]));
    }

    #[test]
    fn distribution_includes_isolated_nodes() {
        let graph = CoOccurrenceGraph::build(vec![
            row(1, "A"),
            row(1, "B"),
            row(9, "Hermit"),
        ])
        .unwrap();
        assert_eq!(degree_distribution(&graph), BTreeMap::from([(0, 1), (1, 2)]));
    }

    #[test]
    fn summary_statistics() {
        let summary = summarize(&sample_graph()).unwrap();

        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 3);
        assert_eq!(summary.max_degree, 2);
        // degrees 2 + 2 + 1 over 3 nodes
        assert!((summary.average_degree - 5.0 / 3.0).abs() < 1e-9);
        // A and B tie at degree 2; lexicographically smallest wins
        assert_eq!(summary.hub, "A");
        assert_eq!(summary.hub_neighbors, vec!["B", "C"]);
    }

    #[test]
    fn average_degree_counts_isolated_nodes() {
        let graph = CoOccurrenceGraph::build(vec![
            row(1, "A"),
            row(1, "B"),
            row(9, "Hermit"),
        ])
        .unwrap();
        let summary = summarize(&graph).unwrap();
        assert!((summary.average_degree - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn sum_of_degrees_is_twice_edge_count() {
        let graph = sample_graph();
        let summary = summarize(&graph).unwrap();
        let degree_sum: usize = graph.nodes().map(|n| degree(&graph, n)).sum();
        assert_eq!(degree_sum, 2 * summary.edge_count);
        assert!(
            (summary.average_degree - degree_sum as f64 / summary.node_count as f64).abs() < 1e-9
        );
    }

    #[test]
    fn empty_graph_is_an_error_not_a_nan() {
        let graph = CoOccurrenceGraph::build(Vec::new()).unwrap();
        let err = summarize(&graph).unwrap_err();
        assert!(matches!(err, GraphError::EmptyGraph));
    }
}
