//! Deterministic force-directed layout for the network view
//!
//! A small Fruchterman–Reingold pass over the co-occurrence graph.
//! Initial positions sit on a circle in node order and the iteration
//! count is fixed, so the layout is fully deterministic: rendering the
//! same graph twice gives identical coordinates.

use crate::graph::CoOccurrenceGraph;
use std::collections::BTreeMap;

/// Layout parameters, passed explicitly by the report assembler.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub iterations: usize,
    /// Side length of the square layout area.
    pub size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            size: 1.0,
        }
    }
}

/// Compute node positions for the graph.
///
/// Returns a position for every node; an empty graph yields an empty
/// map and a single node sits at the center.
pub fn force_layout(graph: &CoOccurrenceGraph, config: &LayoutConfig) -> BTreeMap<String, (f64, f64)> {
    let names: Vec<&str> = graph.nodes().collect();
    let n = names.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let center = config.size / 2.0;
    if n == 1 {
        return BTreeMap::from([(names[0].to_string(), (center, center))]);
    }

    // Seed positions on a circle in node order.
    let radius = config.size / 3.0;
    let mut positions: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            (center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect();

    let index: BTreeMap<&str, usize> = names.iter().enumerate().map(|(i, s)| (*s, i)).collect();
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .map(|(a, b, _)| (index[a], index[b]))
        .collect();

    let k = (config.size * config.size / n as f64).sqrt();
    let mut displacement = vec![(0.0f64, 0.0f64); n];

    for iteration in 0..config.iterations {
        for d in displacement.iter_mut() {
            *d = (0.0, 0.0);
        }

        // Repulsion between all pairs
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = delta(positions[i], positions[j]);
                let distance = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / distance;
                let (ux, uy) = (dx / distance, dy / distance);
                displacement[i].0 += ux * force;
                displacement[i].1 += uy * force;
                displacement[j].0 -= ux * force;
                displacement[j].1 -= uy * force;
            }
        }

        // Attraction along edges
        for &(i, j) in &edges {
            let (dx, dy) = delta(positions[i], positions[j]);
            let distance = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = distance * distance / k;
            let (ux, uy) = (dx / distance, dy / distance);
            displacement[i].0 -= ux * force;
            displacement[i].1 -= uy * force;
            displacement[j].0 += ux * force;
            displacement[j].1 += uy * force;
        }

        // Linear cooling
        let temperature =
            config.size / 10.0 * (1.0 - iteration as f64 / config.iterations as f64);
        for i in 0..n {
            let (dx, dy) = displacement[i];
            let magnitude = (dx * dx + dy * dy).sqrt().max(1e-9);
            let step = magnitude.min(temperature);
            positions[i].0 = (positions[i].0 + dx / magnitude * step).clamp(0.0, config.size);
            positions[i].1 = (positions[i].1 + dy / magnitude * step).clamp(0.0, config.size);
        }
    }

    names
        .into_iter()
        .zip(positions)
        .map(|(name, position)| (name.to_string(), position))
        .collect()
}

fn delta(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (a.0 - b.0, a.1 - b.1)
}
