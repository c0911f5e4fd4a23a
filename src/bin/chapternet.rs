//! Chapternet CLI — one-shot co-occurrence analysis.
//!
//! Usage:
//!   chapternet --characters data/characters.csv --chapters data/chapters.csv --out out/

use chapternet::pipeline::{self, PipelineConfig};
use chapternet::report::RenderConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chapternet",
    version,
    about = "Character co-occurrence network analysis for serialized narratives"
)]
struct Cli {
    /// Characters CSV (character, appearance columns)
    #[arg(long)]
    characters: PathBuf,

    /// Chapters CSV (chapter, volume, pages, date columns)
    #[arg(long)]
    chapters: PathBuf,

    /// Directory for the chart payload JSON files
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Suppress progress logging
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PipelineConfig {
        characters_csv: cli.characters,
        chapters_csv: cli.chapters,
        render: RenderConfig { out_dir: cli.out },
    };

    match pipeline::run(&config) {
        Ok(outcome) => {
            let summary = &outcome.summary;
            println!(
                "Joined {} of {} appearances across {} chapters ({} dropped)",
                outcome.joined_count,
                outcome.appearance_count,
                outcome.chapter_count,
                outcome.dropped_count,
            );
            println!(
                "Network: {} nodes, {} edges, average degree {:.3}",
                summary.node_count, summary.edge_count, summary.average_degree,
            );
            println!(
                "Highest degree: {} ({} neighbors: {})",
                summary.hub,
                summary.max_degree,
                summary.hub_neighbors.join(", "),
            );
            for path in &outcome.written {
                println!("Wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
