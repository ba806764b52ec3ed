use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tourgraphs::{
    cli::{init_logging, report},
    prelude::*,
};

#[derive(Parser, Debug)]
#[command(
    name = "tourgraphs",
    about = "Find an Eulerian circuit of a graph file and check the necessary condition \
             for Hamiltonian cycles."
)]
struct Cli {
    /// Graph file as adjacency list, adjacency matrix or incidence matrix.
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut graph = Graph::try_from_file(&cli.input)
        .with_context(|| format!("failed to load graph from {}", cli.input.display()))?;
    tracing::info!(
        format = %graph.format(),
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "loaded graph"
    );

    for line in report(&mut graph) {
        println!("{line}");
    }

    Ok(())
}
