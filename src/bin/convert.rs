use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tourgraphs::{cli::init_logging, io::*};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Adjacency matrix, `<stem>_matrix.txt`
    Matrix,
    /// Incidence matrix, `<stem>_incidence.txt`
    Incidence,
}

impl Target {
    fn format(self) -> FileFormat {
        match self {
            Target::Matrix => FileFormat::AdjacencyMatrix,
            Target::Incidence => FileFormat::IncidenceMatrix,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Target::Matrix => "matrix",
            Target::Incidence => "incidence",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tourgraphs-convert",
    about = "Convert an adjacency-list graph file into an adjacency matrix or an incidence matrix."
)]
struct Cli {
    /// Graph file in adjacency-list format.
    #[arg(value_name = "FILE")]
    input: PathBuf,
    /// Format to convert into.
    #[arg(long, value_enum, default_value_t = Target::Matrix)]
    to: Target,
    /// Output file. Defaults to `<stem>_<format>.txt` next to the input.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
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

    let graph = AdjacencyListReader::new()
        .try_read_graph_file(&cli.input)
        .with_context(|| format!("failed to read adjacency list from {}", cli.input.display()))?;

    let output = match cli.output {
        Some(path) => path,
        None => default_output(&cli.input, cli.to)?,
    };

    graph
        .try_write_to_file(&output, cli.to.format())
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), format = %cli.to.format(), "converted graph");

    println!("{}", output.display());
    Ok(())
}

/// `dir/name.txt` becomes `dir/name_matrix.txt` or `dir/name_incidence.txt`
fn default_output(input: &Path, target: Target) -> Result<PathBuf> {
    let Some(stem) = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
    else {
        bail!("cannot derive an output name from {}, use --output", input.display());
    };

    Ok(input.with_file_name(format!("{stem}_{}.txt", target.suffix())))
}
