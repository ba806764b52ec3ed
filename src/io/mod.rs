/*!
# IO

Utilities for reading and writing graphs from and to the three plain-text formats.

## Formats

- **Adjacency list**: one line per node holding its comma-separated neighbors.
  An empty line is an isolated node. An edge `{u, v}` is listed on both lines `u` and `v`,
  a self-loop once on its node's line.
- **Adjacency matrix**: `n` lines of `n` space-separated multiplicities. The matrix is symmetric,
  the number of self-loops at `u` is stored once in cell `(u, u)`.
- **Incidence matrix**: `n` lines of `m` space-separated entries in `{0, 1, 2}`. Every column holds
  either two `1`-entries at the endpoints of an edge or a single `2`-entry for a self-loop.

Files carry no header; [`GraphFactory`] detects the format from the content.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].

# Example

```
use tourgraphs::{prelude::*, io::*};

let graph = GraphFactory::try_from_lines(&["0 1 1", "1 0 1", "1 1 0"]).unwrap();
assert_eq!(graph.format(), FileFormat::AdjacencyMatrix);

let mut buffer = Vec::new();
graph.try_write_to_writer(&mut buffer, FileFormat::IncidenceMatrix).unwrap();
assert_eq!(String::from_utf8(buffer).unwrap(), "1 1 0\n1 0 1\n0 1 1\n");
```
*/

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod factory;
pub mod incidence_matrix;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use adjacency_list::*;
pub use adjacency_matrix::*;
pub use factory::*;
pub use incidence_matrix::*;

/// Identifier for a graph file format and the representation it is loaded into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Comma-separated neighbor lists
    AdjacencyList,
    /// Square matrix of edge multiplicities
    AdjacencyMatrix,
    /// Node-by-edge incidence matrix
    IncidenceMatrix,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "list" | "adjacency-list" => Ok(FileFormat::AdjacencyList),
            "matrix" | "adjacency-matrix" => Ok(FileFormat::AdjacencyMatrix),
            "incidence" | "incidence-matrix" => Ok(FileFormat::IncidenceMatrix),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileFormat::AdjacencyList => "adjacency list",
            FileFormat::AdjacencyMatrix => "adjacency matrix",
            FileFormat::IncidenceMatrix => "incidence matrix",
        };
        write!(f, "{name}")
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// All formats are line based: implementors only parse already split lines,
/// reading from a [`BufRead`] or a file is provided on top.
pub trait GraphReader<G> {
    /// Parses a graph from its lines.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidData`] if the lines are not a valid
    /// description of a graph in the expected format.
    fn try_read_lines<S>(&self, lines: &[S]) -> Result<G>
    where
        S: AsRef<str>;

    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is invalid.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let lines = reader.lines().collect::<Result<Vec<String>>>()?;
        self.try_read_lines(&lines)
    }

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are invalid.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Parses a graph from its lines according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the lines are invalid for the chosen format.
    fn try_from_lines<S>(lines: &[S], format: FileFormat) -> Result<Self>
    where
        S: AsRef<str>;

    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is invalid for the chosen format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        let lines = reader.lines().collect::<Result<Vec<String>>>()?;
        Self::try_from_lines(&lines, format)
    }

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are invalid.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl GraphRead for AnyBackend {
    fn try_from_lines<S>(lines: &[S], format: FileFormat) -> Result<Self>
    where
        S: AsRef<str>,
    {
        Ok(match format {
            FileFormat::AdjacencyList => AdjacencyListReader::new().try_read_lines(lines)?.into(),
            FileFormat::AdjacencyMatrix => {
                AdjacencyMatrixReader::new().try_read_lines(lines)?.into()
            }
            FileFormat::IncidenceMatrix => {
                IncidenceMatrixReader::new().try_read_lines(lines)?.into()
            }
        })
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
///
/// Automatically implemented for all graphs exposing their edges, so any backend can be
/// written in any format.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: GraphNodeOrder + GraphEdgeOrder,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::AdjacencyList => AdjacencyListWriter::new().try_write_graph(self, writer),
            FileFormat::AdjacencyMatrix => {
                AdjacencyMatrixWriter::new().try_write_graph(self, writer)
            }
            FileFormat::IncidenceMatrix => {
                IncidenceMatrixWriter::new().try_write_graph(self, writer)
            }
        }
    }
}

/// Splits a line into its non-empty, trimmed tokens
fn tokens(line: &str, separator: char) -> impl Iterator<Item = &str> {
    line.split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse a token and returns early if it fails
macro_rules! parse_token {
    ($token : expr, $name : expr) => {{
        let token = $token;
        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{}` found. Cannot parse {}.", token, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_token;
use raise_error_unless;
