//! # Factory
//!
//! Loads a graph whose format is not known in advance.
//! The format is guessed from the content as follows:
//!
//! 1. a comma anywhere in the first line means an adjacency list,
//! 2. otherwise, if the first line has as many tokens as there are lines, an adjacency matrix,
//! 3. otherwise an incidence matrix.
//!
//! The guess is ambiguous for some inputs: an adjacency list whose first line holds at most one
//! neighbor has no comma there, and a square incidence matrix (`|V| = |E|`) looks like an
//! adjacency matrix. Use [`GraphRead`] with an explicit [`FileFormat`] for such inputs.

use tracing::debug;

use super::*;

/// Reads graphs in any of the supported formats and picks the matching backend
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphFactory;

impl GraphFactory {
    /// Guesses the format of a graph from its lines.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidData`] if there are no lines at all.
    pub fn detect_format<S>(lines: &[S]) -> Result<FileFormat>
    where
        S: AsRef<str>,
    {
        let Some(first) = lines.first() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                "Cannot detect the format of an empty input"
            ));
        };
        let first = first.as_ref();

        let format = if first.contains(',') {
            FileFormat::AdjacencyList
        } else if tokens(first, ' ').count() == lines.len() {
            FileFormat::AdjacencyMatrix
        } else {
            FileFormat::IncidenceMatrix
        };

        Ok(format)
    }

    /// Detects the format of the lines and parses them into the matching backend.
    ///
    /// # Errors
    /// Returns an error if the input is empty or invalid for the detected format.
    pub fn try_from_lines<S>(lines: &[S]) -> Result<AnyBackend>
    where
        S: AsRef<str>,
    {
        let format = Self::detect_format(lines)?;
        debug!(%format, lines = lines.len(), "detected graph format");
        AnyBackend::try_from_lines(lines, format)
    }

    /// Reads all lines from the reader, detects their format and parses them.
    ///
    /// # Errors
    /// Returns an error if reading fails, the input is empty or invalid for the detected format.
    pub fn try_from_reader<R>(reader: R) -> Result<AnyBackend>
    where
        R: BufRead,
    {
        let lines = reader.lines().collect::<Result<Vec<String>>>()?;
        Self::try_from_lines(&lines)
    }

    /// Reads the file, detects its format and parses it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, is empty or invalid for the detected format.
    pub fn try_from_file<P>(path: P) -> Result<AnyBackend>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?))
    }
}
