//! External text sources
//!
//! The combination list and the inventory paste are line-oriented text
//! collaborators. Each parser reads its whole source in a single pass,
//! builds its table, and fails fast on the first malformed record; no
//! partial table ever escapes a failed load.

mod combinations;
mod config;
mod inventory;

pub use config::{Config, LinksConfig, SourcesConfig, CONFIG_FILE};

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{CombinationError, Tally};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: invalid combination")]
    MalformedCombination {
        line: usize,
        #[source]
        source: CombinationError,
    },

    #[error("Line {line}: header '{text}' carries no fragment code")]
    MalformedHeader { line: usize, text: String },

    #[error("Line {line}: count '{text}' has no preceding fragment header")]
    OrphanCount { line: usize, text: String },

    #[error("Line {line}: expected a fragment header or a count, got '{text}'")]
    UnrecognizedLine { line: usize, text: String },
}

/// A text source that yields a counted table of fragments
///
/// The two sources share this seam: parse a complete text into the owning
/// type, or load it from a file first. `tally()` is the counted multiset
/// the source contributes (demand for the combination list, held counts
/// for the inventory).
pub trait RecordSource: Sized {
    /// Parses a complete source text
    fn parse_source(text: &str) -> Result<Self, SourceError>;

    /// Reads and parses the file at `path`
    fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::parse_source(&read_source(path.as_ref())?)
    }

    /// The counted fragments this source contributes
    fn tally(&self) -> &Tally;
}

/// Reads a source file to a string, distinguishing a missing file from
/// other I/O failures
fn read_source(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
