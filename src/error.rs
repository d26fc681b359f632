//! Error types shared by the annotator and the storage helpers.

use std::path::PathBuf;

use thiserror::Error;

/// A qualifying character the lookup had no reading for.
///
/// Returned by [`annotate_line`](crate::annotate::annotate_line). The column is
/// the zero-based character index within the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no reading for {ch:?} at column {column}")]
pub struct MissingReading {
    pub ch: char,
    pub column: usize,
}

/// Conversion and storage errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: {source}")]
    MissingReading {
        /// 1-based line number within the document.
        line: usize,
        #[source]
        source: MissingReading,
    },

    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
