//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every failure of a load → select → invert → save pass maps to one variant here;
//! none of them are recovered locally.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    TypeMismatch {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn parse<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Parse {
            path: path.into(),
            message: e.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        Error::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}
