//! Error conditions reported before and during setup of an annealing run.

use thiserror::Error;

/// Errors produced by input validation and configuration checks.
///
/// Annealing itself never fails once started: rejected moves and numeric
/// saturation in the acceptance probability are expected paths, not errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The point set cannot be annealed (too few points, non-finite
    /// coordinates, or a malformed city file).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration parameter is outside its valid range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A city file could not be read.
    #[error("failed to read city file: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
