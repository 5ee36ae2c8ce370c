//! Error type shared by the ranking core, the corpus loader and configuration.

use std::path::PathBuf;

/// Errors surfaced by Quaero.
///
/// Empty queries, query tokens missing from an IDF table and empty
/// collections are not errors: they produce empty or zero-score rankings.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// A token sequence contained an empty token. This is a caller bug: tokens
  /// are expected to come out of a normalizer that never emits empty strings.
  #[error("member {id:?} contains an empty token")]
  InvalidToken {
    /// Identifier of the offending document or sentence.
    id: String,
  },
  /// An argument was outside its valid range.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// Reading from the filesystem failed.
  #[error("failed to read {}: {source}", path.display())]
  Io {
    /// Path that could not be read.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// A configuration file could not be parsed.
  #[error("invalid configuration: {0}")]
  Config(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Error::Io {
      path: path.into(),
      source,
    }
  }
}
