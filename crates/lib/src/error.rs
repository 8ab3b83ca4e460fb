//! Error types for the record store.
//!
//! Only hard filesystem failures are errors. A missing or ambiguous record is
//! reported as `Ok(None)` by the lookup operations instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lock::LockError;
use crate::mac::ParseMacError;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("failed to create store directory {path}: {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Lock(#[from] LockError),

  #[error("store directory is not valid UTF-8: {0}")]
  NonUtf8Dir(PathBuf),

  #[error("invalid search pattern {pattern}: {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },

  #[error("failed to read store entry {path}: {source}")]
  ReadEntry {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to create record {path}: {source}")]
  CreateRecord {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to rename record {from} to {to}: {source}")]
  RenameRecord {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  InvalidMac(#[from] ParseMacError),

  #[error("{field} {value:?} contains the record delimiter '_'")]
  Delimiter { field: &'static str, value: String },
}

impl From<glob::GlobError> for StoreError {
  fn from(err: glob::GlobError) -> Self {
    let path = err.path().to_path_buf();
    StoreError::ReadEntry {
      path,
      source: err.into_error(),
    }
  }
}
