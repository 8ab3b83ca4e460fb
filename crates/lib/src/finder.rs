//! Record lookup over the store directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::paths::escaped_pattern;
use crate::record::{any_record_pattern, has_record_shape, search_pattern};

/// Locates record files by partial key.
pub trait Finder {
  /// Returns the file name of the single record matching the query.
  ///
  /// A non-empty `mac` matches any record for that address. Otherwise both
  /// `namespace` and `name` must be given. Zero or several matches yield
  /// `Ok(None)`.
  fn find(&self, mac: &str, namespace: &str, name: &str) -> Result<Option<String>, StoreError>;

  /// Returns the file names of every candidate record, in no particular order.
  fn candidates(&self) -> Result<Vec<String>, StoreError>;
}

/// [`Finder`] that globs the store directory.
#[derive(Debug, Clone)]
pub struct GlobFinder {
  dir: PathBuf,
}

impl GlobFinder {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn glob_paths(&self, pattern: &str) -> Result<Vec<PathBuf>, StoreError> {
    let full = escaped_pattern(&self.dir, pattern)?;
    let paths = glob::glob(&full).map_err(|source| StoreError::Pattern {
      pattern: full.clone(),
      source,
    })?;

    let mut matches = Vec::new();
    for entry in paths {
      matches.push(entry?);
    }
    Ok(matches)
  }
}

/// Reduces glob matches to the file name of a single well-formed record.
///
/// Every match counts toward ambiguity, including names that are not UTF-8.
fn unique_record(pattern: &str, mut matches: Vec<PathBuf>) -> Option<String> {
  if matches.len() > 1 {
    warn!(%pattern, count = matches.len(), "ambiguous record match, treating as absent");
    return None;
  }

  let Some(path) = matches.pop() else {
    debug!(%pattern, "no record found");
    return None;
  };

  match path.file_name().and_then(|n| n.to_str()) {
    Some(file_name) if has_record_shape(file_name) => {
      debug!(%pattern, file = %file_name, "found record");
      Some(file_name.to_string())
    }
    _ => {
      debug!(%pattern, path = %path.display(), "ignoring malformed record");
      None
    }
  }
}

impl Finder for GlobFinder {
  fn find(&self, mac: &str, namespace: &str, name: &str) -> Result<Option<String>, StoreError> {
    let Some(pattern) = search_pattern(mac, namespace, name) else {
      return Ok(None);
    };

    let matches = self.glob_paths(&pattern)?;
    Ok(unique_record(&pattern, matches))
  }

  fn candidates(&self) -> Result<Vec<String>, StoreError> {
    let paths = self.glob_paths(&any_record_pattern())?;
    Ok(
      paths
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .map(str::to_string)
        .collect(),
    )
  }
}
