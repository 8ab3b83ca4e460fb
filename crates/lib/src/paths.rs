//! Store directory resolution and glob escaping.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::consts::DEFAULT_DATA_DIR;
use crate::error::StoreError;

/// Returns the data directory, falling back to [`DEFAULT_DATA_DIR`].
pub fn data_dir(configured: Option<&Path>) -> PathBuf {
  match configured {
    Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
    _ => PathBuf::from(DEFAULT_DATA_DIR),
  }
}

/// Returns the per-network store directory `<data_dir>/<network>`.
pub fn network_dir(network: &str, configured: Option<&Path>) -> PathBuf {
  data_dir(configured).join(network)
}

/// Joins an already escaped `pattern` onto `dir`, escaping the directory part.
///
/// Characters such as `[` or `*` in the directory name are matched literally.
pub fn escaped_pattern(dir: &Path, pattern: &str) -> Result<String, StoreError> {
  let dir = dir.to_str().ok_or_else(|| StoreError::NonUtf8Dir(dir.to_path_buf()))?;
  Ok(
    Path::new(&Pattern::escape(dir))
      .join(pattern)
      .to_string_lossy()
      .into_owned(),
  )
}

/// Path of a record file inside `dir`.
pub fn record_path(dir: &Path, file_name: &str) -> PathBuf {
  dir.join(file_name)
}
