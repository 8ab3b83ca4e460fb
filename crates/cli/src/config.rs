//! Data directory resolution for the CLI.

use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PODMAC_DATA_DIR";

/// Flag first, then `PODMAC_DATA_DIR`. `None` lets the library pick its default.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
  if let Some(dir) = flag {
    return Some(dir);
  }

  match std::env::var(DATA_DIR_ENV) {
    Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
    _ => None,
  }
}
