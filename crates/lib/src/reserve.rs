//! Reservation of MAC addresses for pods.
//!
//! Callers must hold the store lock for the duration of each call; see
//! [`crate::store::MacStore`], which does so.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::{RECORD_DELIMITER, RECORD_MODE};
use crate::error::StoreError;
use crate::finder::Finder;
use crate::mac::MacAddr;
use crate::paths::record_path;
use crate::record::{Record, pod_file_name};

/// Lookup and reservation over one store directory.
#[derive(Debug, Clone)]
pub struct Reservations<F> {
  dir: PathBuf,
  finder: F,
}

impl<F: Finder> Reservations<F> {
  pub fn new(dir: impl Into<PathBuf>, finder: F) -> Self {
    Self {
      dir: dir.into(),
      finder,
    }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Returns the MAC already reserved for the pod, if any.
  pub fn has_reserved_mac(&self, namespace: &str, name: &str) -> Result<Option<MacAddr>, StoreError> {
    if name.is_empty() {
      return Ok(None);
    }

    let Some(file_name) = self.finder.find("", namespace, name)? else {
      return Ok(None);
    };

    match Record::parse(&file_name) {
      Some(record) if record.namespace == namespace && record.name == name => {
        Ok(Some(record.mac.parse::<MacAddr>()?))
      }
      _ => Ok(None),
    }
  }

  /// Records `mac` as owned by the pod.
  ///
  /// Does nothing when `mac_already_exists` is set or `name` is empty. An
  /// existing record for `mac` is renamed to the new owner; otherwise a new
  /// empty record file is created. Always returns `true` on success.
  pub fn reserve_pod_info(
    &self,
    mac: &str,
    namespace: &str,
    name: &str,
    mac_already_exists: bool,
  ) -> Result<bool, StoreError> {
    if mac_already_exists || name.is_empty() {
      return Ok(true);
    }

    check_delimiter("mac", mac)?;
    check_delimiter("namespace", namespace)?;
    check_delimiter("name", name)?;

    let target = record_path(&self.dir, &pod_file_name(mac, namespace, name));

    if let Some(existing) = self.finder.find(mac, "", "")? {
      let from = record_path(&self.dir, &existing);
      std::fs::rename(&from, &target).map_err(|source| StoreError::RenameRecord {
        from: from.clone(),
        to: target.clone(),
        source,
      })?;
      info!(%mac, namespace, name, from = %existing, "reattached record to pod");
      return Ok(true);
    }

    create_empty(&target)?;
    info!(%mac, namespace, name, path = %target.display(), "created record");
    Ok(true)
  }

  /// Every well-formed record in the directory, sorted by file name.
  pub fn records(&self) -> Result<Vec<Record>, StoreError> {
    let mut names = self.finder.candidates()?;
    names.sort();

    let records: Vec<Record> = names
      .iter()
      .filter_map(|name| {
        let record = Record::parse(name);
        if record.is_none() {
          debug!(file = %name, "skipping non-record file");
        }
        record
      })
      .collect();
    Ok(records)
  }
}

fn check_delimiter(field: &'static str, value: &str) -> Result<(), StoreError> {
  if value.contains(RECORD_DELIMITER) {
    return Err(StoreError::Delimiter {
      field,
      value: value.to_string(),
    });
  }
  Ok(())
}

fn create_empty(path: &Path) -> Result<(), StoreError> {
  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(RECORD_MODE);
  }
  options.open(path).map_err(|source| StoreError::CreateRecord {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(())
}
