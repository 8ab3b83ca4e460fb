//! Public entry point of the record store.
//!
//! # Layout
//!
//! ```text
//! <data_dir>/<network>/
//! ├── .lock                                 # empty advisory lock file
//! └── mac_<mac>_<namespace>_<name>          # one empty file per reservation
//! ```

use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::DIR_MODE;
use crate::error::StoreError;
use crate::finder::{Finder, GlobFinder};
use crate::lock::{DirLock, FileLock, LockGuard};
use crate::mac::MacAddr;
use crate::paths::network_dir;
use crate::record::Record;
use crate::reserve::Reservations;

/// Maps pod identities to the MAC addresses reserved for them.
///
/// Every operation holds the directory lock for its whole duration, so
/// operations from separate processes on one directory are serialized.
pub struct MacStore<L = FileLock, F = GlobFinder> {
  lock: L,
  reservations: Reservations<F>,
}

impl MacStore {
  /// Opens the store for `network` under `data_dir`, creating the directory.
  ///
  /// `None` or an empty `data_dir` selects [`crate::consts::DEFAULT_DATA_DIR`].
  pub fn new(network: &str, data_dir: Option<&Path>) -> Result<Self, StoreError> {
    let dir = network_dir(network, data_dir);
    create_store_dir(&dir)?;

    let lock = FileLock::new(&dir)?;
    let finder = GlobFinder::new(&dir);
    debug!(dir = %dir.display(), "opened mac store");
    Ok(Self::with_parts(dir, lock, finder))
  }
}

impl<L: DirLock, F: Finder> MacStore<L, F> {
  /// Assembles a store from an existing directory and its collaborators.
  pub fn with_parts(dir: PathBuf, lock: L, finder: F) -> Self {
    Self {
      lock,
      reservations: Reservations::new(dir, finder),
    }
  }

  pub fn dir(&self) -> &Path {
    self.reservations.dir()
  }

  pub fn lock(&self) -> &L {
    &self.lock
  }

  /// Returns the MAC previously reserved for the pod.
  ///
  /// `Ok(None)` means the pod has no reservation yet.
  pub fn get_container_mac(&self, namespace: &str, name: &str) -> Result<Option<MacAddr>, StoreError> {
    let _guard = LockGuard::acquire(&self.lock)?;
    self.reservations.has_reserved_mac(namespace, name)
  }

  /// Reserves `mac` for the pod unless `mac_already_exists` is set.
  pub fn save_container_mac(
    &self,
    mac: &str,
    namespace: &str,
    name: &str,
    mac_already_exists: bool,
  ) -> Result<(), StoreError> {
    let _guard = LockGuard::acquire(&self.lock)?;
    self.reservations.reserve_pod_info(mac, namespace, name, mac_already_exists)?;
    Ok(())
  }

  /// Returns the pod's reserved MAC, reserving `mac` first if it has none.
  ///
  /// Lookup and reservation happen under a single lock acquisition, so two
  /// callers racing for the same pod end up sharing one record. `mac` must
  /// parse as a [`MacAddr`]; it is rejected before anything is written.
  ///
  /// An empty `name` identifies no pod: nothing is looked up or saved and
  /// the result is `Ok(None)`.
  pub fn get_or_save_container_mac(
    &self,
    mac: &str,
    namespace: &str,
    name: &str,
  ) -> Result<Option<MacAddr>, StoreError> {
    if name.is_empty() {
      return Ok(None);
    }

    let _guard = LockGuard::acquire(&self.lock)?;
    if let Some(existing) = self.reservations.has_reserved_mac(namespace, name)? {
      return Ok(Some(existing));
    }

    let parsed: MacAddr = mac.parse()?;
    self.reservations.reserve_pod_info(mac, namespace, name, false)?;
    Ok(Some(parsed))
  }

  /// Lists every record in the store.
  pub fn list_records(&self) -> Result<Vec<Record>, StoreError> {
    let _guard = LockGuard::acquire(&self.lock)?;
    self.reservations.records()
  }
}

fn create_store_dir(dir: &Path) -> Result<(), StoreError> {
  let mut builder = DirBuilder::new();
  builder.recursive(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(DIR_MODE);
  }
  builder.create(dir).map_err(|source| StoreError::CreateDir {
    path: dir.to_path_buf(),
    source,
  })
}
