//! Directory-scoped locking for mutual exclusion across processes.
//!
//! Every store operation runs under one exclusive lock on the network
//! directory. Acquisition blocks until the lock is free; there is no timeout.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::LOCK_FILENAME;

#[derive(Debug, Error)]
pub enum LockError {
  #[error("Failed to open lock file {path}: {source}")]
  OpenFile {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to acquire lock: {0}")]
  LockFailed(#[source] io::Error),

  #[error("Failed to release lock: {0}")]
  UnlockFailed(#[source] io::Error),
}

/// A blocking lock over a store directory.
pub trait DirLock {
  /// Blocks until the lock is held.
  fn lock(&self) -> Result<(), LockError>;

  fn unlock(&self) -> Result<(), LockError>;
}

/// Holds a [`DirLock`] until dropped.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a, L: DirLock + ?Sized> {
  lock: &'a L,
}

impl<'a, L: DirLock + ?Sized> LockGuard<'a, L> {
  pub fn acquire(lock: &'a L) -> Result<Self, LockError> {
    lock.lock()?;
    Ok(Self { lock })
  }
}

impl<L: DirLock + ?Sized> Drop for LockGuard<'_, L> {
  fn drop(&mut self) {
    if let Err(err) = self.lock.unlock() {
      warn!(error = %err, "failed to release store lock");
    }
  }
}

/// Advisory file lock on `<dir>/.lock`.
///
/// The lock file stays empty; only the `flock` on it matters. Each
/// `FileLock` owns its own file handle, so two instances exclude each other
/// even inside one process.
pub struct FileLock {
  file: File,
  lock_path: PathBuf,
}

impl FileLock {
  /// Opens (creating if needed) the lock file in `dir`. Does not lock.
  pub fn new(dir: &Path) -> Result<Self, LockError> {
    let lock_path = dir.join(LOCK_FILENAME);

    let file = OpenOptions::new()
      .read(true)
      .write(true)
      .create(true)
      .truncate(false)
      .open(&lock_path)
      .map_err(|source| LockError::OpenFile {
        path: lock_path.clone(),
        source,
      })?;

    Ok(Self { file, lock_path })
  }

  pub fn lock_path(&self) -> &Path {
    &self.lock_path
  }
}

impl DirLock for FileLock {
  fn lock(&self) -> Result<(), LockError> {
    lock_exclusive(&self.file).map_err(LockError::LockFailed)?;
    debug!(path = %self.lock_path.display(), "acquired store lock");
    Ok(())
  }

  fn unlock(&self) -> Result<(), LockError> {
    unlock(&self.file).map_err(LockError::UnlockFailed)?;
    debug!(path = %self.lock_path.display(), "released store lock");
    Ok(())
  }
}

#[cfg(unix)]
fn lock_exclusive(file: &File) -> io::Result<()> {
  use rustix::fs::{FlockOperation, flock};
  use std::os::unix::io::AsFd;

  flock(file.as_fd(), FlockOperation::LockExclusive).map_err(|e| io::Error::from_raw_os_error(e.raw_os_error()))
}

#[cfg(unix)]
fn unlock(file: &File) -> io::Result<()> {
  use rustix::fs::{FlockOperation, flock};
  use std::os::unix::io::AsFd;

  flock(file.as_fd(), FlockOperation::Unlock).map_err(|e| io::Error::from_raw_os_error(e.raw_os_error()))
}

#[cfg(windows)]
fn lock_exclusive(file: &File) -> io::Result<()> {
  use std::os::windows::io::AsRawHandle;
  use windows_sys::Win32::Foundation::HANDLE;
  use windows_sys::Win32::Storage::FileSystem::{LOCKFILE_EXCLUSIVE_LOCK, LockFileEx};

  let handle = file.as_raw_handle() as HANDLE;

  // SAFETY: OVERLAPPED is a plain data struct that is valid when zero-initialized.
  // LockFileEx is safe to call with a valid file handle and zeroed OVERLAPPED.
  let result = unsafe {
    let mut overlapped = std::mem::zeroed();
    LockFileEx(handle, LOCKFILE_EXCLUSIVE_LOCK, 0, 1, 0, &mut overlapped)
  };

  if result == 0 {
    Err(io::Error::last_os_error())
  } else {
    Ok(())
  }
}

#[cfg(windows)]
fn unlock(file: &File) -> io::Result<()> {
  use std::os::windows::io::AsRawHandle;
  use windows_sys::Win32::Foundation::HANDLE;
  use windows_sys::Win32::Storage::FileSystem::UnlockFileEx;

  let handle = file.as_raw_handle() as HANDLE;

  // SAFETY: same handle and OVERLAPPED requirements as LockFileEx.
  let result = unsafe {
    let mut overlapped = std::mem::zeroed();
    UnlockFileEx(handle, 0, 1, 0, &mut overlapped)
  };

  if result == 0 {
    Err(io::Error::last_os_error())
  } else {
    Ok(())
  }
}
