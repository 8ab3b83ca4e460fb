//! podmac-lib: persistent pod-to-MAC reservations.
//!
//! Lets a network plugin hand a pod the same MAC address across container
//! restarts. Each reservation is an empty file named
//! `mac_<mac>_<namespace>_<name>` inside `<data_dir>/<network>/`:
//! - `MacStore`: locked entry point (`get_container_mac`, `save_container_mac`)
//! - `Reservations`: lookup and create-or-rename logic
//! - `Finder`: glob-based record search
//! - `Record`: file name encoding

pub mod consts;
pub mod error;
pub mod finder;
pub mod lock;
pub mod mac;
pub mod paths;
pub mod record;
pub mod reserve;
pub mod store;

pub use error::StoreError;
pub use finder::{Finder, GlobFinder};
pub use lock::{DirLock, FileLock, LockError, LockGuard};
pub use mac::MacAddr;
pub use record::Record;
pub use reserve::Reservations;
pub use store::MacStore;
