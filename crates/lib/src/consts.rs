//! Constants shared across the record store.

/// Storage root used when no data directory is configured.
pub const DEFAULT_DATA_DIR: &str = "/var/lib/cni/networks";

/// Leading segment of every record file name.
pub const RECORD_PREFIX: &str = "mac";

/// Separator between the segments of a record file name.
pub const RECORD_DELIMITER: char = '_';

/// Number of `_`-separated segments in a record file name.
pub const RECORD_SEGMENTS: usize = 4;

/// Advisory lock file kept inside each network directory.
pub const LOCK_FILENAME: &str = ".lock";

/// Mode for newly created network directories.
pub const DIR_MODE: u32 = 0o755;

/// Mode for newly created record files.
pub const RECORD_MODE: u32 = 0o644;
