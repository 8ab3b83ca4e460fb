//! Record file naming.
//!
//! A record binds a MAC address to a pod and is stored as an empty file whose
//! name carries the whole binding:
//!
//! ```text
//! mac_<mac>_<namespace>_<name>
//! ```
//!
//! None of the three fields may contain `_`; a field that does shifts the
//! segments and the file no longer parses as a record.

use glob::Pattern;
use serde::Serialize;

use crate::consts::{RECORD_DELIMITER, RECORD_PREFIX, RECORD_SEGMENTS};

/// A decoded `(mac, namespace, name)` binding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Record {
  pub mac: String,
  pub namespace: String,
  pub name: String,
}

impl Record {
  pub fn new(mac: impl Into<String>, namespace: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      mac: mac.into(),
      namespace: namespace.into(),
      name: name.into(),
    }
  }

  /// File name this record is stored under.
  pub fn file_name(&self) -> String {
    pod_file_name(&self.mac, &self.namespace, &self.name)
  }

  /// Decode a file name.
  ///
  /// Returns `None` for anything that does not split into exactly four
  /// segments. The leading segment itself is not checked.
  pub fn parse(file_name: &str) -> Option<Self> {
    let parts: Vec<&str> = file_name.split(RECORD_DELIMITER).collect();
    if parts.len() != RECORD_SEGMENTS {
      return None;
    }
    Some(Self::new(parts[1], parts[2], parts[3]))
  }
}

/// Encode a binding as a file name.
///
/// Without both a MAC and a namespace this degrades to the bare `name`, which
/// never matches a record search.
pub fn pod_file_name(mac: &str, namespace: &str, name: &str) -> String {
  if !mac.is_empty() && !namespace.is_empty() {
    return format!("{RECORD_PREFIX}_{mac}_{namespace}_{name}");
  }
  name.to_string()
}

/// True when `file_name` has exactly three delimiters.
pub fn has_record_shape(file_name: &str) -> bool {
  file_name.matches(RECORD_DELIMITER).count() == RECORD_SEGMENTS - 1
}

/// Glob pattern (relative to the store directory) for a record lookup.
///
/// A MAC takes precedence and matches any owner of that address; otherwise
/// both namespace and name are required. Field values are escaped so only the
/// wildcard segments match loosely.
pub fn search_pattern(mac: &str, namespace: &str, name: &str) -> Option<String> {
  if !mac.is_empty() {
    return Some(format!("{RECORD_PREFIX}_{}_*", Pattern::escape(mac)));
  }
  if !namespace.is_empty() && !name.is_empty() {
    return Some(format!(
      "{RECORD_PREFIX}_*_{}_{}",
      Pattern::escape(namespace),
      Pattern::escape(name)
    ));
  }
  None
}

/// Glob pattern matching every candidate record file.
pub fn any_record_pattern() -> String {
  format!("{RECORD_PREFIX}_*")
}
