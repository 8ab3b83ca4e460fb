//! Save command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::output::{OutputFormat, print_info, print_json, print_success};

#[derive(Serialize)]
struct SaveOutput<'a> {
  mac: &'a str,
  namespace: &'a str,
  name: &'a str,
  existing: bool,
}

pub fn cmd_save(
  network: &str,
  data_dir: Option<&Path>,
  mac: &str,
  namespace: &str,
  name: &str,
  existing: bool,
  output: OutputFormat,
) -> Result<()> {
  let store = super::open_store(network, data_dir)?;

  store
    .save_container_mac(mac, namespace, name, existing)
    .with_context(|| format!("Failed to save MAC {} for {}/{}", mac, namespace, name))?;
  info!(mac, namespace, name, existing, "save complete");

  if output.is_json() {
    return print_json(&SaveOutput {
      mac,
      namespace,
      name,
      existing,
    });
  }

  if existing || name.is_empty() {
    print_info("Nothing to record");
  } else {
    print_success(&format!("Reserved {} for {}/{}", mac, namespace, name));
  }

  Ok(())
}
