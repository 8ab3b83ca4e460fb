//! List command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::output::{OutputFormat, print_info, print_json, print_stat};

pub fn cmd_list(network: &str, data_dir: Option<&Path>, output: OutputFormat) -> Result<()> {
  let store = super::open_store(network, data_dir)?;
  let records = store.list_records().context("Failed to list records")?;

  if output.is_json() {
    return print_json(&records);
  }

  if records.is_empty() {
    print_info(&format!("No reservations in {}", store.dir().display()));
    return Ok(());
  }

  print_info(&format!("{} reservation(s) in {}", records.len(), store.dir().display()));
  for record in &records {
    print_stat(&format!("{}/{}", record.namespace, record.name), &record.mac);
  }

  Ok(())
}
