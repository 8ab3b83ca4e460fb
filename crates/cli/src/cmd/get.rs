//! Get command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success};

#[derive(Serialize)]
struct GetOutput<'a> {
  namespace: &'a str,
  name: &'a str,
  found: bool,
  mac: Option<String>,
}

pub fn cmd_get(network: &str, data_dir: Option<&Path>, namespace: &str, name: &str, output: OutputFormat) -> Result<()> {
  let store = super::open_store(network, data_dir)?;

  let mac = store
    .get_container_mac(namespace, name)
    .with_context(|| format!("Failed to look up MAC for {}/{}", namespace, name))?
    .map(|mac| mac.to_string());

  if output.is_json() {
    return print_json(&GetOutput {
      namespace,
      name,
      found: mac.is_some(),
      mac,
    });
  }

  match mac {
    Some(mac) => {
      print_success(&format!("{}/{}", namespace, name));
      print_stat("MAC", &mac);
    }
    None => print_info(&format!("No MAC reserved for {}/{}", namespace, name)),
  }

  Ok(())
}
