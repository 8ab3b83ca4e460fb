mod get;
mod list;
mod save;

pub use get::cmd_get;
pub use list::cmd_list;
pub use save::cmd_save;

use std::path::Path;

use anyhow::{Context, Result};
use podmac_lib::MacStore;
use tracing::debug;

fn open_store(network: &str, data_dir: Option<&Path>) -> Result<MacStore> {
  let store =
    MacStore::new(network, data_dir).with_context(|| format!("Failed to open store for network '{}'", network))?;
  debug!(network, dir = %store.dir().display(), "using store");
  Ok(store)
}
