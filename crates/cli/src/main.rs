mod cmd;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, print_error};

/// podmac - inspect and update pod MAC reservations
#[derive(Parser)]
#[command(name = "podmac")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Network whose reservations to operate on
  #[arg(short, long)]
  network: String,

  /// Directory holding one subdirectory per network
  /// (default: $PODMAC_DATA_DIR, then /var/lib/cni/networks)
  #[arg(long)]
  data_dir: Option<PathBuf>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
  output: OutputFormat,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the MAC reserved for a pod
  Get {
    /// Pod namespace
    namespace: String,
    /// Pod name
    name: String,
  },

  /// Reserve a MAC for a pod
  Save {
    /// MAC address, e.g. 0a:58:0a:f4:00:07
    mac: String,
    /// Pod namespace
    namespace: String,
    /// Pod name
    name: String,
    /// The MAC is already tracked elsewhere; leave the store untouched
    #[arg(long)]
    existing: bool,
  },

  /// List every reservation
  List,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  if let Err(err) = run(cli) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let data_dir = config::resolve_data_dir(cli.data_dir);

  match cli.command {
    Commands::Get { namespace, name } => {
      cmd::cmd_get(&cli.network, data_dir.as_deref(), &namespace, &name, cli.output)
    }
    Commands::Save {
      mac,
      namespace,
      name,
      existing,
    } => cmd::cmd_save(
      &cli.network,
      data_dir.as_deref(),
      &mac,
      &namespace,
      &name,
      existing,
      cli.output,
    ),
    Commands::List => cmd::cmd_list(&cli.network, data_dir.as_deref(), cli.output),
  }
}
