use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use finflow_actions::{ActionContext, ActionView, resolve};
use finflow_config::{AppConfig, ConfigExport, EXPORT_FILE_NAME, Role, TransactionType};
use finflow_engine::LifecycleModel;

/// Finflow - Derives financial lifecycle state graphs from configuration
#[derive(Parser)]
#[command(name = "finflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to a configuration file (JSON). Read from stdin when piped.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the derived lifecycle model
  Derive {
    /// Override the configured transaction type
    #[arg(long = "type")]
    transaction_type: Option<TransactionType>,
  },

  /// List the actions a role has at a state
  Actions {
    /// State name, e.g. "Awaiting Approval L2"
    #[arg(long)]
    state: String,

    /// Role name, e.g. "ApproverL2"
    #[arg(long)]
    role: Role,
  },

  /// Write the configuration export document
  Export {
    /// Output file (default: flowchart-config.json)
    #[arg(long, short)]
    output: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(command) => {
      let config = load_config(cli.config.as_ref())?.normalized();
      match command {
        Commands::Derive { transaction_type } => derive(config, transaction_type),
        Commands::Actions { state, role } => actions(&config, &state, role),
        Commands::Export { output } => export(config, output),
      }
    }
    None => {
      println!("finflow - use --help to see available commands");
      Ok(())
    }
  }
}

fn derive(config: AppConfig, transaction_type: Option<TransactionType>) -> Result<()> {
  let config = match transaction_type {
    Some(transaction_type) => config.with_transaction_type(transaction_type),
    None => config,
  };

  let model = LifecycleModel::derive(&config);
  println!("{}", serde_json::to_string_pretty(&model)?);

  Ok(())
}

fn actions(config: &AppConfig, state: &str, role: Role) -> Result<()> {
  let ctx = ActionContext::new(state, role, config, config.lifecycle);
  let views: Vec<ActionView> = resolve(state, role, config, config.lifecycle)
    .into_iter()
    .map(|action| ActionView::evaluate(action, &ctx))
    .collect();

  if views.is_empty() {
    eprintln!("No actions for {} at {}", role, state);
  }
  println!("{}", serde_json::to_string_pretty(&views)?);

  Ok(())
}

fn export(config: AppConfig, output: Option<PathBuf>) -> Result<()> {
  let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
  let document = ConfigExport::new(config)
    .to_json_pretty()
    .context("failed to serialize configuration export")?;

  fs::write(&output, document)
    .with_context(|| format!("failed to write export file: {}", output.display()))?;

  info!(path = %output.display(), "exported configuration");
  eprintln!("Exported configuration to {}", output.display());

  Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
  match path {
    Some(path) => {
      let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
      parse_config(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
    None => read_config_from_stdin(),
  }
}

/// Accepts either a bare configuration or an export document.
fn parse_config(content: &str) -> Result<AppConfig> {
  let value: serde_json::Value = serde_json::from_str(content)?;
  if value.get("config").is_some() && value.get("timestamp").is_some() {
    Ok(ConfigExport::from_json(content)?.config)
  } else {
    Ok(AppConfig::from_json(content)?)
  }
}

fn read_config_from_stdin() -> Result<AppConfig> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    // No stdin pipe, use the defaults
    Ok(AppConfig::default())
  } else {
    let mut input = String::new();
    io::stdin()
      .read_to_string(&mut input)
      .context("failed to read config from stdin")?;

    if input.trim().is_empty() {
      Ok(AppConfig::default())
    } else {
      parse_config(&input).context("failed to parse config JSON from stdin")
    }
  }
}
