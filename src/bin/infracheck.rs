//! Command-line front end for the resource selection validator.
//!
//! Every subcommand prints JSON on stdout. `validate` and `lint` exit with
//! status 1 when they find problems so shell callers can gate on them;
//! operational failures (unreadable files, bad JSON) also exit 1 with the
//! error chain on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use infracheck::runtime::{log_filter, resolve_catalog};
use infracheck::{NetworkConfig, Validator, lint_catalog, load_network_config};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "infracheck", version, about = "Validate infrastructure resource selections")]
struct Cli {
    /// Catalog JSON file (default: $INFRACHECK_CATALOG, then the built-in catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the active catalog.
    Catalog,

    /// Report catalog authoring problems.
    Lint,

    /// List resources that are supported and fully configured.
    Available {
        /// JSON object of decrypted credentials.
        #[arg(long)]
        config: PathBuf,

        /// Print full resource definitions instead of ids.
        #[arg(long)]
        full: bool,
    },

    /// Validate a selection of resource ids.
    Validate {
        /// JSON object of decrypted credentials.
        #[arg(long)]
        config: PathBuf,

        /// Selected resource ids.
        resources: Vec<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter()))
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one subcommand; `Ok(false)` means it completed but found problems.
fn run(cli: Cli) -> Result<bool> {
    let catalog = Arc::new(resolve_catalog(cli.catalog.as_deref())?);

    match cli.command {
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&*catalog)?);
            Ok(true)
        }
        Command::Lint => {
            let problems = lint_catalog(&catalog);
            println!("{}", serde_json::to_string_pretty(&json!({ "problems": problems }))?);
            Ok(problems.is_empty())
        }
        Command::Available { config, full } => {
            let config = load_network_config(&config)?;
            let validator = Validator::new(catalog, &config);
            let output = if full {
                serde_json::to_string_pretty(&validator.available_resources())?
            } else {
                serde_json::to_string_pretty(&validator.available_resource_ids())?
            };
            println!("{output}");
            Ok(true)
        }
        Command::Validate { config, resources } => {
            let config: NetworkConfig = load_network_config(&config)?;
            let result = Validator::new(catalog, &config).validate(&resources);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(result.success)
        }
    }
}
