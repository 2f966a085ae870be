//! # fastfood
//!
//! Command-line front end for the FastFood order rules.
//!
//! ## Usage
//! ```bash
//! # Total of a JSON list of line items
//! fastfood total --file order.json
//! echo '[{"price": 10.5, "quantity": 2}]' | fastfood total
//!
//! # Check a status change
//! fastfood transition pending confirmed
//!
//! # Print the transition table
//! fastfood --format json statuses
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `FASTFOOD_LOG` - tracing filter, default `warn`
//! - `FASTFOOD_OUTPUT` - `text` or `json`, default `text`
//! - `FASTFOOD_CURRENCY` - symbol prefixed to totals in text mode

mod config;
mod render;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fastfood_core::{calculate_order_total, validate_status_transition};

use crate::config::{CliConfig, OutputFormat};
use crate::render::{Rendered, Renderer};

#[derive(Parser)]
#[command(name = "fastfood")]
#[command(about = "FastFood order rules: totals and status transitions", long_about = None)]
struct Cli {
    /// Report format; overrides FASTFOOD_OUTPUT
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the total of a JSON list of line items
    Total {
        /// Read the list from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Check whether an order may move from one status to another
    Transition {
        /// Status the order is in now
        current: String,

        /// Status the order should move to
        desired: String,
    },

    /// Print the transition table
    Statuses,
}

fn main() -> ExitCode {
    match run() {
        Ok(rendered) => emit(rendered),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Rendered> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.format).context("loading configuration")?;
    init_tracing(config.log_filter);

    debug!(format = %config.output, "configuration loaded");
    let renderer = Renderer::new(config.output, config.currency);

    let rendered = match cli.cmd {
        Commands::Total { file } => {
            let raw = read_input(file.as_ref())?;
            let items: Value =
                serde_json::from_str(&raw).context("line items are not valid JSON")?;
            let result = calculate_order_total(&items);
            if let Ok(total) = &result {
                info!(%total, "order total");
            }
            renderer.total(&result)
        }
        Commands::Transition { current, desired } => {
            let result = validate_status_transition(&current, &desired);
            renderer.transition(&current, &desired, &result)
        }
        Commands::Statuses => renderer.table(),
    };

    Ok(rendered)
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading line items from {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("reading line items from stdin")?;
            Ok(raw)
        }
    }
}

fn emit(rendered: Rendered) -> ExitCode {
    if let Some(out) = rendered.stdout {
        println!("{out}");
    }
    if let Some(err) = rendered.stderr {
        eprintln!("{err}");
    }
    ExitCode::from(rendered.exit)
}
