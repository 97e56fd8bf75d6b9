//! # gilded-rose
//!
//! Ages the inn's stock night by night and prints what is left.
//!
//! ## Usage
//! ```bash
//! gilded-rose --days 30
//! gilded-rose --config ./gilded-rose.toml --json
//! gilded-rose --print-config > gilded-rose.toml
//! ```
//!
//! ## Environment
//! - `RUST_LOG` - log filter (logs go to stderr)
//! - `GILDED_DAYS`, `GILDED_CURRENCY` - config overrides

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gilded_nightly::NightlyConfig;

#[derive(Parser)]
#[command(name = "gilded-rose")]
#[command(about = "Simulate the Gilded Rose inventory night by night.")]
struct Cli {
    /// Number of nights to simulate (overrides config and GILDED_DAYS)
    #[arg(short, long)]
    days: Option<u32>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = NightlyConfig::load(cli.config)?;
    if let Some(days) = cli.days {
        config.run.days = days;
        config.validate()?;
    }

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    info!(
        days = config.run.days,
        items = config.inventory.len(),
        orders = config.orders.len(),
        currency = %config.run.currency_code,
        "Gilded Rose opening"
    );

    let report = gilded_nightly::execute(&config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gilded_nightly=trace` - Trace the driver only
/// - Default: INFO, DEBUG for the driver
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gilded_nightly=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
