//! # gilded-nightly: The Nightly Driver
//!
//! Everything the `gilded-rose` binary does, as a library so it can be tested
//! without spawning a process.
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  config  │──►│  inventory   │──►│     run      │──►│    report    │
//! │ TOML/env │   │ seed_catalog │   │ advance_day  │   │ text / JSON  │
//! └──────────┘   └──────────────┘   │ fill_cart    │   └──────────────┘
//!                                   └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod report;
pub mod run;

pub use config::{NightlyConfig, OrderSpec, RunSettings};
pub use error::{NightlyError, NightlyResult};
pub use inventory::{classic_inventory, seed_catalog, ItemSpec};
pub use report::NightlyReport;
pub use run::{DaySnapshot, ItemSnapshot, NightlyRun};

/// Runs a validated configuration end to end and builds the report.
pub fn execute(config: &NightlyConfig) -> NightlyResult<NightlyReport> {
    let mut run = NightlyRun::new(seed_catalog(&config.inventory));
    run.run_for(config.run.days);

    let cart = run.fill_cart(&config.orders, config.currency())?;

    Ok(NightlyReport::new(config.currency(), run.into_history()).with_cart(&cart))
}
