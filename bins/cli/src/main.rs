//! bigmoney command-line front end.
//!
//! Loads settings (config files, `.env`, `BIGMONEY__*` variables), then runs
//! one command against them.
//!
//! Usage:
//!   bigmoney convert <amount> <from> [to]
//!   bigmoney allocate <amount> <currency> <ratio>...
//!   bigmoney split <amount> <currency> <count>
//!   bigmoney format <amount> <currency> [template]
//!   bigmoney rates

mod command;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bigmoney_core::MoneyContext;
use bigmoney_shared::AppConfig;

use crate::command::Command;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; output goes to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bigmoney=info,bigmoney_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("failed to load settings")?;
    let context = MoneyContext::from_config(&config).context("invalid settings")?;
    info!(
        base = %context.base(),
        currencies = context.rates().currencies().len(),
        "settings loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    debug!(?command, "running command");

    for line in command.run(&context)? {
        println!("{line}");
    }

    Ok(())
}
