//! Tip Time console
//!
//! Terminal stand-in for the tip form's UI. Reads one input event per line
//! from stdin and prints the recomputed tip after each.

mod session;

use std::io;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiptime_core::{LocaleFormatter, TipForm};
use tiptime_shared::{AppConfig, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; stdout belongs to the form
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(&config) {
        error!(code = err.error_code(), %err, "Tip form stopped");
        return Err(err.into());
    }

    Ok(())
}

fn run(config: &AppConfig) -> AppResult<()> {
    let input = io::stdin().lock();
    let output = io::stdout().lock();

    match config.locale_override()? {
        Some(locale) => {
            info!(%locale, "Using configured locale");
            session::run(input, output, TipForm::new(LocaleFormatter::new(locale)))
        }
        None => {
            info!("Using host locale");
            session::run(input, output, TipForm::for_host())
        }
    }
}
