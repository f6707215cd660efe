mod config;
mod error;
mod models;
mod report;
mod run;
mod sample;
mod session;
mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let global = run::split_global_args(&args)?;
    init_logger(global.log_level);
    debug!("Log level set to {}", global.log_level);

    let mut config = config::Config::default();
    if let Some(dir) = global.export_dir {
        config = config.with_export_dir(dir);
    }

    let session = sample::sample_session(config).context("Failed to load sample ledger")?;
    run::as_cli(&global.rest, &session)
}

/// Log to stderr so report output on stdout stays clean. `RUST_LOG` wins
/// over `--log-level` when set.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
