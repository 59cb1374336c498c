//! Process bootstrap shared by both binaries.
//!
//! Loads `.env` and installs the tracing subscriber. Logs go to stderr only:
//! stdout carries the tools' output contract.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Load environment variables from `.env` if present.
pub fn load_env() {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Warning: failed to load .env: {err}");
        }
    }
}

/// Log filter used when `RUST_LOG` is unset.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize tracing on stderr.
///
/// Priority: `RUST_LOG` > `--verbose` (debug) > default (warn).
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

/// [`init_logging`], reporting a failure on stderr instead of aborting.
///
/// Call [`load_env`] before argument parsing so `.env` values reach clap's
/// `env` fallbacks; logging needs the parsed `--verbose` and comes after.
pub fn install_logging(verbose: bool) {
    if let Err(err) = init_logging(verbose) {
        eprintln!("Warning: {err:#}");
    }
}
