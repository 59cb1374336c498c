//! CLI-specific error types and mappings.
//!
//! Both binaries report failures as a single stderr line and a process
//! exit code; this module maps core errors onto that contract.

use hipsmoke_core::{ProbeError, SelectorError};
use hipsmoke_runtime::HipLoadError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A device probe step failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// The host has no matching prebuilt variant.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// Writing to stdout failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to the binary's exit code.
    ///
    /// Probe and selector errors carry their own codes; output failures use
    /// 74 (`EX_IOERR`, see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Probe(err) => err.exit_code(),
            Self::Selector(err) => err.exit_code(),
            Self::Io(_) => 74,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<HipLoadError> for CliError {
    fn from(err: HipLoadError) -> Self {
        Self::Probe(ProbeError::RuntimeUnavailable(err.to_string()))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
