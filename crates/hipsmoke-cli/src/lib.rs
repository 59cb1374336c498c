//! Command-line front ends for hipsmoke.
//!
//! Two binaries live in this crate:
//!
//! - `hip-host-test [DEVICE_ORDINAL]` smoke-tests the HIP runtime;
//! - `compute-release-directory` prints the prebuilt variant directory for
//!   the host.
//!
//! Parsing, bootstrap, and handlers are in the library so they can be
//! tested without spawning processes.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;

pub use error::CliError;
pub use parser::{ProbeArgs, ProbeCli, SelectorArgs, SelectorCli, usage_exit_code};
