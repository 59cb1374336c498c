//! Argument parsers for both binaries.
//!
//! Each binary has its own top-level parser; the global `--verbose` flag
//! and `--version` string are shared.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, Parser};
use hipsmoke_core::domain::GlibcVersion;

/// Environment variable that can point the device probe at a specific
/// HIP runtime library.
pub const HIP_LIBRARY_ENV: &str = "HIPSMOKE_HIP_LIBRARY";

/// Smoke-test the HIP runtime and, given a device ordinal, one GPU.
#[derive(Debug, Parser)]
#[command(name = "hip-host-test")]
#[command(about = "Query HIP runtime version and, optionally, one device's name and memory")]
#[command(version = hipsmoke_build_info::LONG_VERSION)]
pub struct ProbeCli {
    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(flatten)]
    pub args: ProbeArgs,
}

/// Device probe arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct ProbeArgs {
    /// Zero-based device ordinal; absent or negative skips device queries
    #[arg(value_name = "DEVICE_ORDINAL", allow_negative_numbers = true)]
    pub device_ordinal: Option<String>,

    /// Load the HIP runtime from this path instead of the default search
    #[arg(long = "hip-library", env = HIP_LIBRARY_ENV, value_name = "PATH")]
    pub hip_library: Option<PathBuf>,

    /// Also print the device report as one JSON line
    #[arg(long)]
    pub json: bool,
}

/// Print the prebuilt release directory name for this host.
#[derive(Debug, Parser)]
#[command(name = "compute-release-directory")]
#[command(about = "Print the prebuilt binary variant directory for this host")]
#[command(version = hipsmoke_build_info::LONG_VERSION)]
pub struct SelectorCli {
    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(flatten)]
    pub args: SelectorArgs,
}

/// Overrides for the detected platform.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectorArgs {
    /// Treat the host as running this glibc version (MAJOR.MINOR)
    #[arg(long = "glibc-version", value_name = "MAJOR.MINOR")]
    pub glibc_version: Option<GlibcVersion>,

    /// Treat the host as this CPU architecture (e.g. x86_64)
    #[arg(long, value_name = "NAME")]
    pub arch: Option<String>,
}

/// Exit code for a clap error in either binary.
///
/// Help and version output are successes. Every other usage error is an
/// argument error (1): the probe keeps 2 for the runtime-version step and
/// the selector only ever exits 0 or 1.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}
