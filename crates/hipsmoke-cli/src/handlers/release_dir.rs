//! `compute-release-directory` handler.

use std::io::Write;

use hipsmoke_core::{
    Arch, LibcInfo, PlatformInfo, PlatformProbePort, ReleaseDirectory, select_release_directory,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::SelectorArgs;

/// Detected platform with any command-line overrides applied.
pub fn resolve_platform(probe: &dyn PlatformProbePort, args: &SelectorArgs) -> PlatformInfo {
    let mut platform = probe.detect();
    if let Some(version) = args.glibc_version {
        debug!(%version, "overriding detected glibc version");
        platform.libc = LibcInfo::Glibc(version);
    }
    if let Some(name) = args.arch.as_deref() {
        debug!(arch = name, "overriding detected architecture");
        platform.arch = Arch::from_name(name);
    }
    platform
}

/// Select the release directory and print it as a single line.
pub fn execute(
    probe: &dyn PlatformProbePort,
    args: &SelectorArgs,
    out: &mut dyn Write,
) -> Result<ReleaseDirectory, CliError> {
    let platform = resolve_platform(probe, args);
    let directory = select_release_directory(&platform)?;
    writeln!(out, "{directory}")?;
    Ok(directory)
}
