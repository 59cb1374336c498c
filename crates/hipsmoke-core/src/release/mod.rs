//! Release directory selection.
//!
//! Prebuilt binaries exist for a sparse set of glibc versions; we want the
//! one targeting the newest glibc the host can run. Today that is a single
//! baseline, so every compatible glibc 2.x (x >= 28) selects 2.28.

use std::fmt;

use thiserror::Error;

use crate::domain::{Arch, GlibcVersion, LibcInfo, PlatformInfo};

/// The only glibc major version with prebuilt artifacts.
pub const SUPPORTED_GLIBC_MAJOR: u32 = 2;

/// Oldest glibc minor version with prebuilt artifacts; newer minors are
/// normalized down to it.
pub const GLIBC_MINOR_BASELINE: u32 = 28;

/// The host cannot use any prebuilt variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unsupported standard c library")]
    UnsupportedLibc,

    #[error("unsupported glibc minor version {0}")]
    UnsupportedGlibcMinor(GlibcVersion),

    #[error("unsupported glibc version {0}")]
    UnsupportedGlibc(GlibcVersion),

    #[error("unsupported machine architecture")]
    UnsupportedArch(String),
}

impl SelectorError {
    /// Every unsupported-platform condition exits 1.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

/// A selected prebuilt variant, rendered as
/// `linux_glibc_<major>_<minor>_<arch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDirectory {
    pub glibc: GlibcVersion,
    pub arch: Arch,
}

impl fmt::Display for ReleaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linux_glibc_{}_{}_{}",
            self.glibc.major, self.glibc.minor, self.arch
        )
    }
}

/// Pick the prebuilt variant for `platform`.
///
/// Checks run libc, then glibc version, then architecture; the first
/// failing check is the one reported.
pub fn select_release_directory(
    platform: &PlatformInfo,
) -> Result<ReleaseDirectory, SelectorError> {
    let LibcInfo::Glibc(detected) = platform.libc else {
        return Err(SelectorError::UnsupportedLibc);
    };

    let glibc = select_glibc(detected)?;

    let arch = match &platform.arch {
        Arch::X86_64 => Arch::X86_64,
        Arch::Other(name) => return Err(SelectorError::UnsupportedArch(name.clone())),
    };

    Ok(ReleaseDirectory { glibc, arch })
}

fn select_glibc(detected: GlibcVersion) -> Result<GlibcVersion, SelectorError> {
    if detected.major != SUPPORTED_GLIBC_MAJOR {
        return Err(SelectorError::UnsupportedGlibc(detected));
    }
    if detected.minor < GLIBC_MINOR_BASELINE {
        return Err(SelectorError::UnsupportedGlibcMinor(detected));
    }
    Ok(GlibcVersion::new(SUPPORTED_GLIBC_MAJOR, GLIBC_MINOR_BASELINE))
}
