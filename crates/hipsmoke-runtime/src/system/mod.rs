//! Platform probe implementation for hipsmoke-runtime.
//!
//! `DefaultPlatformProbe` implements `PlatformProbePort` from hipsmoke-core.
//! The libc family and CPU architecture come from the target the binary was
//! built for; the glibc version is asked of the glibc the process actually
//! runs against.

mod libc_version;

use hipsmoke_core::domain::{Arch, PlatformInfo};
use hipsmoke_core::ports::PlatformProbePort;
use tracing::debug;

pub use libc_version::detect_libc;

/// Default implementation of `PlatformProbePort`.
///
/// # Example
///
/// ```ignore
/// use hipsmoke_runtime::DefaultPlatformProbe;
/// use hipsmoke_core::ports::PlatformProbePort;
///
/// let platform = DefaultPlatformProbe::new().detect();
/// ```
pub struct DefaultPlatformProbe;

impl DefaultPlatformProbe {
    /// Create a new default platform probe.
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DefaultPlatformProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Architecture of the build target.
pub fn detect_arch() -> Arch {
    Arch::from_name(std::env::consts::ARCH)
}

impl PlatformProbePort for DefaultPlatformProbe {
    fn detect(&self) -> PlatformInfo {
        let info = PlatformInfo {
            libc: detect_libc(),
            arch: detect_arch(),
        };
        debug!(?info, "detected host platform");
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hipsmoke_core::domain::LibcInfo;

    #[test]
    fn arch_matches_target() {
        #[cfg(target_arch = "x86_64")]
        assert_eq!(detect_arch(), Arch::X86_64);
        #[cfg(not(target_arch = "x86_64"))]
        assert!(matches!(detect_arch(), Arch::Other(_)));
    }

    #[test]
    fn libc_family_matches_target_env() {
        let info = DefaultPlatformProbe::new().detect();
        #[cfg(all(target_os = "linux", target_env = "gnu"))]
        assert!(matches!(info.libc, LibcInfo::Glibc(v) if v.major >= 2));
        #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
        assert_eq!(info.libc, LibcInfo::Unidentified);
    }
}
