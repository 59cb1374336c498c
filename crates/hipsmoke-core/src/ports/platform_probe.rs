//! Platform probe port.
//!
//! Core owns the trait and the [`PlatformInfo`] type; the runtime crate
//! fills it in from target cfg and the C library it is running against.

use crate::domain::PlatformInfo;

/// Port for identifying the host C library and CPU architecture.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProbePort {
    /// Detect the host platform.
    fn detect(&self) -> PlatformInfo;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Arch, GlibcVersion, LibcInfo};

    #[test]
    fn test_mock_probe() {
        let mut probe = MockPlatformProbePort::new();
        probe.expect_detect().times(1).returning(|| PlatformInfo {
            libc: LibcInfo::Glibc(GlibcVersion::new(2, 35)),
            arch: Arch::X86_64,
        });

        let info = probe.detect();
        assert_eq!(info.arch, Arch::X86_64);
        assert!(matches!(info.libc, LibcInfo::Glibc(v) if v.minor == 35));
    }
}
