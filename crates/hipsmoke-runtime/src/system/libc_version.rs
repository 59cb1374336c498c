//! C library identification.

use hipsmoke_core::domain::LibcInfo;

/// Identify the C library the process runs against.
///
/// Only glibc carries a version; every other target reports
/// [`LibcInfo::Unidentified`].
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub fn detect_libc() -> LibcInfo {
    use hipsmoke_core::domain::GlibcVersion;
    use tracing::warn;

    let raw = gnu::libc_version();
    match raw.parse::<GlibcVersion>() {
        Ok(version) => LibcInfo::Glibc(version),
        Err(err) => {
            warn!(%err, "glibc reported an unparsable version");
            LibcInfo::Unidentified
        }
    }
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
pub fn detect_libc() -> LibcInfo {
    LibcInfo::Unidentified
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[allow(unsafe_code)]
mod gnu {
    use std::ffi::CStr;

    /// Version string of the running glibc, e.g. `"2.35"`.
    pub fn libc_version() -> String {
        // SAFETY: gnu_get_libc_version returns a pointer to a static,
        // NUL-terminated string owned by glibc.
        unsafe { CStr::from_ptr(libc::gnu_get_libc_version()) }
            .to_string_lossy()
            .into_owned()
    }
}

#[cfg(all(test, target_os = "linux", target_env = "gnu"))]
mod tests {
    use super::*;

    #[test]
    fn running_glibc_version_parses() {
        let raw = gnu::libc_version();
        assert!(raw.starts_with("2."), "unexpected glibc version {raw}");
        assert!(matches!(detect_libc(), LibcInfo::Glibc(_)));
    }
}
