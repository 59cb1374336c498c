//! Build/version metadata shared by the hipsmoke binaries.
//!
//! The git SHA is emitted by `build.rs` (via `vergen-gix`, or the
//! `HIPSMOKE_BUILD_SHA_SHORT` override) and is `"unknown"` when neither is
//! available.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Short git SHA of the build, or `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if the git SHA looks like a 7-character hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string used by `--version` on every binary.
///
/// `0.3.0 (a1b2c3d)` when git data is available, plain `0.3.0` otherwise.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(is_short_hex("ABCDEF0"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3d4"));
    }

    #[test]
    fn long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
    }
}
