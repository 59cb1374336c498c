//! Host platform identification types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A glibc `major.minor` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlibcVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlibcVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for GlibcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A glibc version string was not of the form `MAJOR.MINOR[.PATCH]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid glibc version {0:?}: expected MAJOR.MINOR")]
pub struct GlibcVersionParseError(pub String);

impl FromStr for GlibcVersion {
    type Err = GlibcVersionParseError;

    /// Parses the strings `gnu_get_libc_version()` returns (`"2.35"`), and
    /// tolerates a trailing patch component (`"2.17.1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GlibcVersionParseError(s.to_string());
        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(err)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(err)?;
        if parts.next().is_some_and(|p| p.parse::<u32>().is_err()) {
            return Err(err());
        }
        Ok(Self { major, minor })
    }
}

/// Which standard C library the host was identified as using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibcInfo {
    Glibc(GlibcVersion),
    /// musl, msvc, or anything else without a glibc version.
    Unidentified,
}

/// CPU architecture of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Other(String),
}

impl Arch {
    /// Map a target architecture name (`std::env::consts::ARCH` spelling).
    pub fn from_name(name: &str) -> Self {
        match name {
            "x86_64" => Self::X86_64,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the release directory selector looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub libc: LibcInfo,
    pub arch: Arch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_glibc_versions() {
        assert_eq!("2.35".parse::<GlibcVersion>(), Ok(GlibcVersion::new(2, 35)));
        assert_eq!("2.28".parse::<GlibcVersion>(), Ok(GlibcVersion::new(2, 28)));
        assert_eq!("2.17.1".parse::<GlibcVersion>(), Ok(GlibcVersion::new(2, 17)));
        assert_eq!(" 3.0\n".parse::<GlibcVersion>(), Ok(GlibcVersion::new(3, 0)));
    }

    #[test]
    fn rejects_malformed_glibc_versions() {
        for input in ["", "2", "2.", ".28", "two.28", "2.28.x", "2-28"] {
            assert!(
                input.parse::<GlibcVersion>().is_err(),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn glibc_version_orders_by_major_then_minor() {
        assert!(GlibcVersion::new(2, 28) < GlibcVersion::new(2, 30));
        assert!(GlibcVersion::new(2, 99) < GlibcVersion::new(3, 0));
        assert_eq!(GlibcVersion::new(2, 31).to_string(), "2.31");
    }

    #[test]
    fn arch_names_round_trip_through_display() {
        assert_eq!(Arch::from_name("x86_64"), Arch::X86_64);
        assert_eq!(Arch::from_name("aarch64").to_string(), "aarch64");
    }
}
