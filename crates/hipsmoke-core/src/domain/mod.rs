//! Domain types.
//!
//! Everything here is transient: values parsed from the command line or
//! read from the host, consumed once, and dropped.

mod ordinal;
mod platform;

pub use ordinal::{DeviceOrdinal, OrdinalParseError};
pub use platform::{Arch, GlibcVersion, GlibcVersionParseError, LibcInfo, PlatformInfo};
