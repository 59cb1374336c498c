//! Core domain types, port traits, and decision procedures for hipsmoke.
//!
//! Two independent tools share this crate:
//!
//! - the device probe ([`probe`]), a smoke test that walks a GPU runtime
//!   through version, initialization, and device queries, mapping each
//!   failing step to its own exit code;
//! - the release directory selector ([`release`]), which turns the host's
//!   C library and architecture into the name of a prebuilt binary variant.
//!
//! Core holds no FFI. Active probing is implemented in `hipsmoke-runtime`
//! behind the traits in [`ports`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod probe;
pub mod release;

pub use domain::{
    Arch, DeviceOrdinal, GlibcVersion, GlibcVersionParseError, LibcInfo, OrdinalParseError,
    PlatformInfo,
};
pub use ports::{DeviceHandle, GpuRuntimePort, HipStatus, PlatformProbePort, RuntimeResult};
pub use probe::{
    DEVICE_NAME_BUFFER_LEN, DeviceReport, ProbeError, ProbeOutcome, bytes_to_mib, run_device_probe,
};
pub use release::{
    GLIBC_MINOR_BASELINE, ReleaseDirectory, SUPPORTED_GLIBC_MAJOR, SelectorError,
    select_release_directory,
};

#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tracing_subscriber as _;
