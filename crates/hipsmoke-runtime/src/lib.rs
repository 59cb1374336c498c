//! Adapters for hipsmoke: the HIP runtime, loaded at runtime, and the host
//! platform probe.
//!
//! Both implement port traits from `hipsmoke-core`; the CLI binaries
//! construct them and inject them into the core procedures.
#![deny(unsafe_code)]

pub mod hip;
pub mod system;

pub use hip::{HipLoadError, HipRuntime, library_candidates};
pub use system::DefaultPlatformProbe;
