//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the core expects from the GPU runtime and the host
//! platform. They carry no FFI or `cfg` detection; implementations live in
//! `hipsmoke-runtime`.

pub mod gpu_runtime;
pub mod platform_probe;

pub use gpu_runtime::{DeviceHandle, GpuRuntimePort, HipStatus, RuntimeResult};
pub use platform_probe::PlatformProbePort;

#[cfg(test)]
pub use gpu_runtime::MockGpuRuntimePort;
#[cfg(test)]
pub use platform_probe::MockPlatformProbePort;
