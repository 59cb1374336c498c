//! GPU runtime port.
//!
//! Mirrors the handful of HIP entry points the device probe needs. Every
//! call either succeeds or yields the raw status code the runtime returned;
//! the probe decides what a failure means.

use thiserror::Error;

/// A non-success status code returned by the GPU runtime.
///
/// Displays as the bare number, the way the runtime's own headers print
/// an error enum. [`HipStatus::name`] gives the symbolic name when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{0}")]
pub struct HipStatus(pub i32);

impl HipStatus {
    /// Raw status code.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Symbolic name for the common status codes.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("hipErrorInvalidValue"),
            2 => Some("hipErrorOutOfMemory"),
            3 => Some("hipErrorNotInitialized"),
            4 => Some("hipErrorDeinitialized"),
            35 => Some("hipErrorInsufficientDriver"),
            100 => Some("hipErrorNoDevice"),
            101 => Some("hipErrorInvalidDevice"),
            400 => Some("hipErrorInvalidHandle"),
            500 => Some("hipErrorNotFound"),
            709 => Some("hipErrorContextIsDestroyed"),
            999 => Some("hipErrorUnknown"),
            _ => None,
        }
    }
}

/// Result type for runtime calls.
pub type RuntimeResult<T> = Result<T, HipStatus>;

/// Opaque device handle, valid only for the lifetime of the runtime that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHandle(pub i32);

/// Port for the GPU compute runtime.
///
/// # Example
///
/// ```ignore
/// use hipsmoke_core::ports::GpuRuntimePort;
///
/// fn report(runtime: &dyn GpuRuntimePort) {
///     if let Ok(version) = runtime.runtime_version() {
///         println!("runtime {version}");
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait GpuRuntimePort {
    /// Runtime version number (`hipRuntimeGetVersion`).
    fn runtime_version(&self) -> RuntimeResult<i32>;

    /// Initialize the runtime (`hipInit`). `flags` must currently be 0.
    fn init(&self, flags: u32) -> RuntimeResult<()>;

    /// Resolve the device at `ordinal` (`hipDeviceGet`).
    fn device_get(&self, ordinal: i32) -> RuntimeResult<DeviceHandle>;

    /// Device name (`hipDeviceGetName`), asking the runtime for at most
    /// `max_len` bytes.
    fn device_name(&self, device: DeviceHandle, max_len: usize) -> RuntimeResult<String>;

    /// Total device memory in bytes (`hipDeviceTotalMem`).
    fn device_total_mem(&self, device: DeviceHandle) -> RuntimeResult<u64>;
}
