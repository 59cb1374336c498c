//! Raw HIP entry points resolved from the shared library.
#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int, c_uint};
use std::path::Path;

use libloading::Library;

use super::HipLoadError;

/// `hipError_t`.
pub type HipErrorT = c_int;
/// `hipDevice_t`.
pub type HipDeviceT = c_int;

pub const HIP_SUCCESS: HipErrorT = 0;

type RuntimeGetVersionFn = unsafe extern "C" fn(*mut c_int) -> HipErrorT;
type InitFn = unsafe extern "C" fn(c_uint) -> HipErrorT;
type DeviceGetFn = unsafe extern "C" fn(*mut HipDeviceT, c_int) -> HipErrorT;
type DeviceGetNameFn = unsafe extern "C" fn(*mut c_char, c_int, HipDeviceT) -> HipErrorT;
type DeviceTotalMemFn = unsafe extern "C" fn(*mut usize, HipDeviceT) -> HipErrorT;
type GetErrorNameFn = unsafe extern "C" fn(HipErrorT) -> *const c_char;

/// Function table copied out of the loaded library.
///
/// The pointers are only valid while `_library` is alive, which is why
/// they live in the same struct and are never handed out.
pub struct HipApi {
    runtime_get_version: RuntimeGetVersionFn,
    init: InitFn,
    device_get: DeviceGetFn,
    device_get_name: DeviceGetNameFn,
    device_total_mem: DeviceTotalMemFn,
    get_error_name: Option<GetErrorNameFn>,
    _library: Library,
}

macro_rules! symbol {
    ($lib:expr, $ty:ty, $name:literal) => {{
        // SAFETY: the type matches the HIP header declaration of `$name`.
        let sym = unsafe { $lib.get::<$ty>(concat!($name, "\0").as_bytes()) }.map_err(
            |source| HipLoadError::MissingSymbol {
                symbol: $name,
                source,
            },
        )?;
        *sym
    }};
}

impl HipApi {
    /// Open `path` and resolve every required symbol.
    pub fn open(path: &Path) -> Result<Self, HipLoadError> {
        // SAFETY: loading runs the library's initializers; the HIP runtime
        // has no initializers that depend on the host process state.
        let library = unsafe { Library::new(path) }.map_err(|source| HipLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let runtime_get_version = symbol!(library, RuntimeGetVersionFn, "hipRuntimeGetVersion");
        let init = symbol!(library, InitFn, "hipInit");
        let device_get = symbol!(library, DeviceGetFn, "hipDeviceGet");
        let device_get_name = symbol!(library, DeviceGetNameFn, "hipDeviceGetName");
        let device_total_mem = symbol!(library, DeviceTotalMemFn, "hipDeviceTotalMem");
        // SAFETY: as above; this one is optional and only used for log output.
        let get_error_name = unsafe { library.get::<GetErrorNameFn>(b"hipGetErrorName\0") }
            .ok()
            .map(|sym| *sym);

        Ok(Self {
            runtime_get_version,
            init,
            device_get,
            device_get_name,
            device_total_mem,
            get_error_name,
            _library: library,
        })
    }

    pub fn runtime_get_version(&self) -> (HipErrorT, c_int) {
        let mut version: c_int = 0;
        // SAFETY: `version` is a valid out-pointer for the duration of the call.
        let status = unsafe { (self.runtime_get_version)(&raw mut version) };
        (status, version)
    }

    pub fn init(&self, flags: c_uint) -> HipErrorT {
        // SAFETY: no pointers involved.
        unsafe { (self.init)(flags) }
    }

    pub fn device_get(&self, ordinal: c_int) -> (HipErrorT, HipDeviceT) {
        let mut device: HipDeviceT = 0;
        // SAFETY: `device` is a valid out-pointer for the duration of the call.
        let status = unsafe { (self.device_get)(&raw mut device, ordinal) };
        (status, device)
    }

    /// Fill `buf` with the device name, passing `len` as the length limit.
    ///
    /// `len` must be smaller than `buf.len()` so the final byte stays NUL.
    pub fn device_get_name(&self, buf: &mut [u8], len: c_int, device: HipDeviceT) -> HipErrorT {
        debug_assert!(usize::try_from(len).is_ok_and(|len| len < buf.len()));
        // SAFETY: the runtime writes at most `len` bytes, which fits in `buf`.
        unsafe { (self.device_get_name)(buf.as_mut_ptr().cast::<c_char>(), len, device) }
    }

    pub fn device_total_mem(&self, device: HipDeviceT) -> (HipErrorT, usize) {
        let mut bytes: usize = 0;
        // SAFETY: `bytes` is a valid out-pointer for the duration of the call.
        let status = unsafe { (self.device_total_mem)(&raw mut bytes, device) };
        (status, bytes)
    }

    pub fn error_name(&self, status: HipErrorT) -> Option<String> {
        let get_error_name = self.get_error_name?;
        // SAFETY: hipGetErrorName returns a pointer to a static string or null.
        let ptr = unsafe { get_error_name(status) };
        if ptr.is_null() {
            return None;
        }
        // SAFETY: non-null pointers from hipGetErrorName are NUL-terminated statics.
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}
