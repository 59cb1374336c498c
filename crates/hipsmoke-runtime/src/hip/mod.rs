//! HIP runtime adapter.
//!
//! Implements `GpuRuntimePort` by loading the HIP shared library at
//! runtime. Loading happens once in [`HipRuntime::load`]; a library that is
//! missing or lacks a required entry point is a [`HipLoadError`], distinct
//! from the status codes the loaded runtime returns.

mod ffi;

use std::ffi::{CStr, c_int};
use std::path::{Path, PathBuf};

use hipsmoke_core::ports::{DeviceHandle, GpuRuntimePort, HipStatus, RuntimeResult};
use thiserror::Error;
use tracing::{debug, info};

use ffi::{HIP_SUCCESS, HipApi, HipErrorT};

/// Environment variable naming a ROCm install prefix to search first.
pub const ROCM_PATH_ENV: &str = "ROCM_PATH";

/// Library names tried, in order, when no explicit path is given.
#[cfg(target_os = "windows")]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["amdhip64.dll", "amdhip64_7.dll", "amdhip64_6.dll"];
#[cfg(not(target_os = "windows"))]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libamdhip64.so", "libamdhip64.so.7", "libamdhip64.so.6"];

#[cfg(target_os = "windows")]
const ROCM_LIBRARY_SUBDIR: &str = "bin";
#[cfg(not(target_os = "windows"))]
const ROCM_LIBRARY_SUBDIR: &str = "lib";

/// Errors that can occur while loading the HIP runtime.
#[derive(Debug, Error)]
pub enum HipLoadError {
    /// No candidate library could be opened.
    #[error("HIP runtime library not found (tried: {})", .tried.join(", "))]
    NotFound { tried: Vec<String> },

    /// An explicitly requested library could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The library opened but lacks a required entry point.
    #[error("HIP runtime is missing symbol {symbol}: {source}")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}

/// Candidate library paths for the default search.
///
/// With a ROCm prefix, the prefixed paths come first; the bare names are
/// always tried afterwards so the platform loader's search path applies.
pub fn library_candidates(rocm_path: Option<&Path>) -> Vec<PathBuf> {
    let prefixed = rocm_path.into_iter().flat_map(|root| {
        DEFAULT_LIBRARY_NAMES
            .iter()
            .map(move |name| root.join(ROCM_LIBRARY_SUBDIR).join(name))
    });
    prefixed
        .chain(DEFAULT_LIBRARY_NAMES.iter().map(PathBuf::from))
        .collect()
}

/// The HIP runtime, loaded from a shared library.
pub struct HipRuntime {
    api: HipApi,
    path: PathBuf,
}

impl HipRuntime {
    /// Load the runtime from `explicit` if given, otherwise from the first
    /// default candidate that opens.
    pub fn load(explicit: Option<&Path>) -> Result<Self, HipLoadError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let rocm_path = std::env::var_os(ROCM_PATH_ENV).map(PathBuf::from);
        let candidates = library_candidates(rocm_path.as_deref());
        let mut tried = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match Self::load_from(&candidate) {
                Ok(runtime) => return Ok(runtime),
                // A library that opens but is missing symbols is not worth
                // skipping past; report it.
                Err(err @ HipLoadError::MissingSymbol { .. }) => return Err(err),
                Err(err) => {
                    debug!(error = %err, "HIP runtime candidate rejected");
                    tried.push(candidate.display().to_string());
                }
            }
        }
        Err(HipLoadError::NotFound { tried })
    }

    /// Load the runtime from exactly `path`.
    pub fn load_from(path: &Path) -> Result<Self, HipLoadError> {
        let api = HipApi::open(path)?;
        info!(path = %path.display(), "loaded HIP runtime");
        Ok(Self {
            api,
            path: path.to_path_buf(),
        })
    }

    /// Path the runtime was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Symbolic name of `status` as reported by the runtime itself, falling
    /// back to the built-in table.
    pub fn error_name(&self, status: HipStatus) -> Option<String> {
        self.api
            .error_name(status.code())
            .or_else(|| status.name().map(str::to_string))
    }
}

fn check(status: HipErrorT) -> RuntimeResult<()> {
    if status == HIP_SUCCESS {
        Ok(())
    } else {
        Err(HipStatus(status))
    }
}

/// Extract the NUL-terminated name from a buffer the runtime filled in.
fn name_from_buffer(buf: &[u8]) -> String {
    CStr::from_bytes_until_nul(buf).map_or_else(
        |_| String::from_utf8_lossy(buf).into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

impl GpuRuntimePort for HipRuntime {
    fn runtime_version(&self) -> RuntimeResult<i32> {
        let (status, version) = self.api.runtime_get_version();
        check(status).map(|()| version)
    }

    fn init(&self, flags: u32) -> RuntimeResult<()> {
        check(self.api.init(flags))
    }

    fn device_get(&self, ordinal: i32) -> RuntimeResult<DeviceHandle> {
        let (status, device) = self.api.device_get(ordinal);
        check(status).map(|()| DeviceHandle(device))
    }

    fn device_name(&self, device: DeviceHandle, max_len: usize) -> RuntimeResult<String> {
        // One spare byte past `len` keeps the buffer NUL-terminated.
        let mut buf = vec![0_u8; max_len + 1];
        let len = c_int::try_from(max_len).unwrap_or(c_int::MAX);
        check(self.api.device_get_name(&mut buf, len, device.0))?;
        Ok(name_from_buffer(&buf))
    }

    fn device_total_mem(&self, device: DeviceHandle) -> RuntimeResult<u64> {
        let (status, bytes) = self.api.device_total_mem(device.0);
        check(status).map(|()| bytes as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn candidates_without_rocm_path_are_bare_names() {
        let candidates = library_candidates(None);
        assert_eq!(candidates.len(), DEFAULT_LIBRARY_NAMES.len());
        assert_eq!(candidates[0], PathBuf::from(DEFAULT_LIBRARY_NAMES[0]));
    }

    #[test]
    fn rocm_path_candidates_come_first() {
        let root = Path::new("/opt/rocm");
        let candidates = library_candidates(Some(root));
        assert_eq!(candidates.len(), DEFAULT_LIBRARY_NAMES.len() * 2);
        assert!(candidates[0].starts_with("/opt/rocm"));
        assert_eq!(
            candidates.last().unwrap(),
            &PathBuf::from(DEFAULT_LIBRARY_NAMES[DEFAULT_LIBRARY_NAMES.len() - 1])
        );
    }

    #[test]
    fn missing_library_is_an_open_error() {
        let err = HipRuntime::load(Some(Path::new("/nonexistent/libamdhip64.so")))
            .err()
            .expect("load should fail");
        assert!(matches!(err, HipLoadError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/libamdhip64.so"));
    }

    #[test]
    fn garbage_file_is_an_open_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a shared object").unwrap();

        let err = HipRuntime::load_from(file.path()).err().expect("load should fail");
        assert!(matches!(err, HipLoadError::Open { .. }));
    }

    #[test]
    fn name_is_cut_at_first_nul() {
        let mut buf = [0_u8; 80];
        buf[..6].copy_from_slice(b"gfx942");
        assert_eq!(name_from_buffer(&buf), "gfx942");
    }

    #[test]
    fn name_without_nul_is_taken_whole() {
        assert_eq!(name_from_buffer(b"gfx1100"), "gfx1100");
    }

    #[test]
    fn not_found_lists_every_candidate() {
        let err = HipLoadError::NotFound {
            tried: vec!["a.so".to_string(), "b.so".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "HIP runtime library not found (tried: a.so, b.so)"
        );
    }
}
