//! Device probe: a fail-fast walk through the GPU runtime.
//!
//! Steps run in a fixed order and the first failure ends the run with the
//! exit code of that step, so a smoke test can tell "runtime not usable",
//! "no device", and "device query failed" apart by status alone.
//!
//! Initialization is best-effort when no device was requested (the run only
//! checks that the runtime links and reports a version) and fatal when one
//! was.

mod error;
mod report;

use std::io::Write;

use tracing::{debug, warn};

use crate::domain::DeviceOrdinal;
use crate::ports::GpuRuntimePort;

pub use error::ProbeError;
pub use report::{DeviceReport, ProbeOutcome, bytes_to_mib};

/// Size of the device name buffer handed to the runtime. The runtime is
/// asked for one byte less so the name always stays NUL-terminated.
pub const DEVICE_NAME_BUFFER_LEN: usize = 80;

/// Run the probe against `runtime`, writing progress lines to `out`.
///
/// Lines already written stay written when a later step fails; the caller
/// prints the returned error and exits with [`ProbeError::exit_code`].
pub fn run_device_probe(
    runtime: &dyn GpuRuntimePort,
    ordinal: DeviceOrdinal,
    out: &mut dyn Write,
) -> Result<ProbeOutcome, ProbeError> {
    let runtime_version = runtime
        .runtime_version()
        .map_err(ProbeError::RuntimeVersion)?;
    writeln!(out, "HIP runtime version: {runtime_version}")?;

    let init = runtime.init(0);

    let Some(device_ordinal) = ordinal.requested() else {
        if let Err(status) = init {
            warn!(
                code = status.code(),
                name = status.name().unwrap_or("unknown"),
                "HIP initialization failed; ignored because no device was requested"
            );
        }
        writeln!(out, "Not testing on GPU device (no device ordinal passed)")?;
        return Ok(ProbeOutcome::Skipped {
            runtime_version,
            ordinal: ordinal.raw(),
        });
    };

    init.map_err(ProbeError::Init)?;
    debug!(ordinal = device_ordinal, "HIP initialized");

    let device = runtime
        .device_get(device_ordinal)
        .map_err(|status| ProbeError::DeviceGet {
            ordinal: device_ordinal,
            status,
        })?;

    let device_name = runtime
        .device_name(device, DEVICE_NAME_BUFFER_LEN - 1)
        .map_err(ProbeError::DeviceName)?;
    writeln!(out, "Device name: {device_name}")?;

    let total_memory = runtime
        .device_total_mem(device)
        .map_err(ProbeError::DeviceMemory)?;
    let report = DeviceReport::new(runtime_version, device_ordinal, device_name, total_memory);
    writeln!(out, "Device memory: {} MiB", report.total_memory_mib)?;

    Ok(ProbeOutcome::Tested(report))
}
