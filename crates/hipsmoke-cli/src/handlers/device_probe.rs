//! `hip-host-test` handler.

use std::io::Write;

use hipsmoke_core::{DeviceOrdinal, GpuRuntimePort, ProbeError, ProbeOutcome, run_device_probe};
use hipsmoke_runtime::HipRuntime;
use tracing::debug;

use crate::error::CliError;
use crate::parser::ProbeArgs;

/// Parse the ordinal, load the runtime, and run the probe.
///
/// The ordinal is parsed before the runtime is loaded, so a bad argument
/// exits 1 even on a host without HIP.
pub fn execute(args: &ProbeArgs, out: &mut dyn Write) -> Result<ProbeOutcome, CliError> {
    let ordinal =
        DeviceOrdinal::parse_arg(args.device_ordinal.as_deref()).map_err(ProbeError::from)?;
    let runtime = HipRuntime::load(args.hip_library.as_deref())?;
    debug!(path = %runtime.path().display(), ?ordinal, "starting device probe");

    run(&runtime, ordinal, args.json, out).inspect_err(|err| {
        if let CliError::Probe(probe_err) = err
            && let Some(status) = probe_err.status()
        {
            debug!(
                code = status.code(),
                name = runtime.error_name(status).as_deref().unwrap_or("unknown"),
                "HIP call failed"
            );
        }
    })
}

/// Run the probe against any runtime, then print the JSON report if asked.
pub fn run(
    runtime: &dyn GpuRuntimePort,
    ordinal: DeviceOrdinal,
    json: bool,
    out: &mut dyn Write,
) -> Result<ProbeOutcome, CliError> {
    let outcome = run_device_probe(runtime, ordinal, out)?;
    if json && let Some(report) = outcome.report() {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    }
    Ok(outcome)
}
