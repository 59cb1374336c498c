//! What a successful probe run found.

use serde::Serialize;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Whole mebibytes in `bytes`, truncating.
pub const fn bytes_to_mib(bytes: u64) -> u64 {
    bytes / BYTES_PER_MIB
}

/// Device details collected by a full probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceReport {
    pub runtime_version: i32,
    pub ordinal: i32,
    pub device_name: String,
    pub total_memory_bytes: u64,
    pub total_memory_mib: u64,
}

impl DeviceReport {
    pub fn new(
        runtime_version: i32,
        ordinal: i32,
        device_name: String,
        total_memory_bytes: u64,
    ) -> Self {
        Self {
            runtime_version,
            ordinal,
            device_name,
            total_memory_bytes,
            total_memory_mib: bytes_to_mib(total_memory_bytes),
        }
    }
}

/// How a probe run ended when no step failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Only the runtime version was checked; no device was requested.
    Skipped {
        runtime_version: i32,
        ordinal: Option<i32>,
    },
    /// A device was resolved and queried.
    Tested(DeviceReport),
}

impl ProbeOutcome {
    /// Both outcomes are successes.
    pub const fn exit_code(&self) -> u8 {
        0
    }

    pub const fn report(&self) -> Option<&DeviceReport> {
        match self {
            Self::Tested(report) => Some(report),
            Self::Skipped { .. } => None,
        }
    }
}
