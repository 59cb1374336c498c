//! Device probe errors and their exit codes.

use thiserror::Error;

use crate::domain::OrdinalParseError;
use crate::ports::HipStatus;

/// A failed probe step.
///
/// `Display` is the line written to stderr; [`ProbeError::exit_code`] is
/// the process status that identifies the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The ordinal argument was not a base-10 integer.
    #[error("could not parse device ordinal from command line: {0}")]
    InvalidOrdinal(#[from] OrdinalParseError),

    /// The runtime library could not be loaded, so not even the version
    /// query could run.
    #[error("Error loading HIP runtime: {0}")]
    RuntimeUnavailable(String),

    #[error("Error getting runtime version: {0}")]
    RuntimeVersion(HipStatus),

    #[error("Error initializing HIP: {0}")]
    Init(HipStatus),

    #[error("Error getting device ordinal {ordinal}")]
    DeviceGet { ordinal: i32, status: HipStatus },

    #[error("Error getting device name")]
    DeviceName(HipStatus),

    #[error("Error getting device memory")]
    DeviceMemory(HipStatus),

    /// Writing to stdout failed.
    #[error("failed to write probe output: {0}")]
    Output(String),
}

impl ProbeError {
    /// Map the failing step to the process exit code.
    ///
    /// - 1: argument parse error
    /// - 2: runtime unavailable / version query
    /// - 3: initialization (only reached when a device was requested)
    /// - 4: device resolution
    /// - 5: device name
    /// - 6: device memory
    /// - 74: stdout write failure (`EX_IOERR`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidOrdinal(_) => 1,
            Self::RuntimeUnavailable(_) | Self::RuntimeVersion(_) => 2,
            Self::Init(_) => 3,
            Self::DeviceGet { .. } => 4,
            Self::DeviceName(_) => 5,
            Self::DeviceMemory(_) => 6,
            Self::Output(_) => 74,
        }
    }

    /// Runtime status behind the failure, if it came from a runtime call.
    pub const fn status(&self) -> Option<HipStatus> {
        match self {
            Self::RuntimeVersion(status)
            | Self::Init(status)
            | Self::DeviceGet { status, .. }
            | Self::DeviceName(status)
            | Self::DeviceMemory(status) => Some(*status),
            Self::InvalidOrdinal(_) | Self::RuntimeUnavailable(_) | Self::Output(_) => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}
