//! Device ordinal parsed from the command line.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// The device ordinal could not be parsed as a base-10 `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source} (got {input:?})")]
pub struct OrdinalParseError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

/// Optional zero-based device index.
///
/// Absent and negative ordinals both mean "do not touch a GPU device";
/// the raw value is kept so it can still be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceOrdinal(Option<i32>);

impl DeviceOrdinal {
    /// No ordinal was passed.
    pub const UNSET: Self = Self(None);

    pub const fn new(value: i32) -> Self {
        Self(Some(value))
    }

    /// Parse the first positional argument, if any.
    pub fn parse_arg(arg: Option<&str>) -> Result<Self, OrdinalParseError> {
        arg.map_or(Ok(Self::UNSET), |s| s.parse())
    }

    /// Raw value as passed, including negatives.
    pub const fn raw(self) -> Option<i32> {
        self.0
    }

    /// The ordinal of the device to test, or `None` to skip device queries.
    pub const fn requested(self) -> Option<i32> {
        match self.0 {
            Some(value) if value >= 0 => Some(value),
            _ => None,
        }
    }
}

impl FromStr for DeviceOrdinal {
    type Err = OrdinalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|source| OrdinalParseError {
                input: s.to_string(),
                source,
            })
    }
}
