use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy for conversion calls.
///
/// Every failure is returned as a value; nothing in this crate raises on
/// user input. `InvalidInput` is recoverable (ask the user to re-enter),
/// `OutOfRange` carries the tank's maximum reading so the caller can guide
/// correction, and `NoData` marks a calibration dataset defect.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TankbookError {
    /// Non-numeric, non-integer, or negative user value.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The reading parses but has no calibration entry for this tank.
    #[error("reading is outside the calibration range (max dipstick reading: {max_reading_mm} mm)")]
    OutOfRange { max_reading_mm: u32 },

    /// The tank is unknown or its calibration table is empty.
    #[error("no calibration data for tank {tank_no}")]
    NoData { tank_no: u32 },
}

impl TankbookError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::OutOfRange { .. } => "out_of_range",
            Self::NoData { .. } => "no_data",
        }
    }
}

impl From<TankbookError> for String {
    fn from(err: TankbookError) -> Self {
        err.to_string()
    }
}
