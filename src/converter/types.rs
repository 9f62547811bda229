//! Request and result shapes for the conversion engine.
//!
//! Input types describe what the caller asks for; output types carry serde
//! derives so a frontend boundary can ship them as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT TYPES (from the presentation layer)
// =============================================================================

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Dipstick reading (mm of empty space) to volume (L).
    ReadingToVolume,
    /// Volume (L) to dipstick reading (mm).
    VolumeToReading,
}

/// One conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Tank whose calibration table answers the request.
    pub tank_no: u32,
    /// Which way to convert.
    pub direction: Direction,
    /// The value to convert, already parsed to an integer (see
    /// [`parse_value`](crate::converter::parse_value)).
    pub value: i64,
}

// =============================================================================
// OUTPUT TYPES (serialized to the presentation layer)
// =============================================================================

/// Unit of a conversion result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "mm")]
    Millimeters,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Liters => "L",
            Unit::Millimeters => "mm",
        })
    }
}

/// Qualifier attached to an approximate conversion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionNote {
    /// The input reading was snapped to the 2 mm table step.
    Rounded { input_mm: i64, rounded_mm: u32 },
    /// No exact volume entry existed; the closest stored volume was used.
    Nearest { volume_l: u32 },
}

impl fmt::Display for ConversionNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionNote::Rounded {
                input_mm,
                rounded_mm,
            } => write!(f, "{input_mm} mm rounded to {rounded_mm} mm"),
            ConversionNote::Nearest { volume_l } => {
                write!(f, "no exact match; nearest stored volume is {volume_l} L")
            }
        }
    }
}

/// A successful conversion, ready for display or a history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Tank the conversion ran against.
    pub tank_no: u32,
    /// The value as submitted by the caller.
    pub input_value: i64,
    /// The converted value to display.
    pub display_value: u32,
    /// Unit of `display_value`.
    pub unit: Unit,
    /// Liquid volume implied by this conversion, for gauge display.
    pub implied_volume_l: u32,
    /// False when rounding or nearest-match resolution changed the answer.
    pub exact: bool,
    /// Present when the result is approximate.
    pub note: Option<ConversionNote>,
}

impl Conversion {
    /// Fill level as a percentage of the full-tank volume, clamped to
    /// 0-100 for gauge rendering.
    pub fn fill_percent(&self, max_volume_l: u32) -> f64 {
        if max_volume_l == 0 {
            return 0.0;
        }
        (f64::from(self.implied_volume_l) / f64::from(max_volume_l) * 100.0).clamp(0.0, 100.0)
    }
}
