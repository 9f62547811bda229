//! Conversion engine for dipstick reading <-> volume lookups.
//!
//! Both directions are pure functions over the read-only calibration store.
//! Forward lookups snap the reading to the 2 mm table step before the exact
//! lookup; inverse lookups fall back to the stored volume closest to the
//! target when no exact entry exists.

use tracing::debug;

use crate::calibration::{CalibrationStore, CalibrationTable};
use crate::error::TankbookError;

use super::types::{Conversion, ConversionNote, ConversionRequest, Direction, Unit};

/// The conversion engine.
///
/// Owns the calibration store and answers both conversion directions.
/// Nothing here mutates after construction.
pub struct ConversionEngine {
    store: CalibrationStore,
}

impl ConversionEngine {
    /// Create an engine over a loaded calibration store.
    pub fn new(store: CalibrationStore) -> Self {
        Self { store }
    }

    /// The underlying store, for bounds queries and catalog construction.
    pub fn store(&self) -> &CalibrationStore {
        &self.store
    }

    /// Dispatch a request to the matching conversion direction.
    pub fn convert(&self, request: &ConversionRequest) -> Result<Conversion, TankbookError> {
        match request.direction {
            Direction::ReadingToVolume => self.reading_to_volume(request.tank_no, request.value),
            Direction::VolumeToReading => self.volume_to_reading(request.tank_no, request.value),
        }
    }

    /// Convert a dipstick reading (mm of empty space) to liters.
    ///
    /// The reading is snapped to the nearest multiple of 2, ties rounding
    /// up, before the exact-key lookup; a changed value is surfaced in the
    /// result note. Readings with no calibration entry fail with
    /// `OutOfRange` carrying the tank's maximum reading.
    pub fn reading_to_volume(
        &self,
        tank_no: u32,
        reading_mm: i64,
    ) -> Result<Conversion, TankbookError> {
        let reading = checked_value(reading_mm, "dipstick reading")?;
        let table = self.non_empty_table(tank_no)?;

        let rounded = round_to_step(reading);
        let Some(volume_l) = table.volume_at(rounded) else {
            // The table is non-empty, so a maximum reading exists.
            let max_reading_mm = table.max_reading_mm().unwrap_or(0);
            return Err(TankbookError::OutOfRange { max_reading_mm });
        };

        let was_rounded = rounded != reading;
        debug!("tank {tank_no}: {reading_mm} mm -> {volume_l} L (rounded: {was_rounded})");
        Ok(Conversion {
            tank_no,
            input_value: reading_mm,
            display_value: volume_l,
            unit: Unit::Liters,
            implied_volume_l: volume_l,
            exact: !was_rounded,
            note: was_rounded.then_some(ConversionNote::Rounded {
                input_mm: reading_mm,
                rounded_mm: rounded,
            }),
        })
    }

    /// Convert a target volume (L) to the dipstick reading closest to
    /// holding it.
    ///
    /// An exact stored volume wins, taking the first match in ascending
    /// reading order. Otherwise the entry with the smallest volume distance
    /// is chosen, ties again resolving to the first entry; the matched
    /// volume is surfaced in the result note.
    pub fn volume_to_reading(
        &self,
        tank_no: u32,
        target_volume_l: i64,
    ) -> Result<Conversion, TankbookError> {
        let target = checked_value(target_volume_l, "volume")?;
        let table = self.non_empty_table(tank_no)?;

        if let Some((reading_mm, _)) = table.entries().find(|&(_, v)| v == target) {
            debug!("tank {tank_no}: {target_volume_l} L -> {reading_mm} mm (exact)");
            return Ok(Conversion {
                tank_no,
                input_value: target_volume_l,
                display_value: reading_mm,
                unit: Unit::Millimeters,
                implied_volume_l: target,
                exact: true,
                note: None,
            });
        }

        // min_by_key keeps the first minimum, so ties resolve to the
        // smallest reading without a secondary sort.
        let Some((reading_mm, volume_l)) = table
            .entries()
            .min_by_key(|&(_, v)| (i64::from(v) - i64::from(target)).abs())
        else {
            return Err(TankbookError::NoData { tank_no });
        };

        debug!("tank {tank_no}: {target_volume_l} L -> {reading_mm} mm (nearest {volume_l} L)");
        Ok(Conversion {
            tank_no,
            input_value: target_volume_l,
            display_value: reading_mm,
            unit: Unit::Millimeters,
            implied_volume_l: target,
            exact: false,
            note: Some(ConversionNote::Nearest { volume_l }),
        })
    }

    /// Look up a tank's table, treating an unknown tank and an empty table
    /// alike as missing configuration.
    fn non_empty_table(&self, tank_no: u32) -> Result<&CalibrationTable, TankbookError> {
        self.store
            .table(tank_no)
            .filter(|table| !table.is_empty())
            .ok_or(TankbookError::NoData { tank_no })
    }
}

/// Snap a reading to the 2 mm table step. Odd readings sit exactly between
/// two steps and round up.
fn round_to_step(reading_mm: u32) -> u32 {
    if reading_mm % 2 == 0 {
        reading_mm
    } else {
        reading_mm.saturating_add(1)
    }
}

/// Narrow a caller-supplied value to the non-negative range the tables use.
fn checked_value(value: i64, what: &str) -> Result<u32, TankbookError> {
    if value < 0 {
        return Err(TankbookError::InvalidInput {
            message: format!("{what} must not be negative, got {value}"),
        });
    }
    u32::try_from(value).map_err(|_| TankbookError::InvalidInput {
        message: format!("{what} {value} is out of the supported range"),
    })
}
