use std::collections::BTreeMap;

use crate::error::TankbookError;

use super::types::{CalibrationTable, TankBounds};

/// Read-only store of calibration tables keyed by tank number.
///
/// Built once at startup from a loaded dataset; no method mutates it, so
/// concurrent callers need no coordination. The store answers exact-key
/// lookups only and never interpolates between calibration points.
pub struct CalibrationStore {
    tables: BTreeMap<u32, CalibrationTable>,
}

impl CalibrationStore {
    /// Create a store over a loaded dataset.
    ///
    /// # Arguments
    /// * `tables` - Tables keyed by tank number (from `default_tables()` or
    ///   `load_tables()`)
    pub fn new(tables: BTreeMap<u32, CalibrationTable>) -> Self {
        Self { tables }
    }

    /// Ascending tank numbers known to the store.
    pub fn tank_nos(&self) -> impl Iterator<Item = u32> + '_ {
        self.tables.keys().copied()
    }

    /// The calibration table for a tank, if known.
    pub fn table(&self, tank_no: u32) -> Option<&CalibrationTable> {
        self.tables.get(&tank_no)
    }

    /// Volume stored for an exact reading. `None` when the tank is unknown
    /// or the reading is not a key in its table.
    pub fn volume_at(&self, tank_no: u32, reading_mm: u32) -> Option<u32> {
        self.table(tank_no)?.volume_at(reading_mm)
    }

    /// All (reading, volume) pairs for a tank, ascending by reading.
    pub fn entries(&self, tank_no: u32) -> Option<impl Iterator<Item = (u32, u32)> + '_> {
        Some(self.table(tank_no)?.entries())
    }

    /// Full-tank volume and empty-tank reading, for display and validation
    /// hints. Fails with `NoData` when the tank is unknown or its table is
    /// empty.
    pub fn bounds(&self, tank_no: u32) -> Result<TankBounds, TankbookError> {
        let table = self.table(tank_no).ok_or(TankbookError::NoData { tank_no })?;
        match (table.max_reading_mm(), table.max_volume_l()) {
            (Some(max_reading_mm), Some(max_volume_l)) => Ok(TankBounds {
                max_reading_mm,
                max_volume_l,
            }),
            _ => Err(TankbookError::NoData { tank_no }),
        }
    }

    /// Number of tanks in the store.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
