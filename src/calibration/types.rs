//! Type definitions for the calibration dataset.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single tank's dipstick calibration table.
///
/// Maps a dipstick reading (millimeters of empty space measured from the
/// tank top, in 2 mm steps) to the liquid volume in liters. Real tanks have
/// non-linear geometry, so the relation is tabulated from survey data rather
/// than computed. Backed by a `BTreeMap` so iteration is always ascending by
/// reading; structural equality of two tables is what the catalog grouping
/// rule compares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalibrationTable {
    entries: BTreeMap<u32, u32>,
}

impl CalibrationTable {
    /// Wrap an already-keyed map of (reading mm, volume L) entries.
    pub fn new(entries: BTreeMap<u32, u32>) -> Self {
        Self { entries }
    }

    /// Build a table from (reading mm, volume L) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Volume stored for an exact reading key. No interpolation: a reading
    /// between two calibration points is simply absent.
    pub fn volume_at(&self, reading_mm: u32) -> Option<u32> {
        self.entries.get(&reading_mm).copied()
    }

    /// All (reading, volume) pairs, ascending by reading.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(&r, &v)| (r, v))
    }

    /// Largest reading key: the empty-tank (most empty space) reading.
    pub fn max_reading_mm(&self) -> Option<u32> {
        self.entries.last_key_value().map(|(&r, _)| r)
    }

    /// Volume at the smallest reading key: the full-tank capacity.
    pub fn max_volume_l(&self) -> Option<u32> {
        self.entries.first_key_value().map(|(_, &v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Display and validation bounds for one tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TankBounds {
    /// Largest calibrated dipstick reading (empty tank).
    pub max_reading_mm: u32,
    /// Volume at the smallest reading (full tank).
    pub max_volume_l: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_iterate_ascending() {
        let table = CalibrationTable::from_pairs([(4, 100), (0, 300), (2, 200)]);
        let readings: Vec<u32> = table.entries().map(|(r, _)| r).collect();
        assert_eq!(readings, vec![0, 2, 4]);
    }

    #[test]
    fn test_max_accessors() {
        let table = CalibrationTable::from_pairs([(0, 5000), (2, 4980), (3000, 0)]);
        assert_eq!(table.max_reading_mm(), Some(3000));
        assert_eq!(table.max_volume_l(), Some(5000));
    }

    #[test]
    fn test_empty_table_has_no_bounds() {
        let table = CalibrationTable::default();
        assert!(table.is_empty());
        assert_eq!(table.max_reading_mm(), None);
        assert_eq!(table.max_volume_l(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = CalibrationTable::from_pairs([(0, 2000), (2, 1993)]);
        let b = CalibrationTable::from_pairs([(2, 1993), (0, 2000)]);
        let c = CalibrationTable::from_pairs([(0, 2000), (2, 1994)]);
        assert_eq!(a, b, "Insertion order must not affect equality");
        assert_ne!(a, c);
    }
}
