//! TOML dataset loading for the calibration store.
//!
//! Provides two loading methods:
//! - `default_tables()` - Loads the dataset embedded into the binary
//! - `load_tables(path)` - Loads an operator-supplied dataset from a file path
//!
//! Loading only parses the document shape. Table content (step width,
//! monotonicity) is taken as-is from the source data and never validated.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::types::CalibrationTable;

/// Default calibration dataset embedded in the binary at compile time.
/// Loaded from `config/tank_tables.toml`.
const DEFAULT_TABLES: &str = include_str!("../../config/tank_tables.toml");

/// Raw document shape. TOML keys are strings; numeric conversion happens in
/// `parse_tables`.
#[derive(Debug, Deserialize)]
struct TankTablesDoc {
    tanks: BTreeMap<String, BTreeMap<String, u32>>,
}

/// Load calibration tables from a TOML file at the given path.
///
/// # Arguments
/// * `path` - Path to the TOML file containing one table per tank
///
/// # Returns
/// * `Ok` - Tables keyed by tank number, ascending
/// * `Err` - If the file cannot be read or the document is malformed
pub fn load_tables(path: &Path) -> Result<BTreeMap<u32, CalibrationTable>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read calibration dataset {}", path.display()))?;
    let tables = parse_tables(&content)
        .with_context(|| format!("invalid calibration dataset {}", path.display()))?;
    info!(
        "Loaded calibration tables for {} tanks from {}",
        tables.len(),
        path.display()
    );
    Ok(tables)
}

/// Get the default calibration dataset embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_tables() -> BTreeMap<u32, CalibrationTable> {
    parse_tables(DEFAULT_TABLES).expect("embedded tank_tables.toml must be valid TOML")
}

fn parse_tables(content: &str) -> Result<BTreeMap<u32, CalibrationTable>> {
    let doc: TankTablesDoc = toml::from_str(content)?;

    let mut tables = BTreeMap::new();
    for (tank_key, raw_entries) in doc.tanks {
        let tank_no: u32 = tank_key
            .parse()
            .with_context(|| format!("tank key {tank_key:?} is not a number"))?;

        let mut entries = BTreeMap::new();
        for (reading_key, volume_l) in raw_entries {
            let reading_mm: u32 = reading_key.parse().with_context(|| {
                format!("reading key {reading_key:?} in tank {tank_no} is not a number")
            })?;
            entries.insert(reading_mm, volume_l);
        }
        tables.insert(tank_no, CalibrationTable::new(entries));
    }
    Ok(tables)
}
