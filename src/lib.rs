//! Dipstick-to-volume conversion backed by per-tank calibration tables.
//!
//! A tank's dipstick reading measures the empty space from the tank top in
//! millimeters; because real tanks have non-linear geometry, the matching
//! liquid volume comes from a surveyed calibration table instead of a
//! formula. This crate holds those tables, converts in both directions
//! (with step rounding and nearest-match resolution), reports per-tank
//! bounds, and groups tanks sharing one table into single selector
//! entries.
//!
//! # Example
//!
//! ```
//! use tankbook::{default_tables, CalibrationStore, ConversionEngine, TankCatalog};
//!
//! let store = CalibrationStore::new(default_tables());
//! let catalog = TankCatalog::new(&store);
//! let engine = ConversionEngine::new(store);
//!
//! let tank_no = catalog.tank_nos()[0];
//! let bounds = engine.store().bounds(tank_no)?;
//!
//! // A zero reading means no empty space: the tank is full.
//! let result = engine.reading_to_volume(tank_no, 0)?;
//! assert_eq!(result.display_value, bounds.max_volume_l);
//! # Ok::<(), tankbook::TankbookError>(())
//! ```

pub mod calibration;
pub mod catalog;
pub mod converter;
mod error;

pub use calibration::{default_tables, load_tables, CalibrationStore, CalibrationTable, TankBounds};
pub use catalog::{DisplayOption, TankCatalog};
pub use converter::{
    parse_value, Conversion, ConversionEngine, ConversionNote, ConversionRequest, Direction, Unit,
};
pub use error::TankbookError;

/// Install a process-wide tracing subscriber for embedding hosts that do
/// not configure their own. Respects `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
