//! Conversion engine for the two lookup directions.
//!
//! - **Forward**: dipstick reading (mm) -> volume (L), snapping the reading
//!   to the 2 mm table step
//! - **Inverse**: volume (L) -> dipstick reading (mm), nearest stored
//!   volume when no exact entry exists
//! - **Input boundary**: raw user text is parsed to a typed integer before
//!   the engine sees it

mod engine;
mod input;
mod types;

pub use engine::ConversionEngine;
pub use input::parse_value;
pub use types::*;
