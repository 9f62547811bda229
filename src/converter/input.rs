//! Validated input boundary between raw user text and the engine.

use crate::error::TankbookError;

/// Parse raw user text into a conversion value.
///
/// Accepts whole numbers only, so the engine never sees raw text or
/// fractional values. Sign checking stays in the engine, which also covers
/// callers that construct values directly.
pub fn parse_value(text: &str) -> Result<i64, TankbookError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TankbookError::InvalidInput {
            message: "enter a value".to_string(),
        });
    }
    trimmed.parse::<i64>().map_err(|_| TankbookError::InvalidInput {
        message: format!("{trimmed:?} is not a whole number"),
    })
}
