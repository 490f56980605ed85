use super::model::{FieldValue, ListingTable};
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Price normalization
// ---------------------------------------------------------------------------

/// Column holding the nightly rate.
pub const PRICE_COLUMN: &str = "price";

/// Formatting characters stripped before parsing: currency symbol and
/// thousands separator (InsideAirbnb stores prices as `"$1,234.00"`).
const STRIP_CHARS: [char; 2] = ['$', ','];

/// Coerce the price column into numbers, one entry per row.
///
/// Numeric cells pass through unchanged; textual cells are stripped of
/// currency formatting and parsed; anything unparseable (or empty) becomes a
/// missing value rather than a failure.
pub fn normalize(table: &ListingTable) -> Result<Vec<Option<f64>>, PipelineError> {
    if !table.has_column(PRICE_COLUMN) {
        return Err(PipelineError::MissingColumn {
            column: PRICE_COLUMN.to_string(),
            hint: "are you sure this is the *listings* file?".to_string(),
        });
    }

    Ok(table.column(PRICE_COLUMN).map(normalize_cell).collect())
}

fn normalize_cell(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Float(v) => Some(*v),
        FieldValue::Integer(i) => Some(*i as f64),
        FieldValue::String(s) => {
            let cleaned: String = s.chars().filter(|c| !STRIP_CHARS.contains(c)).collect();
            cleaned.trim().parse::<f64>().ok()
        }
        FieldValue::Bool(_) | FieldValue::Null => None,
    }
}
