use std::collections::BTreeSet;

use super::model::ListingTable;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Neighbourhood column selection & plausibility validation
// ---------------------------------------------------------------------------

/// Column candidates, most specific first (InsideAirbnb naming).
pub const CANDIDATE_COLUMNS: [&str; 3] = [
    "neighbourhood_cleansed",
    "neighbourhood",
    "neighbourhood_group_cleansed",
];

/// Fewer distinct areas than this means the file is not city-level.
const MIN_DISTINCT: usize = 5;

/// Country-level placeholder that betrays a national export.
const SENTINEL: &str = "netherlands";

/// Pick the first candidate column present in the table.
pub fn select_column(table: &ListingTable) -> Result<String, PipelineError> {
    CANDIDATE_COLUMNS
        .iter()
        .find(|c| table.has_column(c))
        .map(|c| c.to_string())
        .ok_or_else(|| PipelineError::MissingColumn {
            column: "neighbourhood".to_string(),
            hint: "check the columns printed above".to_string(),
        })
}

/// Check that `column` plausibly holds Amsterdam neighbourhood names: at
/// least [`MIN_DISTINCT`] distinct normalized values and no country-level
/// sentinel among them. Catches a national file supplied in place of the
/// city-level one before any chart gets drawn from it.
pub fn validate(table: &ListingTable, column: &str) -> Result<(), PipelineError> {
    let distinct: BTreeSet<String> = table
        .column(column)
        .filter(|v| !v.is_null())
        .map(|v| v.to_string().trim().to_lowercase())
        .collect();

    if distinct.len() < MIN_DISTINCT {
        return Err(PipelineError::DatasetMismatch {
            column: column.to_string(),
            reason: format!(
                "only {} distinct value(s), expected at least {MIN_DISTINCT}",
                distinct.len()
            ),
        });
    }
    if distinct.contains(SENTINEL) {
        return Err(PipelineError::DatasetMismatch {
            column: column.to_string(),
            reason: format!("contains the country-level value '{SENTINEL}'"),
        });
    }
    Ok(())
}
