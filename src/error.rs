use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline error taxonomy
// ---------------------------------------------------------------------------

/// A failed pipeline precondition. Every variant is fatal: the run stops at
/// the first one raised and no later stage produces output.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// None of the candidate dataset paths exists.
    #[error(
        "no dataset found (tried {tried:?}); put 'listings.csv' (or .csv.gz) into the data/ folder"
    )]
    MissingInput { tried: Vec<PathBuf> },

    /// A required column is absent from the loaded table.
    #[error("no '{column}' column found; {hint}")]
    MissingColumn { column: String, hint: String },

    /// The neighbourhood column exists but its values are implausible for a
    /// city-level Amsterdam file (wrong granularity or wrong city).
    #[error(
        "column '{column}' does not look like Amsterdam neighbourhoods ({reason}); \
         double-check you downloaded the *Amsterdam listings* file"
    )]
    DatasetMismatch { column: String, reason: String },
}
