use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::DATA_CANDIDATES;

// ---------------------------------------------------------------------------
// Command line surface
// ---------------------------------------------------------------------------

/// Focus-area keywords used when none are given on the command line.
/// Jordaan listings are usually tagged under the 'Centrum-West' area code.
pub const DEFAULT_FOCUS_KEYWORDS: [&str; 2] = ["jordaan", "centrum-west"];

#[derive(Parser, Debug, Clone)]
#[command(
    name = "listings-report",
    version,
    about = "Produce price and neighbourhood charts from an InsideAirbnb listings snapshot"
)]
pub struct Cli {
    /// Dataset path(s) to try in order; the first that exists wins.
    /// Defaults to data/listings.csv then data/listings.csv.gz.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Vec<PathBuf>,

    /// Directory the charts are written into (created if missing).
    #[arg(long, value_name = "DIR", default_value = "figures")]
    pub fig_dir: PathBuf,

    /// Case-insensitive substring(s) selecting the focus-area subset.
    #[arg(long = "focus-keyword", value_name = "KEYWORD")]
    pub focus_keyword: Vec<String>,

    /// Log debug detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Candidate dataset paths: command line overrides, stock locations otherwise.
    pub fn data_candidates(&self) -> Vec<PathBuf> {
        if self.data.is_empty() {
            DATA_CANDIDATES.iter().map(PathBuf::from).collect()
        } else {
            self.data.clone()
        }
    }

    /// Focus keywords: command line overrides, Jordaan defaults otherwise.
    pub fn focus_keywords(&self) -> Vec<String> {
        if self.focus_keyword.is_empty() {
            DEFAULT_FOCUS_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            self.focus_keyword.clone()
        }
    }
}
