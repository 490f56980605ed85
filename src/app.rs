use std::fs;

use anyhow::{Context, Result};
use log::debug;

use crate::chart;
use crate::cli::Cli;
use crate::data::{filter, loader, neighbourhood, price};
use crate::stats::{self, Bins};

// ---------------------------------------------------------------------------
// Pipeline orchestration
// ---------------------------------------------------------------------------

/// Display cap: the histograms clip at this quantile so a handful of outlier
/// prices does not flatten the rest of the distribution.
const CAP_QUANTILE: f64 = 0.99;

const GLOBAL_BINS: usize = 50;
const FOCUS_BINS: usize = 40;
const TOP_N: usize = 10;

/// Number of column names shown in the startup preview.
const COLUMN_PREVIEW: usize = 15;

const PRICE_CHART: &str = "price_distribution.png";
const TOP_CHART: &str = "top_neighbourhoods.png";
const FOCUS_CHART: &str = "jordaan_price_distribution.png";

/// Run the whole pipeline: resolve → load → normalize → validate → report.
///
/// Each stage's output is threaded straight into the next; any failed
/// precondition aborts before a later stage writes anything.
pub fn run(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.fig_dir)
        .with_context(|| format!("creating {}", cli.fig_dir.display()))?;

    let path = loader::resolve_input(&cli.data_candidates())?;
    println!("Loading dataset: {}", path.display());

    let table = loader::load_table(&path)?;
    let (rows, cols) = table.shape();
    println!("Rows, Cols: ({rows}, {cols})");
    println!(
        "Sample columns: {:?}",
        &table.columns[..table.columns.len().min(COLUMN_PREVIEW)]
    );

    let prices = price::normalize(&table)?;
    let neigh_col = neighbourhood::select_column(&table)?;
    neighbourhood::validate(&table, &neigh_col)?;
    debug!("using neighbourhood column '{neigh_col}'");

    // Global price distribution, capped for readability.
    let known: Vec<f64> = prices.iter().flatten().copied().collect();
    match stats::quantile(&known, CAP_QUANTILE) {
        Some(cap) => {
            let bins = Bins::clipped(&known, GLOBAL_BINS, cap);
            chart::histogram::render(
                &bins,
                "Distribution of Airbnb Prices in Amsterdam (capped at 99th percentile)",
                &cli.fig_dir.join(PRICE_CHART),
            )?;
        }
        None => println!("No usable price values; skipping the price distribution chart."),
    }

    // Top neighbourhoods by listing count.
    let counts = stats::value_counts(
        table
            .column(&neigh_col)
            .filter(|v| !v.is_null())
            .map(|v| v.to_string()),
    );
    let top: Vec<(String, usize)> = counts.into_iter().take(TOP_N).collect();
    chart::bars::render(&top, &neigh_col, &cli.fig_dir.join(TOP_CHART))?;

    // Focus-area subset (Jordaan by default; the keyword list is a heuristic,
    // kept configurable rather than treated as an authoritative area mapping).
    let keywords = cli.focus_keywords();
    let focus_label = keywords.join("/");
    let subset = filter::keyword_indices(&table, &neigh_col, &keywords);
    println!("Listings matched as {focus_label}: {}", subset.len());

    if !subset.is_empty() {
        let subset_prices: Vec<f64> = subset.iter().filter_map(|&i| prices[i]).collect();
        if let Some(cap) = stats::quantile(&subset_prices, CAP_QUANTILE) {
            let bins = Bins::clipped(&subset_prices, FOCUS_BINS, cap);
            chart::histogram::render(
                &bins,
                &format!("Price Distribution in {focus_label} (99th pct cap)"),
                &cli.fig_dir.join(FOCUS_CHART),
            )?;
        } else {
            println!("Focus-area listings have no usable prices; skipping their chart.");
        }
    }

    println!("Done. Check the '{}' folder.", cli.fig_dir.display());
    Ok(())
}
