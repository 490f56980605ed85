use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use plotters::prelude::*;

use crate::stats::Bins;

// ---------------------------------------------------------------------------
// Capped price histogram
// ---------------------------------------------------------------------------

/// Render a binned price histogram to `out`. The x axis spans the binned
/// range `[0, cap]`; the cap comes from the caller's percentile computation.
pub fn render(bins: &Bins, title: &str, out: &Path) -> Result<()> {
    let root = super::bitmap_root(out, super::HIST_SIZE)?;

    // Degenerate caps (all prices zero) still need a non-empty axis.
    let x_max = if bins.cap > 0.0 { bins.cap } else { 1.0 };
    let y_max = bins.max_count().max(1) as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0u32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Price (€)")
        .y_desc("Count")
        .draw()?;

    chart.draw_series(bins.counts.iter().enumerate().map(|(i, &count)| {
        let x0 = i as f64 * bins.width;
        let x1 = x0 + bins.width;
        Rectangle::new([(x0, 0), (x1, count as u32)], BLUE.mix(0.6).filled())
    }))?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    info!("saved {}", out.display());
    Ok(())
}
