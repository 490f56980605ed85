use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use plotters::prelude::*;
use plotters::style::FontTransform;

// ---------------------------------------------------------------------------
// Top-neighbourhood bar chart
// ---------------------------------------------------------------------------

/// Render category frequency bars to `out`, most frequent first. Labels are
/// drawn rotated; Amsterdam neighbourhood names overlap horizontally.
pub fn render(counts: &[(String, usize)], column: &str, out: &Path) -> Result<()> {
    let root = super::bitmap_root(out, super::BAR_SIZE)?;

    let y_max = counts.iter().map(|(_, c)| *c as u32).max().unwrap_or(0).max(1);
    let title = format!("Top {} {column} by Number of Listings", counts.len());

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(160)
        .y_label_area_size(60)
        .build_cartesian_2d((0..counts.len()).into_segmented(), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len().max(1))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => counts
                .get(*i)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Listings")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.filled())
            .margin(8)
            .data(counts.iter().enumerate().map(|(i, (_, c))| (i, *c as u32))),
    )?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    info!("saved {}", out.display());
    Ok(())
}
