//! Chart rendering: each report is one PNG written via plotters.

pub mod bars;
pub mod histogram;

use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Pixel sizes follow the original report's 12×5 / 12×6 inch figures.
pub const HIST_SIZE: (u32, u32) = (1200, 500);
pub const BAR_SIZE: (u32, u32) = (1200, 600);

/// Open a white-filled PNG drawing area at `path`.
fn bitmap_root(path: &Path, size: (u32, u32)) -> Result<DrawingArea<BitMapBackend<'_>, Shift>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    Ok(root)
}
