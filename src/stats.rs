use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Descriptive statistics over the normalized price series
// ---------------------------------------------------------------------------

/// Linearly-interpolated quantile of an unsorted sample, `q` in `[0, 1]`.
/// Returns `None` for an empty sample.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Equal-width bin counts of a sample over `[0, cap]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    /// Count per bin, left to right.
    pub counts: Vec<usize>,
    /// Width of each bin.
    pub width: f64,
    /// Upper bound of the binned range (display cap).
    pub cap: f64,
}

impl Bins {
    /// Bin `values` into `bins` equal-width bins over `[0, cap]`. Values
    /// outside the range are dropped (the cap is a display bound, not a
    /// winsorization); a value exactly equal to the cap lands in the last bin.
    pub fn clipped(values: &[f64], bins: usize, cap: f64) -> Self {
        if bins == 0 {
            return Bins {
                counts: Vec::new(),
                width: 0.0,
                cap,
            };
        }

        let width = cap / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            if v < 0.0 || v > cap {
                continue;
            }
            let idx = if width > 0.0 {
                ((v / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }
        Bins { counts, width, cap }
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Frequency table of category values, most frequent first; ties break by
/// name so repeated runs chart the categories in the same order.
pub fn value_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
