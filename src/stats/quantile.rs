// Position measures: quantiles by linear interpolation

use log::debug;
use std::cmp::Ordering;

use super::ColumnPosition;
use crate::error::{Error, Result};
use crate::series::Series;

/// Quartiles and percentiles of one column
pub(crate) fn positions_impl(series: &Series) -> ColumnPosition {
    let sorted = sorted_values(&series.dropna());
    let q1 = quantile_sorted(&sorted, 0.25);
    let q2 = quantile_sorted(&sorted, 0.50);
    let q3 = quantile_sorted(&sorted, 0.75);
    debug!("positions of '{}': q1={} q2={} q3={}", series.name(), q1, q2, q3);

    ColumnPosition {
        name: series.name().to_string(),
        q1,
        q2,
        q3,
        p25: q1,
        p50: q2,
        p75: q3,
    }
}

pub(crate) fn median_impl(data: &[f64]) -> f64 {
    quantile_sorted(&sorted_values(data), 0.5)
}

/// Quantile of unsorted data; `p` must lie in [0, 1]
pub(crate) fn quantile_impl(data: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidValue(format!(
            "quantile must be between 0 and 1, got {}",
            p
        )));
    }
    Ok(quantile_sorted(&sorted_values(data), p))
}

fn sorted_values(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Linear interpolation at rank p * (n - 1); NaN for empty input
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let idx = p * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let weight = idx - lower as f64;
    let value = sorted[lower] + (sorted[upper] - sorted[lower]) * weight;
    // keep rounding error inside the bracketing order statistics
    value.max(sorted[lower]).min(sorted[upper])
}
