// Dispersion: range, sample variance, standard deviation, coefficient of variation

use log::{debug, warn};

use super::{central, ColumnDispersion};
use crate::series::Series;

/// Dispersion summary of one column
///
/// Variance and standard deviation use the sample (n-1) divisor, so a single
/// observation yields NaN for both. The coefficient of variation is NaN when
/// the mean is exactly zero.
pub(crate) fn summarize_impl(series: &Series) -> ColumnDispersion {
    let data = series.dropna();
    let count = data.len();

    if count == 0 {
        warn!("column '{}' has no observations; dispersion is undefined", series.name());
        return ColumnDispersion {
            name: series.name().to_string(),
            count,
            min: f64::NAN,
            max: f64::NAN,
            range: f64::NAN,
            variance: f64::NAN,
            std: f64::NAN,
            cv_percent: f64::NAN,
        };
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = central::mean_impl(&data);
    let variance = variance_impl(&data);
    let std = variance.sqrt();
    let cv_percent = if mean != 0.0 {
        std / mean * 100.0
    } else {
        f64::NAN
    };

    debug!(
        "dispersion of '{}': n={} min={} max={} var={} std={} cv={}",
        series.name(),
        count,
        min,
        max,
        variance,
        std,
        cv_percent
    );

    ColumnDispersion {
        name: series.name().to_string(),
        count,
        min,
        max,
        range: max - min,
        variance,
        std,
        cv_percent,
    }
}

/// Sample variance over the non-NaN entries, NaN for fewer than two of them
pub(crate) fn variance_impl(data: &[f64]) -> f64 {
    let present: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    let n = present.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = central::mean_impl(&present);
    let sum_squared_diff = present.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    sum_squared_diff / (n - 1) as f64
}
