// Central tendency: mean, median and mode

use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{quantile, ColumnSummary, Mode};
use crate::series::Series;

/// Central tendency summary of one column
pub(crate) fn summarize_impl(series: &Series) -> ColumnSummary {
    let data = series.dropna();
    let summary = ColumnSummary {
        name: series.name().to_string(),
        kind: series.kind(),
        count: data.len(),
        mean: mean_impl(&data),
        median: quantile::median_impl(&data),
        mode: mode_impl(&data),
    };
    debug!(
        "central tendency of '{}': n={} mean={} median={} mode={:?}",
        summary.name, summary.count, summary.mean, summary.median, summary.mode
    );
    summary
}

/// Arithmetic mean; NaN entries count as missing
pub(crate) fn mean_impl(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), &v| (sum + v, n + 1));
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Count occurrences of each distinct value, ascending by value
pub(crate) fn frequency_table_impl(data: &[f64]) -> Vec<(f64, usize)> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in data.iter().filter(|v| !v.is_nan()) {
        // fold -0.0 into 0.0 so both count as one value
        let v = if v == 0.0 { 0.0 } else { v };
        *counts.entry(v.to_bits()).or_insert(0) += 1;
    }

    let mut table: Vec<(f64, usize)> = counts
        .into_iter()
        .map(|(bits, count)| (f64::from_bits(bits), count))
        .collect();
    table.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    table
}

/// Mode with the repeat-only policy
///
/// A value only counts as a mode if it occurs more than once. Ties are
/// reported in ascending value order.
pub(crate) fn mode_impl(data: &[f64]) -> Mode {
    let table = frequency_table_impl(data);
    let max_count = match table.iter().map(|&(_, c)| c).max() {
        Some(c) => c,
        None => return Mode::Empty,
    };

    if max_count == 1 {
        return Mode::NoMode;
    }

    let mut modes: Vec<f64> = table
        .into_iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| v)
        .collect();

    if modes.len() == 1 {
        Mode::Single(modes.remove(0))
    } else {
        Mode::Multiple(modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ColumnKind, Series};

    const MATH_GRADES: [f64; 12] = [3.5, 4.0, 2.8, 3.2, 4.5, 3.7, 2.9, 3.8, 4.1, 2.5, 4.6, 3.3];

    #[test]
    fn test_all_distinct_has_no_mode() {
        let series = Series::floats(MATH_GRADES.to_vec(), "math");
        let summary = summarize_impl(&series);
        assert_eq!(summary.count, 12);
        assert!((summary.mean - 3.575).abs() < 1e-10);
        assert!((summary.median - 3.6).abs() < 1e-10);
        assert_eq!(summary.mode, Mode::NoMode);
    }

    #[test]
    fn test_single_mode() {
        let stress = Series::integers(vec![6, 5, 8, 7, 4, 6, 7, 5, 4, 9, 3, 7], "stress");
        let summary = summarize_impl(&stress);
        assert_eq!(summary.mode, Mode::Single(7.0));
        assert!((summary.mean - 5.916666666666667).abs() < 1e-10);
        assert!((summary.median - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_one_repeated_value() {
        assert_eq!(mode_impl(&[1.0, 2.0, 2.0, 3.0, 4.0]), Mode::Single(2.0));
    }

    #[test]
    fn test_multiple_modes_ascending() {
        let data = [9.0, 3.0, 9.0, 1.0, 3.0, 5.0];
        assert_eq!(mode_impl(&data), Mode::Multiple(vec![3.0, 9.0]));
    }

    #[test]
    fn test_empty_column() {
        let series = Series::from_options(vec![None, None], "empty", ColumnKind::Float);
        let summary = summarize_impl(&series);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.median.is_nan());
        assert_eq!(summary.mode, Mode::Empty);
    }

    #[test]
    fn test_missing_values_are_ignored() {
        let series = Series::from_options(
            vec![Some(2.0), None, Some(2.0), Some(5.0), None],
            "partial",
            ColumnKind::Float,
        );
        let summary = summarize_impl(&series);
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 3.0).abs() < 1e-10);
        assert_eq!(summary.mode, Mode::Single(2.0));
    }

    #[test]
    fn test_nan_entries_are_missing() {
        assert_eq!(mean_impl(&[1.0, f64::NAN, 3.0, 5.0]), 3.0);
        assert!(mean_impl(&[f64::NAN, f64::NAN]).is_nan());
        assert_eq!(mode_impl(&[2.0, f64::NAN, 2.0, f64::NAN]), Mode::Single(2.0));
    }

    #[test]
    fn test_frequency_table() {
        let table = frequency_table_impl(&[8.0, 6.0, 8.0, -0.0, 0.0, 10.0]);
        assert_eq!(table, vec![(0.0, 2), (6.0, 1), (8.0, 2), (10.0, 1)]);
    }
}
