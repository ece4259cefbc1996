// Pearson correlation and its strength/direction classification

use log::{debug, warn};

use super::{CorrelationResult, Direction, Strength};
use crate::error::{Error, Result};
use crate::series::Series;

/// Correlate two columns of the same record set
pub(crate) fn correlate_impl(x: &Series, y: &Series) -> Result<CorrelationResult> {
    let (xs, ys) = paired_values(x, y)?;
    let r = pearson_impl(&xs, &ys)?;
    if r.is_nan() {
        warn!(
            "correlation of '{}' and '{}' is undefined ({} paired observations)",
            x.name(),
            y.name(),
            xs.len()
        );
    }
    let (direction, strength) = classify_impl(r);
    debug!("correlation of '{}' and '{}': r={} n={}", x.name(), y.name(), r, xs.len());

    Ok(CorrelationResult {
        column_a: x.name().to_string(),
        column_b: y.name().to_string(),
        n: xs.len(),
        r,
        strength,
        direction,
    })
}

/// Row-aligned values, dropping any row where either side is missing
pub(crate) fn paired_values(x: &Series, y: &Series) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    Ok(x.values()
        .iter()
        .zip(y.values().iter())
        .filter_map(|(a, b)| match (a.value(), b.value()) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => None,
        })
        .unzip())
}

/// Pearson r of paired slices
///
/// A pair with NaN on either side is dropped. Fewer than two remaining pairs
/// or a zero-variance side give NaN.
pub(crate) fn pearson_impl(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    let (x, y): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip();

    let n = x.len();
    if n < 2 {
        return Ok(f64::NAN);
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    // Σ(xi - x̄)(yi - ȳ)
    let numerator = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>();

    // √[Σ(xi - x̄)² * Σ(yi - ȳ)²]
    let sum_squared_diff_x = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum::<f64>();
    let sum_squared_diff_y = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum::<f64>();
    let denominator = (sum_squared_diff_x * sum_squared_diff_y).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        return Ok(f64::NAN);
    }

    Ok((numerator / denominator).clamp(-1.0, 1.0))
}

pub(crate) fn classify_impl(r: f64) -> (Direction, Strength) {
    let ar = r.abs();
    let strength = if ar >= 0.80 {
        Strength::Strong
    } else if ar >= 0.50 {
        Strength::Moderate
    } else if ar >= 0.30 {
        Strength::Weak
    } else {
        Strength::Negligible
    };

    let direction = if r > 0.0 {
        Direction::Positive
    } else if r < 0.0 {
        Direction::Negative
    } else {
        Direction::Null
    };

    (direction, strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ColumnKind;

    fn hours() -> Series {
        Series::integers(vec![10, 12, 6, 8, 15, 9, 7, 11, 13, 5, 16, 8], "hours")
    }

    fn stats_grade() -> Series {
        Series::floats(vec![3.8, 4.2, 3.1, 3.6, 4.8, 3.5, 3.2, 3.9, 4.3, 2.8, 4.7, 3.4], "stats")
    }

    #[test]
    fn test_study_hours_vs_grade() {
        let result = correlate_impl(&hours(), &stats_grade()).unwrap();
        assert_eq!(result.n, 12);
        assert!((result.r - 0.988502522229374).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Positive);
        assert_eq!(result.strength, Strength::Strong);
    }

    #[test]
    fn test_stress_vs_math_is_negative() {
        let stress = Series::integers(vec![6, 5, 8, 7, 4, 6, 7, 5, 4, 9, 3, 7], "stress");
        let math = Series::floats(vec![3.5, 4.0, 2.8, 3.2, 4.5, 3.7, 2.9, 3.8, 4.1, 2.5, 4.6, 3.3], "math");
        let result = correlate_impl(&stress, &math).unwrap();
        assert!((result.r + 0.9765884764339077).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Negative);
        assert_eq!(result.strength, Strength::Strong);
    }

    #[test]
    fn test_symmetry() {
        let a = correlate_impl(&hours(), &stats_grade()).unwrap();
        let b = correlate_impl(&stats_grade(), &hours()).unwrap();
        assert!((a.r - b.r).abs() < 1e-12);
    }

    #[test]
    fn test_paired_missing_removal() {
        let x = Series::from_options(vec![Some(1.0), None, Some(3.0), Some(4.0)], "x", ColumnKind::Float);
        let y = Series::from_options(vec![Some(2.0), Some(100.0), None, Some(8.0)], "y", ColumnKind::Float);
        let (xs, ys) = paired_values(&x, &y).unwrap();
        assert_eq!(xs, vec![1.0, 4.0]);
        assert_eq!(ys, vec![2.0, 8.0]);

        let result = correlate_impl(&x, &y).unwrap();
        assert_eq!(result.n, 2);
        assert!((result.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slice_pairs_with_nan_are_dropped() {
        let r = pearson_impl(&[1.0, f64::NAN, 3.0, 4.0], &[2.0, 5.0, 6.0, 8.0]).unwrap();
        let expected = pearson_impl(&[1.0, 3.0, 4.0], &[2.0, 6.0, 8.0]).unwrap();
        assert!(r.is_finite());
        assert!((r - expected).abs() < 1e-12);

        let x = Series::from_options(vec![Some(1.0), None, Some(3.0), Some(4.0)], "x", ColumnKind::Float);
        let y = Series::floats(vec![2.0, 5.0, 6.0, 8.0], "y");
        assert!((correlate_impl(&x, &y).unwrap().r - r).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let x = Series::floats(vec![1.0, 2.0, 3.0], "x");
        let y = Series::floats(vec![1.0, 2.0], "y");
        assert!(matches!(correlate_impl(&x, &y), Err(Error::LengthMismatch { .. })));
        assert!(pearson_impl(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        assert!(pearson_impl(&[1.0, 2.0, 3.0], &[3.0, 3.0, 3.0]).unwrap().is_nan());
        assert!(pearson_impl(&[1.0], &[2.0]).unwrap().is_nan());
        assert!(pearson_impl(&[], &[]).unwrap().is_nan());

        let (direction, strength) = classify_impl(f64::NAN);
        assert_eq!(direction, Direction::Null);
        assert_eq!(strength, Strength::Negligible);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_impl(0.80).1, Strength::Strong);
        assert_eq!(classify_impl(0.799999).1, Strength::Moderate);
        assert_eq!(classify_impl(-0.50).1, Strength::Moderate);
        assert_eq!(classify_impl(0.30).1, Strength::Weak);
        assert_eq!(classify_impl(0.2999).1, Strength::Negligible);
        assert_eq!(classify_impl(0.0), (Direction::Null, Strength::Negligible));
        assert_eq!(classify_impl(-0.1).0, Direction::Negative);
    }

    #[test]
    fn test_perfect_correlation_stays_in_bounds() {
        let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 3.0 + 1.0).collect();
        let r = pearson_impl(&x, &y).unwrap();
        assert!(r <= 1.0 && r > 0.999999);
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        let r = pearson_impl(&x, &neg).unwrap();
        assert!(r >= -1.0 && r < -0.999999);
    }
}
