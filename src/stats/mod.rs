//! Statistical summarization engine
//!
//! Four independent summaries over a numeric column (or a pair of columns):
//! central tendency, dispersion, position (quartiles/percentiles) and
//! Pearson correlation. Every function is pure: missing values are dropped
//! before computing, and degenerate inputs (no data, a single observation,
//! zero mean, zero variance) yield NaN rather than an error.
//!
//! Results keep full precision. Rounding is a presentation concern, see
//! [`round_to`].

pub mod central;
pub mod correlation;
pub mod dispersion;
pub mod quantile;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::series::{ColumnKind, Series};

/// Language used for sentinels and narrative labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            other => Err(format!("unknown locale '{}', expected 'en' or 'es'", other)),
        }
    }
}

/// Mode of a column under the repeat-only policy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Mode {
    /// No observations at all
    Empty,
    /// Observations exist but none repeats
    NoMode,
    /// Exactly one value has the highest frequency
    Single(f64),
    /// Several values tie for the highest frequency, ascending
    Multiple(Vec<f64>),
}

impl Mode {
    /// Sentinel text for [`Mode::NoMode`]
    pub fn no_mode_label(locale: Locale) -> &'static str {
        match locale {
            Locale::En => "No mode",
            Locale::Es => "No hay moda",
        }
    }

    /// Render for a table cell; multiple modes are joined with ", "
    pub fn render(&self, kind: ColumnKind, locale: Locale) -> String {
        match self {
            Mode::Empty => String::new(),
            Mode::NoMode => Self::no_mode_label(locale).to_string(),
            Mode::Single(v) => kind.format_value(*v),
            Mode::Multiple(vs) => vs
                .iter()
                .map(|v| kind.format_value(*v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Mean, median and mode of one column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Storage kind, used when rendering the mode
    pub kind: ColumnKind,
    /// Non-missing observations
    pub count: usize,
    pub mean: f64,
    /// 50th percentile, linear interpolation
    pub median: f64,
    pub mode: Mode,
}

/// Spread of one column (sample statistics)
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDispersion {
    pub name: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Sample variance, divisor n-1
    pub variance: f64,
    /// Sample standard deviation
    pub std: f64,
    /// std / mean * 100, NaN when the mean is zero
    pub cv_percent: f64,
}

/// Quartiles and the matching percentiles of one column
///
/// `q1 == p25`, `q2 == p50` and `q3 == p75` by construction; both labels are
/// kept for consumers that expect either.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPosition {
    pub name: String,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

/// Strength band of |r|, lower edge inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// |r| >= 0.80
    Strong,
    /// |r| >= 0.50
    Moderate,
    /// |r| >= 0.30
    Weak,
    /// anything below, NaN included
    Negligible,
}

impl Strength {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Strength::Strong, Locale::En) => "strong",
            (Strength::Moderate, Locale::En) => "moderate",
            (Strength::Weak, Locale::En) => "weak",
            (Strength::Negligible, Locale::En) => "very weak or negligible",
            (Strength::Strong, Locale::Es) => "fuerte",
            (Strength::Moderate, Locale::Es) => "moderada",
            (Strength::Weak, Locale::Es) => "débil",
            (Strength::Negligible, Locale::Es) => "muy débil o casi nula",
        }
    }
}

/// Sign of r
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
    /// r is exactly zero or undefined
    Null,
}

impl Direction {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Direction::Positive, Locale::En) => "positive",
            (Direction::Negative, Locale::En) => "negative",
            (Direction::Null, Locale::En) => "null",
            (Direction::Positive, Locale::Es) => "positiva",
            (Direction::Negative, Locale::Es) => "negativa",
            (Direction::Null, Locale::Es) => "nula",
        }
    }
}

/// Pearson correlation between two columns
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    pub column_a: String,
    pub column_b: String,
    /// Row-paired observations that entered the computation
    pub n: usize,
    /// Pearson r in [-1, 1], NaN when undefined
    pub r: f64,
    pub strength: Strength,
    pub direction: Direction,
}

impl CorrelationResult {
    /// Narrative label, r to three decimals
    pub fn label(&self, locale: Locale) -> String {
        interpret(self.r, locale)
    }
}

impl fmt::Display for CorrelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}: {}", self.column_a, self.column_b, self.label(Locale::En))
    }
}

/// Central tendency of a column
///
/// # Example
/// ```rust
/// use statreport::series::Series;
/// use statreport::stats::{self, Mode};
///
/// let stress = Series::integers(vec![6, 5, 8, 7, 4, 6, 7, 5, 4, 9, 3, 7], "stress");
/// let summary = stats::central_tendency(&stress);
/// assert_eq!(summary.mode, Mode::Single(7.0));
/// ```
pub fn central_tendency(series: &Series) -> ColumnSummary {
    central::summarize_impl(series)
}

/// Dispersion of a column
pub fn dispersion(series: &Series) -> ColumnDispersion {
    dispersion::summarize_impl(series)
}

/// Quartiles and percentiles of a column
pub fn positions(series: &Series) -> ColumnPosition {
    quantile::positions_impl(series)
}

/// Pearson correlation between two columns of the same record set
///
/// Rows where either side is missing are dropped from both columns.
/// Columns of different length are a caller error.
///
/// # Example
/// ```rust
/// use statreport::series::Series;
/// use statreport::stats;
///
/// let x = Series::integers(vec![1, 2, 3, 4, 5], "x");
/// let y = Series::floats(vec![2.0, 4.1, 5.9, 8.2, 9.9], "y");
/// let result = stats::correlate(&x, &y).unwrap();
/// assert!(result.r > 0.99);
/// assert!(result.label(stats::Locale::En).starts_with("positive strong"));
/// ```
pub fn correlate(x: &Series, y: &Series) -> Result<CorrelationResult> {
    correlation::correlate_impl(x, y)
}

/// Arithmetic mean, NaN when empty
pub fn mean<T: AsRef<[f64]>>(data: T) -> f64 {
    central::mean_impl(data.as_ref())
}

/// Median by linear interpolation, NaN when empty
pub fn median<T: AsRef<[f64]>>(data: T) -> f64 {
    quantile::median_impl(data.as_ref())
}

/// Mode under the repeat-only policy
pub fn mode<T: AsRef<[f64]>>(data: T) -> Mode {
    central::mode_impl(data.as_ref())
}

/// Distinct values with their counts, ascending by value
pub fn frequency_table<T: AsRef<[f64]>>(data: T) -> Vec<(f64, usize)> {
    central::frequency_table_impl(data.as_ref())
}

/// Sample variance (n-1), NaN for fewer than two observations
pub fn variance<T: AsRef<[f64]>>(data: T) -> f64 {
    dispersion::variance_impl(data.as_ref())
}

/// Quantile at `p` in [0, 1] by linear interpolation
pub fn quantile<T: AsRef<[f64]>>(data: T, p: f64) -> Result<f64> {
    quantile::quantile_impl(data.as_ref(), p)
}

/// Percentile at `p` in [0, 100]
pub fn percentile<T: AsRef<[f64]>>(data: T, p: f64) -> Result<f64> {
    quantile::quantile_impl(data.as_ref(), p / 100.0)
}

/// Pearson r of two equal-length slices
pub fn pearson<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    correlation::pearson_impl(x.as_ref(), y.as_ref())
}

/// Direction and strength of r
pub fn classify(r: f64) -> (Direction, Strength) {
    correlation::classify_impl(r)
}

/// "<direction> <strength> correlation (r=0.000)" in the given locale
pub fn interpret(r: f64, locale: Locale) -> String {
    let (direction, strength) = classify(r);
    match locale {
        Locale::En => format!(
            "{} {} correlation (r={:.3})",
            direction.label(locale),
            strength.label(locale),
            r
        ),
        Locale::Es => format!(
            "Correlación {} {} (r={:.3}).",
            direction.label(locale),
            strength.label(locale),
            r
        ),
    }
}

/// Round to `places` decimals through the exact decimal expansion
///
/// Rounds the value actually stored, so `2.675` (held just below the tie)
/// gives `2.67`. NaN and infinities pass through.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.57499999, 4), 3.575);
        assert_eq!(round_to(18.59762208986123, 2), 18.6);
        assert_eq!(round_to(-0.97658, 3), -0.977);
        assert!(round_to(f64::NAN, 4).is_nan());
    }

    #[test]
    fn test_round_to_uses_decimal_expansion() {
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn test_round_to_large_places_keeps_value() {
        assert_eq!(round_to(3.5749999999999997, 400), 3.5749999999999997);
        assert_eq!(round_to(1e300, 320), 1e300);
    }

    #[test]
    fn test_round_to_is_idempotent_through_text() {
        let samples = [3.5749999999999997, 0.44204545454545446, 12.181818181818182, -0.9765884764339077, 1e-7];
        for value in samples {
            let rounded = round_to(value, 4);
            let reparsed: f64 = rounded.to_string().parse().unwrap();
            assert_eq!(round_to(reparsed, 4), rounded);
            assert_eq!(round_to(rounded, 4), rounded);
        }
    }

    #[test]
    fn test_mode_render() {
        assert_eq!(Mode::Empty.render(ColumnKind::Float, Locale::En), "");
        assert_eq!(Mode::NoMode.render(ColumnKind::Float, Locale::En), "No mode");
        assert_eq!(Mode::NoMode.render(ColumnKind::Float, Locale::Es), "No hay moda");
        assert_eq!(Mode::Single(7.0).render(ColumnKind::Integer, Locale::En), "7");
        assert_eq!(
            Mode::Multiple(vec![18.0, 20.0]).render(ColumnKind::Integer, Locale::En),
            "18, 20"
        );
        assert_eq!(
            Mode::Multiple(vec![2.5, 3.0]).render(ColumnKind::Float, Locale::En),
            "2.5, 3.0"
        );
    }

    #[test]
    fn test_interpret_labels() {
        assert_eq!(interpret(0.988502522229374, Locale::En), "positive strong correlation (r=0.989)");
        assert_eq!(
            interpret(-0.9765884764339077, Locale::Es),
            "Correlación negativa fuerte (r=-0.977)."
        );
        assert_eq!(interpret(0.0, Locale::En), "null very weak or negligible correlation (r=0.000)");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_percentile_matches_quantile() {
        let data = [3.5, 4.0, 2.8, 3.2, 4.5, 3.7, 2.9, 3.8, 4.1, 2.5, 4.6, 3.3];
        assert_eq!(percentile(data, 25.0).unwrap(), quantile(data, 0.25).unwrap());
        assert_eq!(percentile(data, 75.0).unwrap(), quantile(data, 0.75).unwrap());
    }
}
