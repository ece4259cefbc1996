//! Report configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file)
//! reproduces the standard student report.
//!
//! ```toml
//! numeric_columns = ["Age", "Math_Grade"]
//! position_columns = ["Math_Grade"]
//! frequency_columns = ["Stress_Level"]
//! locale = "es"
//! parallel = true
//!
//! [[correlations]]
//! x = "Study_Hours"
//! y = "Stats_Grade"
//!
//! [precision]
//! metric = 4
//! cv_percent = 2
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dataframe::sample;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::stats::Locale;

/// A pair of columns to correlate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub x: String,
    pub y: String,
}

impl CorrelationPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        CorrelationPair {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Most decimal places a precision setting may ask for
pub const MAX_PRECISION: u32 = 17;

/// Decimal places applied when building report tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Means, medians, variances, quantiles...
    pub metric: u32,
    /// Coefficient of variation
    pub cv_percent: u32,
    /// r in the correlation table
    pub correlation: u32,
}

impl Precision {
    /// Reject settings beyond what an f64 can carry
    pub fn validate(&self) -> Result<()> {
        for (field, places) in [
            ("metric", self.metric),
            ("cv_percent", self.cv_percent),
            ("correlation", self.correlation),
        ] {
            if places > MAX_PRECISION {
                return Err(Error::Config(format!(
                    "precision.{} = {} exceeds the maximum of {} decimal places",
                    field, places, MAX_PRECISION
                )));
            }
        }
        Ok(())
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            metric: 4,
            cv_percent: 2,
            correlation: 6,
        }
    }
}

/// What the report assembler computes and how it renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Columns summarized in the central tendency and dispersion tables
    pub numeric_columns: Vec<String>,
    /// Columns listed in the position table
    pub position_columns: Vec<String>,
    /// Columns whose value counts get a frequency table; none by default
    pub frequency_columns: Vec<String>,
    pub locale: Locale,
    /// Summarize columns on the rayon thread pool
    pub parallel: bool,
    pub precision: Precision,
    /// Column pairs listed in the correlation table
    pub correlations: Vec<CorrelationPair>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            numeric_columns: sample::NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect(),
            position_columns: vec![sample::MATH_GRADE.to_string(), sample::STATS_GRADE.to_string()],
            frequency_columns: Vec::new(),
            locale: Locale::default(),
            parallel: false,
            precision: Precision::default(),
            correlations: vec![
                CorrelationPair::new(sample::STUDY_HOURS, sample::STATS_GRADE),
                CorrelationPair::new(sample::STRESS_LEVEL, sample::MATH_GRADE),
            ],
        }
    }
}

impl ReportConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded report configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check the precision settings and that every referenced column exists
    pub fn validate(&self, df: &DataFrame) -> Result<()> {
        self.precision.validate()?;

        let referenced = self
            .numeric_columns
            .iter()
            .chain(self.position_columns.iter())
            .chain(self.frequency_columns.iter())
            .chain(self.correlations.iter().flat_map(|p| [&p.x, &p.y]));

        for name in referenced {
            if !df.contains_column(name) {
                return Err(Error::ColumnNotFound(name.clone()));
            }
        }
        Ok(())
    }
}
