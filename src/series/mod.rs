use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::na::NA;

/// Storage kind of a numeric column
///
/// Values are always computed as `f64`; the kind only decides how a single
/// observation is written back out (`7` for integers, `7.0` for floats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
}

impl ColumnKind {
    /// Render one observation of this kind
    pub fn format_value(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        match self {
            ColumnKind::Integer if value.fract() == 0.0 => format!("{}", value as i64),
            ColumnKind::Float if value.fract() == 0.0 => format!("{:.1}", value),
            _ => format!("{}", value),
        }
    }
}

/// Named numeric column with explicit missing values
#[derive(Debug, Clone)]
pub struct Series {
    /// Observations, NA for missing cells
    values: Vec<NA<f64>>,

    /// Column name
    name: String,

    /// Storage kind
    kind: ColumnKind,
}

impl Series {
    /// Create a Series from NA-wrapped observations
    pub fn new(values: Vec<NA<f64>>, name: impl Into<String>, kind: ColumnKind) -> Self {
        Series {
            values,
            name: name.into(),
            kind,
        }
    }

    /// Create from any numeric vector (no missing values)
    pub fn from_vec<T>(values: Vec<T>, name: impl Into<String>, kind: ColumnKind) -> Result<Self>
    where
        T: ToPrimitive + Debug,
    {
        let name = name.into();
        let mut converted = Vec::with_capacity(values.len());
        for v in values {
            let f = v.to_f64().ok_or_else(|| {
                Error::InvalidValue(format!("cannot convert {:?} in column '{}' to f64", v, name))
            })?;
            converted.push(NA::from_f64(f));
        }
        Ok(Series::new(converted, name, kind))
    }

    /// Create from optional floats, None meaning missing
    pub fn from_options(values: Vec<Option<f64>>, name: impl Into<String>, kind: ColumnKind) -> Self {
        let values = values
            .into_iter()
            .map(|opt| match opt {
                Some(v) => NA::from_f64(v),
                None => NA::NA,
            })
            .collect();
        Series::new(values, name, kind)
    }

    /// Integer column shorthand
    pub fn integers(values: Vec<i64>, name: impl Into<String>) -> Self {
        let values = values.into_iter().map(|v| NA::Value(v as f64)).collect();
        Series::new(values, name, ColumnKind::Integer)
    }

    /// Float column shorthand; NaN inputs become NA
    pub fn floats(values: Vec<f64>, name: impl Into<String>) -> Self {
        let values = values.into_iter().map(NA::from_f64).collect();
        Series::new(values, name, ColumnKind::Float)
    }

    /// Number of rows, missing included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the cell at a row position
    pub fn get(&self, pos: usize) -> Option<&NA<f64>> {
        self.values.get(pos)
    }

    /// All cells, missing included
    pub fn values(&self) -> &[NA<f64>] {
        &self.values
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Number of missing cells
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_na()).count()
    }

    /// Number of present cells
    pub fn value_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_value()).count()
    }

    pub fn has_na(&self) -> bool {
        self.values.iter().any(|v| v.is_na())
    }

    /// Present observations in row order
    pub fn dropna(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| v.value().copied()).collect()
    }

    /// Render one observation using the column's kind
    pub fn format_value(&self, value: f64) -> String {
        self.kind.format_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_creation() {
        let series = Series::integers(vec![6, 5, 8], "stress");
        assert_eq!(series.len(), 3);
        assert_eq!(series.name(), "stress");
        assert_eq!(series.kind(), ColumnKind::Integer);
        assert_eq!(series.get(2), Some(&NA::Value(8.0)));
        assert_eq!(series.get(3), None);
    }

    #[test]
    fn test_series_dropna() {
        let series = Series::from_options(vec![Some(1.5), None, Some(2.5), None], "x", ColumnKind::Float);
        assert_eq!(series.na_count(), 2);
        assert_eq!(series.value_count(), 2);
        assert!(series.has_na());
        assert_eq!(series.dropna(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_floats_nan_is_missing() {
        let series = Series::floats(vec![1.0, f64::NAN], "x");
        assert_eq!(series.na_count(), 1);
    }

    #[test]
    fn test_from_vec_generic() {
        let series = Series::from_vec(vec![1u8, 2, 3], "small", ColumnKind::Integer).unwrap();
        assert_eq!(series.dropna(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_format_value_by_kind() {
        assert_eq!(ColumnKind::Integer.format_value(7.0), "7");
        assert_eq!(ColumnKind::Float.format_value(7.0), "7.0");
        assert_eq!(ColumnKind::Float.format_value(3.5), "3.5");
        assert_eq!(ColumnKind::Integer.format_value(2.5), "2.5");
        assert_eq!(ColumnKind::Float.format_value(f64::NAN), "NaN");
    }
}
