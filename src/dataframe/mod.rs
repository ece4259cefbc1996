//! Row-oriented dataset
//!
//! A `DataFrame` is an ordered sequence of records. Every record carries the
//! same set of columns; the column order is fixed by the first record.

pub mod sample;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::na::NA;
use crate::series::{ColumnKind, Series};

/// A single cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    /// Missing value, `null` in JSON and an empty field in CSV
    NA,
}

impl Value {
    /// Parse a textual cell; empty text and `NA`/`NaN`/`null` are missing
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        match text {
            "" | "NA" | "NaN" | "nan" | "null" => return Ok(Value::NA),
            _ => {}
        }
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::Format(format!("not a numeric cell: '{}'", text)))
    }

    pub fn as_f64(&self) -> NA<f64> {
        match self {
            Value::Int(i) => NA::Value(*i as f64),
            Value::Float(f) => NA::from_f64(*f),
            Value::NA => NA::NA,
        }
    }

    pub fn is_na(&self) -> bool {
        self.as_f64().is_na()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", ColumnKind::Float.format_value(*v)),
            Value::NA => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::NA
        } else {
            Value::Float(v)
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::NA)
    }
}

/// Ordered collection of records sharing one column set
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column names in presentation order
    columns: Vec<String>,

    /// Row-major cells, each row aligned with `columns`
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    pub fn new() -> Self {
        DataFrame::default()
    }

    /// Create an empty frame with a fixed column set
    pub fn with_columns<S: Into<String>>(columns: Vec<S>) -> Result<Self> {
        let mut df = DataFrame::new();
        for name in columns {
            let name = name.into();
            if df.columns.contains(&name) {
                return Err(Error::DuplicateColumnName(name));
            }
            df.columns.push(name);
        }
        Ok(df)
    }

    /// Append a record given as (column, value) pairs
    ///
    /// The first record of an empty, column-less frame fixes the column set.
    /// Later records must name exactly the same columns, in any order.
    pub fn add_row<S, V>(&mut self, record: Vec<(S, V)>) -> Result<()>
    where
        S: AsRef<str>,
        V: Into<Value>,
    {
        if self.columns.is_empty() && self.rows.is_empty() {
            let mut row = Vec::with_capacity(record.len());
            for (name, value) in record {
                let name = name.as_ref().to_string();
                if self.columns.contains(&name) {
                    return Err(Error::DuplicateColumnName(name));
                }
                self.columns.push(name);
                row.push(value.into());
            }
            self.rows.push(row);
            return Ok(());
        }

        if record.len() != self.columns.len() {
            return Err(Error::InconsistentRowCount {
                expected: self.columns.len(),
                found: record.len(),
            });
        }

        let mut row = vec![Value::NA; self.columns.len()];
        let mut seen = vec![false; self.columns.len()];
        for (name, value) in record {
            let pos = self.column_position(name.as_ref())?;
            if seen[pos] {
                return Err(Error::DuplicateColumnName(name.as_ref().to_string()));
            }
            seen[pos] = true;
            row[pos] = value.into();
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a record already aligned with the column order
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InconsistentRowCount {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Cell at (row, column name)
    pub fn get(&self, row: usize, column: &str) -> Result<Value> {
        let pos = self.column_position(column)?;
        self.rows
            .get(row)
            .map(|r| r[pos])
            .ok_or_else(|| Error::InvalidInput(format!("row {} out of range ({} rows)", row, self.rows.len())))
    }

    /// Extract a numeric column
    ///
    /// The column is `Integer` when every present cell is an integer,
    /// `Float` otherwise.
    pub fn column(&self, name: &str) -> Result<Series> {
        let pos = self.column_position(name)?;
        let cells: Vec<Value> = self.rows.iter().map(|r| r[pos]).collect();
        let kind = if cells.iter().all(|v| matches!(v, Value::Int(_) | Value::NA)) {
            ColumnKind::Integer
        } else {
            ColumnKind::Float
        };
        let values = cells.iter().map(Value::as_f64).collect();
        Ok(Series::new(values, name, kind))
    }

    fn column_position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }
}
