//! Plain tabular output handed to presentation and export collaborators

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::dataframe::Value;
use crate::error::{Error, Result};

/// One table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    /// NaN serializes as `null`
    Float(f64),
    Empty,
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self {
        match v {
            Value::Int(i) => Cell::Int(i),
            Value::Float(f) if f.is_nan() => Cell::Empty,
            Value::Float(f) => Cell::Float(f),
            Value::NA => Cell::Empty,
        }
    }
}

/// Named table: a header row plus data rows of equal width
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(name: impl Into<String>, headers: Vec<S>) -> Self {
        Table {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; its width must match the header
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(Error::LengthMismatch {
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell by row position and header name
    pub fn get(&self, row: usize, header: &str) -> Option<&Cell> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// First row whose leading cell is the given text (the row key)
    pub fn find_row(&self, key: &str) -> Option<&[Cell]> {
        self.rows
            .iter()
            .find(|r| r.first().and_then(Cell::as_str) == Some(key))
            .map(|r| r.as_slice())
    }
}

/// One row serialized as a header → cell map, in header order
struct RecordView<'a> {
    headers: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells.iter()) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let records: Vec<RecordView<'_>> = self
            .rows
            .iter()
            .map(|cells| RecordView {
                headers: &self.headers,
                cells,
            })
            .collect();

        let mut state = serializer.serialize_struct("Table", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("columns", &self.headers)?;
        state.serialize_field("records", &records)?;
        state.end()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &rendered {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        writeln!(f, "{}", self.name)?;
        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(widths.iter())
            .map(|(h, &w)| format!("{:<w$}", h, w = w))
            .collect();
        writeln!(f, "{}", header_line.join(" | ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &rendered {
            let line: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .map(|(c, &w)| format!("{:<w$}", c, w = w))
                .collect();
            writeln!(f, "{}", line.join(" | ").trim_end())?;
        }
        Ok(())
    }
}
