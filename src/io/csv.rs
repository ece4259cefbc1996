use csv::{ReaderBuilder, Writer};
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::dataframe::{DataFrame, Value};
use crate::error::{Error, Result};
use crate::report::Table;

/// Read a dataset from a CSV file with a header row
///
/// Empty fields and `NA`/`NaN` are missing values; every other field must be
/// numeric.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let df = read_csv_from(file)?;
    info!(
        "read {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        path.as_ref().display()
    );
    Ok(df)
}

/// Read a dataset from any CSV source with a header row
pub fn read_csv_from<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut df = DataFrame::with_columns(headers.clone())?;

    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(Error::Csv)?;
        let row = record
            .iter()
            .zip(headers.iter())
            .map(|(field, header)| {
                Value::parse(field).map_err(|_| {
                    Error::Format(format!(
                        "row {}, column '{}': not a numeric value: '{}'",
                        line + 1,
                        header,
                        field
                    ))
                })
            })
            .collect::<Result<Vec<Value>>>()?;
        df.push_row(row)?;
    }

    Ok(df)
}

/// Write a dataset to a CSV file; missing values become empty fields
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(df.column_names()).map_err(Error::Csv)?;
    for row in df.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))
            .map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

/// Write one report table as CSV
pub fn write_table_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(table.headers()).map_err(Error::Csv)?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.to_string()))
            .map_err(Error::Csv)?;
    }
    wtr.flush().map_err(Error::Io)?;
    Ok(())
}
