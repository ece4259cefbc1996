use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::dataframe::{DataFrame, Value};
use crate::error::{Error, Result};
use crate::report::Report;

/// Read a dataset from a JSON file holding an array of records
///
/// `[{"Age": 18, "Math_Grade": 3.5}, ...]`; `null` is a missing value.
/// Columns follow the key order of the first record.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let df = read_json_from(BufReader::new(file))?;
    info!("read {} records from {}", df.row_count(), path.as_ref().display());
    Ok(df)
}

/// Read records from any JSON source
pub fn read_json_from<R: Read>(reader: R) -> Result<DataFrame> {
    let json_value: JsonValue = serde_json::from_reader(reader).map_err(Error::Json)?;
    let array = match json_value {
        JsonValue::Array(array) => array,
        _ => {
            return Err(Error::Format(
                "JSON dataset must be an array of records".to_string(),
            ))
        }
    };

    let mut df = DataFrame::new();
    for (i, item) in array.into_iter().enumerate() {
        let map = match item {
            JsonValue::Object(map) => map,
            _ => {
                return Err(Error::Format(format!("record {} is not an object", i)));
            }
        };
        let record = map
            .into_iter()
            .map(|(key, v)| {
                serde_json::from_value::<Value>(v)
                    .map(|value| (key.clone(), value))
                    .map_err(|_| Error::Format(format!("record {}, column '{}': not a numeric value", i, key)))
            })
            .collect::<Result<Vec<(String, Value)>>>()?;
        df.add_row(record)?;
    }
    Ok(df)
}

/// Write a whole report as pretty-printed JSON to a file
pub fn write_report_json<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    write_report_json_to(report, BufWriter::new(file))?;
    info!("wrote JSON report to {}", path.as_ref().display());
    Ok(())
}

/// Write a whole report as pretty-printed JSON
pub fn write_report_json_to<W: Write>(report: &Report, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report).map_err(Error::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records() {
        let text = r#"[{"a": 1, "b": 2.5}, {"b": null, "a": 3}]"#;
        let df = read_json_from(text.as_bytes()).unwrap();
        assert_eq!(df.row_count(), 2);
        assert_eq!(df.get(1, "a").unwrap(), Value::Int(3));
        assert_eq!(df.get(1, "b").unwrap(), Value::NA);
    }

    #[test]
    fn test_columns_keep_source_order() {
        let text = r#"[{"zeta": 1, "alpha": 2, "mid": 3}, {"mid": 6, "zeta": 4, "alpha": 5}]"#;
        let df = read_json_from(text.as_bytes()).unwrap();
        assert_eq!(df.column_names(), &["zeta".to_string(), "alpha".to_string(), "mid".to_string()]);
        assert_eq!(df.get(1, "alpha").unwrap(), Value::Int(5));
    }

    #[test]
    fn test_read_rejects_non_array() {
        assert!(matches!(
            read_json_from(r#"{"a": [1, 2]}"#.as_bytes()),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            read_json_from(r#"[{"a": "x"}]"#.as_bytes()),
            Err(Error::Format(_))
        ));
        assert!(matches!(read_json_from("[1, 2]".as_bytes()), Err(Error::Format(_))));
    }
}
