use log::info;
use std::path::Path;

use simple_excel_writer::{Row, Workbook};

use crate::error::{Error, Result};
use crate::report::{Cell, Report, Table};

/// Write every report table to an Excel (.xlsx) workbook, one sheet per table
///
/// Sheets appear in export order: Data, CentralTendency, Dispersion,
/// Position, Correlation. Missing and undefined values become empty cells.
///
/// # Example
///
/// ```no_run
/// use statreport::config::ReportConfig;
/// use statreport::dataframe::sample::student_dataset;
/// use statreport::io::write_report_excel;
/// use statreport::report::build_report;
///
/// let df = student_dataset().unwrap();
/// let report = build_report(&df, &ReportConfig::default()).unwrap();
/// write_report_excel(&report, "report.xlsx").unwrap();
/// ```
pub fn write_report_excel<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let path_str = path
        .as_ref()
        .to_str()
        .ok_or_else(|| Error::Excel("file path is not valid UTF-8".to_string()))?;
    let mut workbook = Workbook::create(path_str);

    for table in report.tables() {
        write_sheet(&mut workbook, table)?;
    }

    workbook
        .close()
        .map_err(|e| Error::Excel(format!("could not save workbook: {}", e)))?;
    info!("wrote Excel report to {}", path.as_ref().display());
    Ok(())
}

fn write_sheet(workbook: &mut Workbook, table: &Table) -> Result<()> {
    let mut sheet = workbook.create_sheet(table.name());
    workbook
        .write_sheet(&mut sheet, |sheet_writer| {
            let mut header = Row::new();
            for h in table.headers() {
                header.add_cell(h.as_str());
            }
            sheet_writer.append_row(header)?;

            for cells in table.rows() {
                let mut row = Row::new();
                for cell in cells {
                    match cell {
                        Cell::Text(s) => row.add_cell(s.as_str()),
                        Cell::Int(i) => row.add_cell(*i as f64),
                        Cell::Float(f) if f.is_finite() => row.add_cell(*f),
                        Cell::Float(_) | Cell::Empty => row.add_cell(""),
                    }
                }
                sheet_writer.append_row(row)?;
            }
            Ok(())
        })
        .map_err(|e| Error::Excel(format!("could not write sheet '{}': {}", table.name(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::dataframe::sample::student_dataset;
    use crate::report::build_report;

    #[test]
    fn test_write_report_excel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let df = student_dataset().unwrap();
        let report = build_report(&df, &ReportConfig::default()).unwrap();
        write_report_excel(&report, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
