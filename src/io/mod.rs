pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod json;

// Re-export commonly used functions
pub use csv::{read_csv, write_csv, write_table_csv};
#[cfg(feature = "excel")]
pub use excel::write_report_excel;
pub use json::{read_json, read_json_from, write_report_json, write_report_json_to};
