//! # statreport
//!
//! Descriptive statistics over small tabular datasets: central tendency,
//! dispersion, quartiles/percentiles and Pearson correlation, laid out as
//! report tables ready for text, CSV, JSON or Excel export.
//!
//! ```rust
//! use statreport::config::ReportConfig;
//! use statreport::dataframe::sample::student_dataset;
//! use statreport::report::build_report;
//!
//! let df = student_dataset().unwrap();
//! let report = build_report(&df, &ReportConfig::default()).unwrap();
//! println!("{}", report.central);
//! ```

pub mod config;
pub mod dataframe;
pub mod error;
pub mod io;
pub mod na;
pub mod report;
pub mod series;
pub mod stats;

// Re-export commonly used types
pub use config::{CorrelationPair, ReportConfig};
pub use dataframe::{DataFrame, Value};
pub use error::{Error, Result};
pub use na::NA;
pub use report::{build_report, Report, ReportAssembler, Table};
pub use series::{ColumnKind, Series};
pub use stats::{
    ColumnDispersion, ColumnPosition, ColumnSummary, CorrelationResult, Direction, Locale, Mode,
    Strength,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
