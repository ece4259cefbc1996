use thiserror::Error;

/// Error type for the report engine
///
/// Degenerate statistics (empty columns, zero mean, a single observation) are
/// not errors: they surface as NaN results. Only contract violations and
/// I/O failures end up here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("data format error: {0}")]
    Format(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("excel error: {0}")]
    Excel(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
