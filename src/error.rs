use thiserror::Error;

/// Error type for the fallible outer layers (configuration, tables, CSV input).
///
/// The statistics engine itself never fails on ordinary input; it falls back
/// to well-defined defaults instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("configuration error")]
    Config(#[source] toml::de::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column type mismatch: column {name}, expected {expected}, found {found}")]
    ColumnTypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("inconsistent row length: row {row}, expected {expected}, found {found}")]
    InconsistentRowCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no data: {0}")]
    EmptyData(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
