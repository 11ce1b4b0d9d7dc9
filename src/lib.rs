//! Descriptive statistics over a one-dimensional numeric dataset.
//!
//! Assign a dataset to a [`DataStats`] engine and query min, max, quantiles,
//! the five-number summary, moments, mode and confidence intervals. Common
//! statistics are cached until the dataset changes. A small column-oriented
//! [`Table`] with CSV input feeds named numeric columns into the engine.

pub mod config;
pub mod error;
pub mod io;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use config::StatsConfig;
pub use error::{Error, Result};
pub use io::{read_csv, read_csv_from_reader};
pub use stats::{correlation, covariance, ConfidenceInterval, DataStats, DescriptiveStats, Fences};
pub use table::{Cell, ColumnType, Table};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
