//! Column-oriented table of named numeric and text columns.
//!
//! Numeric columns are analysed through a single owned [`DataStats`] engine.
//! The engine keeps the most recently queried column assigned, so repeated
//! queries against one column reuse its cached statistics.

use crate::config::StatsConfig;
use crate::error::{Error, Result};
use crate::stats::{DataStats, DescriptiveStats};

/// Declared type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl ColumnType {
    fn name(self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Text => "text",
        }
    }
}

/// A single input cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

#[derive(Debug, Clone)]
enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Numeric(_) => ColumnType::Numeric,
            ColumnData::Text(_) => ColumnType::Text,
        }
    }
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    data: ColumnData,
}

/// Table of named columns with per-column statistics
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
    stats: DataStats,
    // column assigned to `stats` and the engine generation it produced
    active: Option<(usize, u64)>,
}

impl Table {
    /// Build a table from row-major cells.
    ///
    /// Every row must have exactly one cell per header. Text cells in a
    /// numeric column are parsed; empty ones are treated as missing and
    /// unparsable or non-finite ones (`NaN`, `inf`) are skipped with a warning. Numbers in a text column
    /// are stored in their display form.
    pub fn from_rows<S: AsRef<str>>(
        headers: &[S],
        types: &[ColumnType],
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self> {
        if headers.len() != types.len() {
            return Err(Error::InvalidValue(format!(
                "{} headers but {} column types",
                headers.len(),
                types.len()
            )));
        }

        let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
        for (header, &ty) in headers.iter().zip(types) {
            let name = header.as_ref().to_string();
            if columns.iter().any(|c| c.name == name) {
                return Err(Error::InvalidValue(format!("duplicate column name: {}", name)));
            }
            let data = match ty {
                ColumnType::Numeric => ColumnData::Numeric(Vec::with_capacity(rows.len())),
                ColumnType::Text => ColumnData::Text(Vec::with_capacity(rows.len())),
            };
            columns.push(Column { name, data });
        }

        let row_count = rows.len();
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::InconsistentRowCount {
                    row: row_idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }

            for (column, cell) in columns.iter_mut().zip(row) {
                push_cell(column, cell, row_idx);
            }
        }

        log::debug!(
            "built table with {} columns and {} rows",
            columns.len(),
            row_count
        );

        Ok(Table {
            columns,
            row_count,
            stats: DataStats::new(),
            active: None,
        })
    }

    /// Use a custom engine configuration for column statistics.
    ///
    /// Fails when the configuration does not validate.
    pub fn with_stats_config(mut self, config: StatsConfig) -> Result<Self> {
        self.stats = DataStats::with_config(config)?;
        self.active = None;
        Ok(self)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        Ok(self.columns[self.position(name)?].data.column_type())
    }

    /// Values of a numeric column, missing cells excluded
    pub fn numeric_column(&self, name: &str) -> Result<&[f64]> {
        let idx = self.position(name)?;
        match &self.columns[idx].data {
            ColumnData::Numeric(values) => Ok(values),
            other => Err(type_mismatch(name, ColumnType::Numeric, other.column_type())),
        }
    }

    pub fn text_column(&self, name: &str) -> Result<&[String]> {
        let idx = self.position(name)?;
        match &self.columns[idx].data {
            ColumnData::Text(values) => Ok(values),
            other => Err(type_mismatch(name, ColumnType::Text, other.column_type())),
        }
    }

    /// Statistics engine with the named numeric column assigned.
    ///
    /// Fails for unknown, text or empty columns. If the returned engine is
    /// reassigned by the caller, the next query reloads the column.
    pub fn column_stats(&mut self, name: &str) -> Result<&mut DataStats> {
        let idx = self.position(name)?;
        let values = match &self.columns[idx].data {
            ColumnData::Numeric(values) => values,
            other => return Err(type_mismatch(name, ColumnType::Numeric, other.column_type())),
        };
        if values.is_empty() {
            return Err(Error::EmptyData(format!("column {} has no numeric values", name)));
        }

        if self.active != Some((idx, self.stats.generation())) {
            self.stats.assign(values);
            self.active = Some((idx, self.stats.generation()));
        }
        Ok(&mut self.stats)
    }

    /// Quantile sequence of a numeric column, see [`DataStats::quantiles`]
    pub fn quantiles(&mut self, name: &str, p: f64) -> Result<Vec<f64>> {
        Ok(self.column_stats(name)?.quantiles(p))
    }

    pub fn mean(&mut self, name: &str) -> Result<f64> {
        Ok(self.column_stats(name)?.mean())
    }

    pub fn std(&mut self, name: &str) -> Result<f64> {
        Ok(self.column_stats(name)?.std())
    }

    pub fn describe(&mut self, name: &str) -> Result<DescriptiveStats> {
        self.column_stats(name)?.describe()
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }
}

fn type_mismatch(name: &str, expected: ColumnType, found: ColumnType) -> Error {
    Error::ColumnTypeMismatch {
        name: name.to_string(),
        expected: expected.name(),
        found: found.name(),
    }
}

/// Parse a finite number; `NaN` and infinities count as non-numeric text
pub(crate) fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn push_cell(column: &mut Column, cell: Cell, row: usize) {
    match (&mut column.data, cell) {
        (ColumnData::Numeric(values), Cell::Number(x)) => values.push(x),
        (ColumnData::Numeric(values), Cell::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return;
            }
            match parse_finite(trimmed) {
                Some(x) => values.push(x),
                None => log::warn!(
                    "column {}, row {}: skipping non-numeric value {:?}",
                    column.name,
                    row,
                    s
                ),
            }
        }
        (ColumnData::Text(values), Cell::Text(s)) => values.push(s),
        (ColumnData::Text(values), Cell::Number(x)) => values.push(x.to_string()),
    }
}
