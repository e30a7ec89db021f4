// File: crates/viz-core/src/error.rs
// Summary: Typed errors for dataset parsing, statistics, chart building and config loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: String },
    #[error("row {row}: field '{field}' is not a number: '{value}'")]
    InvalidNumber { row: usize, field: String, value: String },
    #[error("dataset has no rows")]
    Empty,
}

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("cannot summarise an empty sample")]
    Empty,
    #[error("samples differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("independent variable has zero variance")]
    DegenerateX,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error("unknown country '{0}'")]
    UnknownCountry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("parsing config {path}: {source}")]
    Parse { path: String, source: toml::de::Error },
    #[error("invalid config: {0}")]
    Invalid(String),
}
