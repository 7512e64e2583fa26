//! Error types for network edits, distance queries, and seed loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the graph store, the distance engine, and the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("no link from {from} to {to}")]
    UnknownEdge { from: String, to: String },

    #[error("invalid weight {weight}: travel times must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    #[error("distances are stale (computed at revision {computed}, network is at {current})")]
    StaleDistances { computed: u64, current: u64 },

    #[error("network has no nodes")]
    EmptyNetwork,

    #[error("no weather profile for the link from {from} to {to}")]
    NoWeatherProfile { from: String, to: String },
}

/// Errors raised when parsing weather conditions and edit commands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown weather condition: {0} (expected: normal, rain, snow, or storm)")]
    UnknownWeather(String),

    #[error("invalid edit {input:?}: {reason}")]
    InvalidEdit { input: String, reason: String },
}

/// Errors raised while reading a seed file.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("cannot read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read seed data: {0}")]
    Read(#[from] std::io::Error),

    #[error("seed data has no header line")]
    MissingHeader,

    #[error("malformed seed data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Network {
        line: usize,
        #[source]
        source: NetworkError,
    },
}

/// Result alias for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
