//! Reference Table Error Types

use thiserror::Error;

/// Errors for lookups against the loaded tables.
///
/// A missing airport or route is a caller contract violation, never a
/// zero-fill: the pipeline has no fallback estimate for either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Airport code absent from the coordinates table
    #[error("unknown airport code: {0}")]
    UnknownAirport(String),

    /// Route absent from the distance table
    #[error("no recorded distance for route {origin}-{dest}")]
    UnknownRoute { origin: String, dest: String },

    /// Airline display name absent from the directory
    #[error("unknown airline: {0}")]
    UnknownAirline(String),
}

/// Errors while loading a table from disk.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse reference table: {0}")]
    Csv(#[from] csv::Error),
}
