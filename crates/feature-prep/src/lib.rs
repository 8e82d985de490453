//! Batch Feature Preparation
//!
//! Loads raw flight records and reference tables from disk, runs the
//! cleaning and feature-engineering passes, and writes the training table
//! consumed by model training.

mod config;

pub use self::config::PrepConfig;

use feature_engine::{FeatureAssembler, TrainingRow};
use flight_records::{clean_records, RawFlightRecord};
use reference_data::{AirportCoordinates, RouteDistances};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Errors during batch preparation
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("failed to read flight records: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse flight records: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Table(#[from] reference_data::TableError),

    #[error(transparent)]
    Feature(#[from] feature_engine::FeatureError),
}

/// Counts reported after a preparation run.
#[derive(Debug, Clone, Copy)]
pub struct PrepSummary {
    pub raw_records: usize,
    pub cleaned_records: usize,
    pub rows_written: usize,
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Read raw flight records from a CSV file.
pub fn read_flight_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawFlightRecord>, PrepError> {
    let mut rdr = csv::Reader::from_reader(File::open(path)?);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Write the training table to a CSV file.
pub fn write_training_table<P: AsRef<Path>>(
    path: P,
    rows: &[TrainingRow],
) -> Result<(), PrepError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the full batch preparation: load, clean, featurize, write.
pub fn run(config: &PrepConfig) -> Result<PrepSummary, PrepError> {
    info!("Loading raw flight records from {}", config.flights_path);
    let raw = read_flight_records(&config.flights_path)?;

    let cleaned = clean_records(&raw);

    let airports = AirportCoordinates::from_csv(&config.airports_path)?;
    let distances = RouteDistances::from_csv(&config.routes_path)?;

    let assembler = FeatureAssembler::new(&airports, &distances);
    let rows = assembler.training_rows(&cleaned)?;

    write_training_table(&config.output_path, &rows)?;
    info!("Wrote {} training rows to {}", rows.len(), config.output_path);

    Ok(PrepSummary {
        raw_records: raw.len(),
        cleaned_records: cleaned.len(),
        rows_written: rows.len(),
    })
}
