//! Flight Record Model and Batch Cleaning
//!
//! Provides the raw on-time performance record type and the cleaning pass
//! that prepares a batch for feature engineering.

mod cleaner;
mod record;

pub use cleaner::{clean_records, MIN_ORIGIN_FLIGHTS};
pub use record::{CleanedRecord, RawFlightRecord};
