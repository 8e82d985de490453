//! Flight Feature Engineering
//!
//! Converts raw flight attributes into the numeric feature rows consumed
//! by the delay classifier: HHMM time normalization, cyclical time
//! encodings, carrier bucketing, and reference-table joins.

mod carrier;
mod cyclical;
mod features;
mod time;

pub use carrier::carrier_bucket;
pub use cyclical::{encode_day_of_week, encode_hour, CyclicalPair};
pub use features::{
    FeatureAssembler, FeatureRow, TrainingRow, TripRequest, FEATURE_DIMENSION,
    TRAINING_DIMENSION,
};
pub use time::{departure_hour, format_hhmm, hhmm_of};

use thiserror::Error;

/// Errors during feature construction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Departure time that cannot be reduced to a valid time of day
    #[error("cannot interpret {raw} as an HH:MM time of day")]
    MalformedTime { raw: u32 },

    /// Missing reference data for an airport or route
    #[error(transparent)]
    Lookup(#[from] reference_data::LookupError),
}
