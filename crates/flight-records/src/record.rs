//! Flight Record Types

use serde::{Deserialize, Serialize};

/// A historical flight as reported in the on-time performance data.
///
/// Numeric fields arrive as floats with gaps, and `CANCELLED` is a 0/1
/// flag. Column names follow the reporting format so records deserialize
/// straight from the source CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFlightRecord {
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "DAY_OF_MONTH")]
    pub day_of_month: u32,
    #[serde(rename = "DAY_OF_WEEK")]
    pub day_of_week: u32,
    /// Departure time in the HHMM integer encoding, when reported.
    #[serde(rename = "DEP_TIME")]
    pub dep_time: Option<f64>,
    /// Arrival time in the HHMM integer encoding, when reported.
    #[serde(rename = "ARR_TIME")]
    pub arr_time: Option<f64>,
    /// Arrival delay in minutes, when reported.
    #[serde(rename = "ARR_DELAY")]
    pub arr_delay: Option<f64>,
    #[serde(rename = "CANCELLED")]
    pub cancelled: f64,
    #[serde(rename = "ORIGIN")]
    pub origin: String,
    #[serde(rename = "DEST")]
    pub dest: String,
    #[serde(rename = "OP_UNIQUE_CARRIER")]
    pub carrier: String,
    #[serde(rename = "DISTANCE")]
    pub distance: Option<f64>,
}

impl RawFlightRecord {
    /// Whether the flight was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled != 0.0
    }

    /// A record is usable only if the flight operated and reported both an
    /// arrival time and an arrival delay.
    pub fn is_usable(&self) -> bool {
        !self.is_cancelled() && self.arr_time.is_some() && self.arr_delay.is_some()
    }

    /// Materialize the record with gaps zero-filled, the delay target
    /// labeled, and the origin's batch frequency attached.
    pub(crate) fn to_cleaned(&self, origin_count: u64) -> CleanedRecord {
        let arr_delay = self.arr_delay.unwrap_or(0.0);
        CleanedRecord {
            year: self.year,
            month: self.month,
            day_of_month: self.day_of_month,
            day_of_week: self.day_of_week,
            dep_time: self.dep_time.unwrap_or(0.0) as u32,
            arr_time: self.arr_time.unwrap_or(0.0) as u32,
            arr_delay,
            origin: self.origin.clone(),
            dest: self.dest.clone(),
            carrier: self.carrier.clone(),
            distance: self.distance.unwrap_or(0.0),
            target: (arr_delay > 0.0) as u8,
            origin_count,
        }
    }
}

/// A record that survived cleaning: no gaps remain, the binary delay
/// target is labeled, and the origin's frequency in the batch is attached.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedRecord {
    pub year: i32,
    pub month: u32,
    pub day_of_month: u32,
    pub day_of_week: u32,
    /// Departure time as an HHMM integer.
    pub dep_time: u32,
    /// Arrival time as an HHMM integer.
    pub arr_time: u32,
    pub arr_delay: f64,
    pub origin: String,
    pub dest: String,
    pub carrier: String,
    pub distance: f64,
    /// 1 if the flight arrived late at all, 0 otherwise.
    pub target: u8,
    /// How many flights the origin airport had in this batch.
    pub origin_count: u64,
}
