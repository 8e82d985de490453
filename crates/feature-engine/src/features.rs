//! Feature Row Assembly

use crate::carrier::carrier_bucket;
use crate::cyclical::{encode_day_of_week, encode_hour};
use crate::time::{departure_hour, hhmm_of};
use crate::FeatureError;
use chrono::{Datelike, NaiveDateTime};
use flight_records::CleanedRecord;
use reference_data::{AirportCoordinates, RouteDistances};
use serde::Serialize;
use tracing::debug;

/// Number of features in the prediction row.
pub const FEATURE_DIMENSION: usize = 11;

/// Number of features in a training row (target excluded).
pub const TRAINING_DIMENSION: usize = 15;

/// A single trip to score, as captured from the caller.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub origin: String,
    pub dest: String,
    /// Two-letter carrier code, already resolved from the airline name.
    pub carrier: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

/// The fixed-order numeric row handed to the classifier.
///
/// Field order and naming are an external contract set by the trained
/// model artifact; `to_values` emits them in exactly that order.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRow {
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "DAY_OF_MONTH")]
    pub day_of_month: u32,
    #[serde(rename = "DEP_TIME")]
    pub dep_time: u32,
    #[serde(rename = "ARR_TIME")]
    pub arr_time: u32,
    pub carrier_bucket: u8,
    #[serde(rename = "DISTANCE")]
    pub distance: f64,
    #[serde(rename = "ORIGIN_LATITUDE")]
    pub origin_latitude: f64,
    #[serde(rename = "ORIGIN_LONGITUDE")]
    pub origin_longitude: f64,
    #[serde(rename = "DEST_LATITUDE")]
    pub dest_latitude: f64,
    #[serde(rename = "DEST_LONGITUDE")]
    pub dest_longitude: f64,
}

impl FeatureRow {
    /// Feature values in the exact order the trained model expects.
    pub fn to_values(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.year as f64,
            self.month as f64,
            self.day_of_month as f64,
            self.dep_time as f64,
            self.arr_time as f64,
            self.carrier_bucket as f64,
            self.distance,
            self.origin_latitude,
            self.origin_longitude,
            self.dest_latitude,
            self.dest_longitude,
        ]
    }
}

/// A training-table row: the prediction features plus the cyclical
/// encodings and the binary delay target.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingRow {
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "DAY_OF_MONTH")]
    pub day_of_month: u32,
    #[serde(rename = "DEP_TIME")]
    pub dep_time: u32,
    #[serde(rename = "ARR_TIME")]
    pub arr_time: u32,
    pub carrier_bucket: u8,
    #[serde(rename = "DISTANCE")]
    pub distance: f64,
    #[serde(rename = "ORIGIN_LATITUDE")]
    pub origin_latitude: f64,
    #[serde(rename = "ORIGIN_LONGITUDE")]
    pub origin_longitude: f64,
    #[serde(rename = "DEST_LATITUDE")]
    pub dest_latitude: f64,
    #[serde(rename = "DEST_LONGITUDE")]
    pub dest_longitude: f64,
    pub sin_hour: f64,
    pub cos_hour: f64,
    pub sin_day: f64,
    pub cos_day: f64,
    pub target: u8,
}

impl TrainingRow {
    /// Feature values in training-table order, target excluded.
    pub fn to_values(&self) -> [f64; TRAINING_DIMENSION] {
        [
            self.year as f64,
            self.month as f64,
            self.day_of_month as f64,
            self.dep_time as f64,
            self.arr_time as f64,
            self.carrier_bucket as f64,
            self.distance,
            self.origin_latitude,
            self.origin_longitude,
            self.dest_latitude,
            self.dest_longitude,
            self.sin_hour,
            self.cos_hour,
            self.sin_day,
            self.cos_day,
        ]
    }
}

/// Assembles feature rows against the loaded reference tables.
///
/// Holds shared references only; the tables stay immutable and may be
/// used from any number of assemblers concurrently.
pub struct FeatureAssembler<'a> {
    airports: &'a AirportCoordinates,
    distances: &'a RouteDistances,
}

impl<'a> FeatureAssembler<'a> {
    pub fn new(airports: &'a AirportCoordinates, distances: &'a RouteDistances) -> Self {
        Self { airports, distances }
    }

    /// Build the prediction row for a single trip.
    ///
    /// Any missing reference entry aborts assembly; a row is either fully
    /// valid or not produced at all.
    pub fn assemble(&self, trip: &TripRequest) -> Result<FeatureRow, FeatureError> {
        let distance = self.distances.lookup(&trip.origin, &trip.dest)?;
        let (origin_latitude, origin_longitude) = self.airports.lookup(&trip.origin)?;
        let (dest_latitude, dest_longitude) = self.airports.lookup(&trip.dest)?;

        debug!(
            "Assembled prediction features for {} -> {} on {}",
            trip.origin, trip.dest, trip.carrier
        );

        Ok(FeatureRow {
            year: trip.departure.year(),
            month: trip.departure.month(),
            day_of_month: trip.departure.day(),
            dep_time: hhmm_of(trip.departure),
            arr_time: hhmm_of(trip.arrival),
            carrier_bucket: carrier_bucket(&trip.carrier),
            distance,
            origin_latitude,
            origin_longitude,
            dest_latitude,
            dest_longitude,
        })
    }

    /// Build a training row from a cleaned historical record.
    ///
    /// The record's own reported distance is used; coordinates still come
    /// from the table, and a record whose departure time fails
    /// normalization is an error, not a silent drop.
    pub fn training_row(&self, record: &CleanedRecord) -> Result<TrainingRow, FeatureError> {
        let hour = departure_hour(record.dep_time)?;
        let hour_cycle = encode_hour(hour);
        let day_cycle = encode_day_of_week(record.day_of_week);
        let (origin_latitude, origin_longitude) = self.airports.lookup(&record.origin)?;
        let (dest_latitude, dest_longitude) = self.airports.lookup(&record.dest)?;

        Ok(TrainingRow {
            year: record.year,
            month: record.month,
            day_of_month: record.day_of_month,
            dep_time: record.dep_time,
            arr_time: record.arr_time,
            carrier_bucket: carrier_bucket(&record.carrier),
            distance: record.distance,
            origin_latitude,
            origin_longitude,
            dest_latitude,
            dest_longitude,
            sin_hour: hour_cycle.sin,
            cos_hour: hour_cycle.cos,
            sin_day: day_cycle.sin,
            cos_day: day_cycle.cos,
            target: record.target,
        })
    }

    /// Build the full training table for a cleaned batch.
    pub fn training_rows(
        &self,
        records: &[CleanedRecord],
    ) -> Result<Vec<TrainingRow>, FeatureError> {
        records.iter().map(|r| self.training_row(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reference_data::LookupError;

    fn airports() -> AirportCoordinates {
        AirportCoordinates::from_entries([
            ("ATL".to_string(), 33.6407, -84.4277),
            ("LAX".to_string(), 33.9416, -118.4085),
        ])
    }

    fn distances() -> RouteDistances {
        RouteDistances::from_entries([("ATL".to_string(), "LAX".to_string(), 1946.0)])
    }

    fn trip(origin: &str, dest: &str) -> TripRequest {
        TripRequest {
            origin: origin.to_string(),
            dest: dest.to_string(),
            carrier: "DL".to_string(),
            departure: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            arrival: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(11, 15, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_assemble_atl_to_lax() {
        let airports = airports();
        let distances = distances();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let row = assembler.assemble(&trip("ATL", "LAX")).unwrap();
        assert_eq!(row.year, 2024);
        assert_eq!(row.month, 3);
        assert_eq!(row.day_of_month, 1);
        assert_eq!(row.dep_time, 830);
        assert_eq!(row.arr_time, 1115);
        assert_eq!(row.carrier_bucket, 2);
        assert_eq!(row.distance, 1946.0);
        assert_eq!(row.origin_latitude, 33.6407);
        assert_eq!(row.origin_longitude, -84.4277);
        assert_eq!(row.dest_latitude, 33.9416);
        assert_eq!(row.dest_longitude, -118.4085);
    }

    #[test]
    fn test_values_preserve_model_order() {
        let airports = airports();
        let distances = distances();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let values = assembler.assemble(&trip("ATL", "LAX")).unwrap().to_values();
        assert_eq!(values.len(), FEATURE_DIMENSION);
        assert_eq!(values[0], 2024.0);
        assert_eq!(values[3], 830.0);
        assert_eq!(values[5], 2.0);
        assert_eq!(values[6], 1946.0);
        assert_eq!(values[10], -118.4085);
    }

    #[test]
    fn test_unknown_destination_produces_no_row() {
        let airports = airports();
        let distances =
            RouteDistances::from_entries([("ATL".to_string(), "ZZZ".to_string(), 100.0)]);
        let assembler = FeatureAssembler::new(&airports, &distances);

        let err = assembler.assemble(&trip("ATL", "ZZZ")).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Lookup(LookupError::UnknownAirport(code)) if code == "ZZZ"
        ));
    }

    #[test]
    fn test_unknown_route_produces_no_row() {
        let airports = airports();
        let distances = RouteDistances::default();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let err = assembler.assemble(&trip("ATL", "LAX")).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Lookup(LookupError::UnknownRoute { .. })
        ));
    }

    fn cleaned_record(dep_time: u32) -> CleanedRecord {
        CleanedRecord {
            year: 2023,
            month: 6,
            day_of_month: 15,
            day_of_week: 4,
            dep_time,
            arr_time: 1115,
            arr_delay: 12.0,
            origin: "ATL".to_string(),
            dest: "LAX".to_string(),
            carrier: "WN".to_string(),
            distance: 1946.0,
            target: 1,
            origin_count: 31278,
        }
    }

    #[test]
    fn test_training_row_from_record() {
        let airports = airports();
        let distances = distances();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let row = assembler.training_row(&cleaned_record(830)).unwrap();
        assert_eq!(row.carrier_bucket, 1);
        assert_eq!(row.distance, 1946.0);
        assert_eq!(row.target, 1);

        // 08:30 departs in hour 8: sin(2π·8/24) = sin(2π/3).
        let expected_sin = (2.0 * std::f64::consts::PI / 3.0).sin();
        assert!((row.sin_hour - expected_sin).abs() < 1e-9);
        assert_eq!(row.to_values().len(), TRAINING_DIMENSION);
    }

    #[test]
    fn test_training_row_rejects_malformed_time() {
        let airports = airports();
        let distances = distances();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let err = assembler.training_row(&cleaned_record(1299)).unwrap_err();
        assert!(matches!(err, FeatureError::MalformedTime { raw: 1299 }));
    }

    #[test]
    fn test_training_rows_fail_on_first_bad_record() {
        let airports = airports();
        let distances = distances();
        let assembler = FeatureAssembler::new(&airports, &distances);

        let records = vec![cleaned_record(830), cleaned_record(9999)];
        assert!(assembler.training_rows(&records).is_err());
    }
}
