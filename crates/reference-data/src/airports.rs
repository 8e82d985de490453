//! Airport Coordinate Table

use crate::error::{LookupError, TableError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AirportRow {
    #[serde(rename = "ORIGIN")]
    code: String,
    lat: f64,
    lon: f64,
}

/// Airport code → (latitude, longitude).
#[derive(Debug, Clone, Default)]
pub struct AirportCoordinates {
    coords: HashMap<String, (f64, f64)>,
}

impl AirportCoordinates {
    /// Build from (code, latitude, longitude) entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64, f64)>,
    {
        let coords = entries
            .into_iter()
            .map(|(code, lat, lon)| (code, (lat, lon)))
            .collect();
        Self { coords }
    }

    /// Load from a CSV file with columns `ORIGIN`, `lat`, `lon`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any CSV source with columns `ORIGIN`, `lat`, `lon`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut coords = HashMap::new();
        for row in rdr.deserialize() {
            let row: AirportRow = row?;
            coords.insert(row.code, (row.lat, row.lon));
        }
        info!("Loaded {} airport coordinate entries", coords.len());
        Ok(Self { coords })
    }

    /// Coordinates for an airport code. An unknown code is an error, never
    /// a default position.
    pub fn lookup(&self, code: &str) -> Result<(f64, f64), LookupError> {
        self.coords
            .get(code)
            .copied()
            .ok_or_else(|| LookupError::UnknownAirport(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AirportCoordinates {
        AirportCoordinates::from_entries([
            ("ATL".to_string(), 33.6407, -84.4277),
            ("LAX".to_string(), 33.9416, -118.4085),
        ])
    }

    #[test]
    fn test_lookup_known_airport() {
        let coords = table();
        assert_eq!(coords.lookup("ATL").unwrap(), (33.6407, -84.4277));
    }

    #[test]
    fn test_lookup_unknown_airport_is_error() {
        let coords = table();
        assert_eq!(
            coords.lookup("ZZZ"),
            Err(LookupError::UnknownAirport("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_load_from_csv() {
        let data = "ORIGIN,lat,lon\nATL,33.6407,-84.4277\nLAX,33.9416,-118.4085\n";
        let coords = AirportCoordinates::from_reader(data.as_bytes()).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.lookup("LAX").unwrap(), (33.9416, -118.4085));
    }
}
