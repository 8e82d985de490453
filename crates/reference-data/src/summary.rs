//! Per-Origin Departure Delay Summary

use crate::error::TableError;
use crate::routes::delay_group;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct SummaryRow {
    #[serde(rename = "ORIGIN")]
    origin: String,
    flight_count: u64,
    #[serde(rename = "DEP_DEL15")]
    delay_proportion: f64,
    #[serde(rename = "ORIGIN_LATITUDE")]
    latitude: f64,
    #[serde(rename = "ORIGIN_LONGITUDE")]
    longitude: f64,
}

/// Historical departure statistics for one origin airport.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginStats {
    pub flight_count: u64,
    /// Proportion of departures delayed 15 minutes or more.
    pub delay_proportion: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl OriginStats {
    /// Legend group for this origin's delay proportion.
    pub fn delay_group(&self) -> u8 {
        delay_group(self.delay_proportion)
    }
}

/// Origin airport → departure delay summary, for the heatmap views.
#[derive(Debug, Clone, Default)]
pub struct OriginDelaySummary {
    stats: HashMap<String, OriginStats>,
}

impl OriginDelaySummary {
    /// Build from (origin, stats) entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, OriginStats)>,
    {
        Self {
            stats: entries.into_iter().collect(),
        }
    }

    /// Load from a CSV file with columns `ORIGIN`, `flight_count`,
    /// `DEP_DEL15`, `ORIGIN_LATITUDE`, `ORIGIN_LONGITUDE`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any CSV source with the summary columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut stats = HashMap::new();
        for row in rdr.deserialize() {
            let row: SummaryRow = row?;
            stats.insert(
                row.origin,
                OriginStats {
                    flight_count: row.flight_count,
                    delay_proportion: row.delay_proportion,
                    latitude: row.latitude,
                    longitude: row.longitude,
                },
            );
        }
        info!("Loaded {} origin delay summaries", stats.len());
        Ok(Self { stats })
    }

    /// Summary for an origin, if one was observed.
    pub fn lookup(&self, origin: &str) -> Option<&OriginStats> {
        self.stats.get(origin)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
