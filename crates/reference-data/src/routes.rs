//! Route Tables
//!
//! Route-keyed lookups: the average flown distance per (origin,
//! destination) pair, and the historical delay-proportion group used by
//! the route visualizations.

use crate::error::{LookupError, TableError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

// Composite key matching the source tables' ORIGIN_DEST convention.
fn route_key(origin: &str, dest: &str) -> String {
    format!("{origin}_{dest}")
}

/// Band a delay proportion into its legend group.
///
/// Group 0 covers proportions up to 0.10, groups 1 through 4 step in
/// 0.05 increments, and group 5 is everything above 0.30.
pub fn delay_group(proportion: f64) -> u8 {
    if proportion <= 0.10 {
        0
    } else if proportion <= 0.15 {
        1
    } else if proportion <= 0.20 {
        2
    } else if proportion <= 0.25 {
        3
    } else if proportion <= 0.30 {
        4
    } else {
        5
    }
}

#[derive(Debug, Deserialize)]
struct DistanceRow {
    origin: String,
    destination: String,
    average_distance: f64,
}

/// (origin, destination) → average route distance.
#[derive(Debug, Clone, Default)]
pub struct RouteDistances {
    distances: HashMap<String, f64>,
}

impl RouteDistances {
    /// Build from (origin, destination, distance) entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f64)>,
    {
        let distances = entries
            .into_iter()
            .map(|(origin, dest, distance)| (route_key(&origin, &dest), distance))
            .collect();
        Self { distances }
    }

    /// Load from a CSV file with columns `origin`, `destination`,
    /// `average_distance`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any CSV source with columns `origin`, `destination`,
    /// `average_distance`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut distances = HashMap::new();
        for row in rdr.deserialize() {
            let row: DistanceRow = row?;
            distances.insert(route_key(&row.origin, &row.destination), row.average_distance);
        }
        info!("Loaded {} route distance entries", distances.len());
        Ok(Self { distances })
    }

    /// Average distance for a route. A pair with no observed distance is
    /// an error; there is no fallback estimate.
    pub fn lookup(&self, origin: &str, dest: &str) -> Result<f64, LookupError> {
        self.distances
            .get(&route_key(origin, dest))
            .copied()
            .ok_or_else(|| LookupError::UnknownRoute {
                origin: origin.to_string(),
                dest: dest.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct DelayGroupRow {
    #[serde(rename = "ORIGIN")]
    origin: String,
    #[serde(rename = "DEST")]
    dest: String,
    #[serde(rename = "Group")]
    group: u8,
}

/// (origin, destination) → historical delay-proportion group (0–5).
///
/// Absence means no data for the route, not a failure; the consumers of
/// this table skip routes they cannot band.
#[derive(Debug, Clone, Default)]
pub struct RouteDelayGroups {
    groups: HashMap<String, u8>,
}

impl RouteDelayGroups {
    /// Build from (origin, destination, group) entries. Duplicate routes
    /// keep their first occurrence, matching the source table's
    /// deduplication.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, u8)>,
    {
        let mut groups = HashMap::new();
        for (origin, dest, group) in entries {
            groups.entry(route_key(&origin, &dest)).or_insert(group);
        }
        Self { groups }
    }

    /// Load from a CSV file with columns `ORIGIN`, `DEST`, `Group`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any CSV source with columns `ORIGIN`, `DEST`, `Group`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut groups = HashMap::new();
        for row in rdr.deserialize() {
            let row: DelayGroupRow = row?;
            groups.entry(route_key(&row.origin, &row.dest)).or_insert(row.group);
        }
        info!("Loaded {} route delay group entries", groups.len());
        Ok(Self { groups })
    }

    /// Delay group for a route, if one was observed.
    pub fn lookup(&self, origin: &str, dest: &str) -> Option<u8> {
        self.groups.get(&route_key(origin, dest)).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
