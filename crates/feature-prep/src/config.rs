//! Feature prep configuration

use serde::{Deserialize, Serialize};

/// Batch preparation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Raw on-time performance records CSV
    pub flights_path: String,

    /// Airport coordinates CSV
    pub airports_path: String,

    /// Route average distance CSV
    pub routes_path: String,

    /// Where to write the training table CSV
    pub output_path: String,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            flights_path: "data/flights.csv".to_string(),
            airports_path: "data/airport_coords_df.csv".to_string(),
            routes_path: "data/route_distances.csv".to_string(),
            output_path: "data/training_features.csv".to_string(),
        }
    }
}

impl PrepConfig {
    /// Load configuration, layering an optional file and `FLIGHT_PREP_*`
    /// environment variables over the defaults.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&PrepConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder
            .add_source(config::Environment::with_prefix("FLIGHT_PREP"))
            .build()?
            .try_deserialize()
    }
}
