//! Airline Name Resolution

use crate::error::LookupError;
use std::collections::HashMap;

// Display names as they appear in the flight entry form.
const CARRIERS: [(&str, &str); 21] = [
    ("Alaska Airlines", "AS"),
    ("Allegiant Air", "G4"),
    ("American Airlines", "AA"),
    ("Air Wisconsin", "ZW"),
    ("CommuteAir", "C5"),
    ("Delta Air Lines", "DL"),
    ("Endeavor Air", "9E"),
    ("Envoy Air", "MQ"),
    ("Frontier Airlines", "F9"),
    ("GoJet Airlines", "G7"),
    ("Hawaiian Airlines", "HA"),
    ("Horizon Air", "QX"),
    ("JetBlue Airways", "B6"),
    ("Mesa Airlines", "YV"),
    ("Piedmont Airlines", "PT"),
    ("PSA Airlines", "OH"),
    ("Republic Airways", "YX"),
    ("SkyWest Airlines", "OO"),
    ("Southwest Airlines", "WN"),
    ("Spirit Airlines", "NK"),
    ("United Airlines", "UA"),
];

/// Airline display name → two-letter carrier code.
#[derive(Debug, Clone)]
pub struct CarrierDirectory {
    codes: HashMap<String, String>,
}

impl CarrierDirectory {
    /// Build from (display name, code) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            codes: pairs.into_iter().collect(),
        }
    }

    /// Carrier code for an airline display name. Names outside the
    /// directory are an error; the form upstream only offers known
    /// airlines, so a miss means the caller sent something else.
    pub fn resolve(&self, name: &str) -> Result<&str, LookupError> {
        self.codes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownAirline(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CarrierDirectory {
    fn default() -> Self {
        Self::from_pairs(
            CARRIERS
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string())),
        )
    }
}
