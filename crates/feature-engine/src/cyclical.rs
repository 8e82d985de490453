//! Cyclical Time Encodings

use serde::Serialize;
use std::f64::consts::TAU;

/// Sine/cosine pair for a periodic quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CyclicalPair {
    pub sin: f64,
    pub cos: f64,
}

/// Encode an hour of day (0–23) on the 24-hour circle.
///
/// Avoids the artificial discontinuity between hour 23 and hour 0 that a
/// raw integer feature would hand the classifier.
pub fn encode_hour(hour: u32) -> CyclicalPair {
    let angle = TAU * hour as f64 / 24.0;
    CyclicalPair {
        sin: angle.sin(),
        cos: angle.cos(),
    }
}

/// Encode a day of week on the 7-day circle, using the raw data's 1–7
/// convention as-is.
pub fn encode_day_of_week(day: u32) -> CyclicalPair {
    let angle = TAU * day as f64 / 7.0;
    CyclicalPair {
        sin: angle.sin(),
        cos: angle.cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_hour_encoding_landmarks() {
        let midnight = encode_hour(0);
        assert!((midnight.sin - 0.0).abs() < EPSILON);
        assert!((midnight.cos - 1.0).abs() < EPSILON);

        // 6am is a quarter turn.
        let morning = encode_hour(6);
        assert!((morning.sin - 1.0).abs() < EPSILON);
        assert!(morning.cos.abs() < EPSILON);
    }

    #[test]
    fn test_day_seven_wraps_to_start() {
        let sunday = encode_day_of_week(7);
        assert!(sunday.sin.abs() < EPSILON);
        assert!((sunday.cos - 1.0).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn hour_encoding_stays_on_unit_circle(hour in 0u32..24) {
            let c = encode_hour(hour);
            prop_assert!((c.sin * c.sin + c.cos * c.cos - 1.0).abs() < EPSILON);
        }

        #[test]
        fn day_encoding_stays_on_unit_circle(day in 1u32..8) {
            let c = encode_day_of_week(day);
            prop_assert!((c.sin * c.sin + c.cos * c.cos - 1.0).abs() < EPSILON);
        }
    }
}
