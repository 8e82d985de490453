//! Departure Time Normalization
//!
//! The raw data encodes times of day as HHMM integers: 5 means 00:05,
//! 1345 means 13:45. The normalization here reproduces the historical
//! pipeline's exact string handling, including its treatment of hour 24,
//! so that derived features match what the classifier was trained on.

use crate::FeatureError;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Render an HHMM integer as an "HH:MM" string.
///
/// The integer is left-padded to four characters; the hour part is
/// everything before the final two characters. A leading "24" is
/// rewritten to "00" with the rest of the string kept as-is, so 2405
/// becomes 00:05. That rewrite mirrors the source pipeline literally;
/// changing it to a principled hour-modulo would shift feature values
/// the trained model has never seen.
pub fn format_hhmm(raw: u32) -> String {
    let padded = format!("{raw:04}");
    let split = padded.len() - 2;
    let mut formatted = format!("{}:{}", &padded[..split], &padded[split..]);
    if formatted.starts_with("24") {
        formatted.replace_range(..2, "00");
    }
    formatted
}

/// Hour of day (0–23) for an HHMM-encoded departure time.
///
/// A value that does not reduce to a valid HH:MM after normalization is
/// a data-quality error, never coerced to midnight.
pub fn departure_hour(raw: u32) -> Result<u32, FeatureError> {
    let formatted = format_hhmm(raw);
    let time = NaiveTime::parse_from_str(&formatted, "%H:%M")
        .map_err(|_| FeatureError::MalformedTime { raw })?;
    Ok(time.hour())
}

/// HHMM integer for a calendar timestamp: the zero-padded hour and minute
/// digits concatenated. Calendar times are already valid, so no hour-24
/// handling applies here.
pub fn hhmm_of(ts: NaiveDateTime) -> u32 {
    ts.hour() * 100 + ts.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_format_pads_short_values() {
        assert_eq!(format_hhmm(5), "00:05");
        assert_eq!(format_hhmm(45), "00:45");
        assert_eq!(format_hhmm(945), "09:45");
        assert_eq!(format_hhmm(1345), "13:45");
    }

    #[test]
    fn test_hour_24_rewritten_to_midnight() {
        assert_eq!(format_hhmm(2400), "00:00");
        assert_eq!(format_hhmm(2430), "00:30");
        assert_eq!(departure_hour(2400).unwrap(), 0);
        assert_eq!(departure_hour(2430).unwrap(), 0);
    }

    #[test]
    fn test_hour_extraction() {
        assert_eq!(departure_hour(0).unwrap(), 0);
        assert_eq!(departure_hour(5).unwrap(), 0);
        assert_eq!(departure_hour(830).unwrap(), 8);
        assert_eq!(departure_hour(2359).unwrap(), 23);
    }

    #[test]
    fn test_invalid_times_rejected() {
        // Minute 99 and hour 25 survive formatting but not parsing.
        assert!(matches!(
            departure_hour(1299),
            Err(FeatureError::MalformedTime { raw: 1299 })
        ));
        assert!(departure_hour(2500).is_err());
        // Five digits put a three-character hour in front of the colon.
        assert!(departure_hour(12345).is_err());
    }

    #[test]
    fn test_hhmm_of_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(hhmm_of(ts), 830);

        let early = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(hhmm_of(early), 5);
    }

    proptest! {
        // For every valid time below the 24xx anomaly, normalizing and
        // re-deriving the hour is the integer division by 100.
        #[test]
        fn hour_roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let raw = hour * 100 + minute;
            prop_assert_eq!(departure_hour(raw).unwrap(), raw / 100);
        }
    }
}
