//! Carrier Bucketing
//!
//! Coarse 4-way grouping of carrier codes used in place of a full
//! categorical encoding. The memberships are a fixed design constant the
//! model was trained against; they are reproduced here, not re-derived.

const GROUP_0: [&str; 9] = ["PT", "YX", "9E", "QX", "OH", "OO", "C5", "G7", "MQ"];
const GROUP_1: [&str; 4] = ["HA", "ZW", "YV", "WN"];
const GROUP_2: [&str; 5] = ["DL", "AA", "G4", "UA", "AS"];

/// Bucket a two-letter carrier code into its group (0–3).
///
/// Codes outside the three named groups fall through to bucket 3; an
/// unrecognized carrier is the catch-all case, not an error.
pub fn carrier_bucket(code: &str) -> u8 {
    if GROUP_0.contains(&code) {
        0
    } else if GROUP_1.contains(&code) {
        1
    } else if GROUP_2.contains(&code) {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_named_group_memberships() {
        assert_eq!(carrier_bucket("PT"), 0);
        assert_eq!(carrier_bucket("OO"), 0);
        assert_eq!(carrier_bucket("MQ"), 0);
        assert_eq!(carrier_bucket("WN"), 1);
        assert_eq!(carrier_bucket("HA"), 1);
        assert_eq!(carrier_bucket("DL"), 2);
        assert_eq!(carrier_bucket("AA"), 2);
        assert_eq!(carrier_bucket("AS"), 2);
    }

    #[test]
    fn test_unrecognized_codes_fall_through() {
        assert_eq!(carrier_bucket("ZZ"), 3);
        assert_eq!(carrier_bucket("B6"), 3);
        assert_eq!(carrier_bucket(""), 3);
    }

    proptest! {
        // Bucketing is total: every conceivable code lands in 0..=3.
        #[test]
        fn bucketing_is_total(code in "[A-Z0-9]{2}") {
            prop_assert!(carrier_bucket(&code) <= 3);
        }
    }
}
