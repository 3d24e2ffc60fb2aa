//! Pressure status classification.
//!
//! One shared definition, used by the latest-reading endpoint and the echo
//! endpoint alike, so the label thresholds cannot drift between surfaces.

/// Derive the human-readable pressure label for a raw FSR value.
///
/// Total over all integers; bands are half-open with an inclusive lower
/// bound, so `classify(50)` is already "Light touch".
pub fn classify(value: i64) -> &'static str {
    if value < 50 {
        "No pressure"
    } else if value < 500 {
        "Light touch"
    } else if value < 1500 {
        "Light squeeze"
    } else if value < 2500 {
        "Medium squeeze"
    } else {
        "Big squeeze"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(classify(49), "No pressure");
        assert_eq!(classify(50), "Light touch");
        assert_eq!(classify(499), "Light touch");
        assert_eq!(classify(500), "Light squeeze");
        assert_eq!(classify(1499), "Light squeeze");
        assert_eq!(classify(1500), "Medium squeeze");
        assert_eq!(classify(2499), "Medium squeeze");
        assert_eq!(classify(2500), "Big squeeze");
    }

    #[test]
    fn total_over_extreme_values() {
        assert_eq!(classify(i64::MIN), "No pressure");
        assert_eq!(classify(-1), "No pressure");
        assert_eq!(classify(0), "No pressure");
        assert_eq!(classify(i64::MAX), "Big squeeze");
    }

    #[test]
    fn severity_never_decreases() {
        let rank = |value: i64| match classify(value) {
            "No pressure" => 0,
            "Light touch" => 1,
            "Light squeeze" => 2,
            "Medium squeeze" => 3,
            "Big squeeze" => 4,
            other => panic!("unknown label {}", other),
        };

        let samples = [
            i64::MIN,
            -5,
            0,
            49,
            50,
            499,
            500,
            1499,
            1500,
            2499,
            2500,
            10_000,
            i64::MAX,
        ];
        for pair in samples.windows(2) {
            assert!(rank(pair[0]) <= rank(pair[1]));
        }
    }
}
