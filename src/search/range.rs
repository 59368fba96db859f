use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical investment-size class used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeBucket {
    #[serde(rename = "<$500K")]
    Under500K,
    #[serde(rename = "$500K-$2M")]
    From500KTo2M,
    #[serde(rename = "$2M-$10M")]
    From2MTo10M,
    #[serde(rename = "$10M+")]
    Over10M,
}

impl RangeBucket {
    pub const ALL: [RangeBucket; 4] = [
        RangeBucket::Under500K,
        RangeBucket::From500KTo2M,
        RangeBucket::From2MTo10M,
        RangeBucket::Over10M,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RangeBucket::Under500K => "<$500K",
            RangeBucket::From500KTo2M => "$500K-$2M",
            RangeBucket::From2MTo10M => "$2M-$10M",
            RangeBucket::Over10M => "$10M+",
        }
    }
}

impl fmt::Display for RangeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RangeBucket::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown investment range: {s}"))
    }
}

/// Upper bounds in thousands of dollars.
const UNDER_500K: f64 = 500.0;
const UNDER_2M: f64 = 2_000.0;
const UNDER_10M: f64 = 10_000.0;

/// Leading amount of a range string, normalized to thousands of dollars.
struct Magnitude {
    thousands: f64,
    /// Read with a unit (`K`/`M`/`B` or million mode) rather than as raw dollars.
    with_unit: bool,
}

/// Map a free-form investment range ("$2M", "750000", "$500K-$2M", ...) to its bucket.
///
/// The leading number decides. A `K`/`M`/`B` suffix right after it sets the unit; with no
/// suffix the whole string is read in millions if it mentions `M` anywhere ("$1-5M"), and in
/// raw dollars otherwise. Absent, empty and non-numeric input is `<$500K`.
///
/// An amount written with a unit that is exactly $2M ("$2M", "2000K") belongs to `$500K-$2M`,
/// the bucket whose label names it. Raw dollar amounts use exclusive bounds, so `2000000` is
/// `$2M-$10M`.
pub fn classify(raw: Option<&str>) -> RangeBucket {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return RangeBucket::Under500K;
    };
    let Some(Magnitude {
        thousands,
        with_unit,
    }) = magnitude(raw)
    else {
        return RangeBucket::Under500K;
    };

    if thousands < UNDER_500K {
        RangeBucket::Under500K
    } else if thousands < UNDER_2M || (with_unit && thousands == UNDER_2M) {
        RangeBucket::From500KTo2M
    } else if thousands < UNDER_10M {
        RangeBucket::From2MTo10M
    } else {
        RangeBucket::Over10M
    }
}

fn magnitude(raw: &str) -> Option<Magnitude> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let tail = &raw[start..];
    let end = tail
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(tail.len());
    let number: String = tail[..end].chars().filter(|c| *c != ',').collect();
    let value: f64 = number.trim_end_matches('.').parse().ok()?;

    let suffix = tail[end..].trim_start().chars().next();
    let (thousands, with_unit) = match suffix {
        Some('K' | 'k') => (value, true),
        Some('M' | 'm') => (value * 1_000.0, true),
        Some('B' | 'b') => (value * 1_000_000.0, true),
        _ if raw.contains('M') => (value * 1_000.0, true),
        _ => (value / 1_000.0, false),
    };
    Some(Magnitude {
        thousands,
        with_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_default_to_smallest() {
        assert_eq!(classify(None), RangeBucket::Under500K);
        assert_eq!(classify(Some("")), RangeBucket::Under500K);
        assert_eq!(classify(Some("   ")), RangeBucket::Under500K);
    }

    #[test]
    fn test_non_numeric_defaults_to_smallest() {
        assert_eq!(classify(Some("undisclosed")), RangeBucket::Under500K);
        assert_eq!(classify(Some("$M")), RangeBucket::Under500K);
        assert_eq!(classify(Some("varies by deal")), RangeBucket::Under500K);
    }

    #[test]
    fn test_million_strings() {
        assert_eq!(classify(Some("$2M")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("$10M")), RangeBucket::Over10M);
        assert_eq!(classify(Some("$5M")), RangeBucket::From2MTo10M);
        assert_eq!(classify(Some("$1.5M")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("$25M - $100M")), RangeBucket::Over10M);
    }

    #[test]
    fn test_raw_dollar_strings() {
        assert_eq!(classify(Some("750000")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("$250,000")), RangeBucket::Under500K);
        assert_eq!(classify(Some("499999")), RangeBucket::Under500K);
        assert_eq!(classify(Some("500000")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("9999999")), RangeBucket::From2MTo10M);
        assert_eq!(classify(Some("10000000")), RangeBucket::Over10M);
    }

    #[test]
    fn test_two_million_boundary_by_notation() {
        assert_eq!(classify(Some("$2M")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("2000K")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("2000000")), RangeBucket::From2MTo10M);
        assert_eq!(classify(Some("$2,000,000")), RangeBucket::From2MTo10M);
        assert_eq!(classify(Some("1999999")), RangeBucket::From500KTo2M);
    }

    #[test]
    fn test_thousand_suffix_and_ranges() {
        assert_eq!(classify(Some("$100K")), RangeBucket::Under500K);
        assert_eq!(classify(Some("$600K")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("$500K-$2M")), RangeBucket::From500KTo2M);
        assert_eq!(classify(Some("$1-5M")), RangeBucket::From500KTo2M);
    }

    #[test]
    fn test_bucket_labels_round_trip_through_from_str() {
        for bucket in RangeBucket::ALL {
            assert_eq!(bucket.label().parse::<RangeBucket>().unwrap(), bucket);
        }
        assert!("$3M".parse::<RangeBucket>().is_err());
    }
}
