//! Aggregation interval parsing.
//!
//! Intervals are compact strings of `<count><unit>` segments with no
//! separators, e.g. "1m", "2d", "1h30m". Units: `d` (days), `h` (hours),
//! `m` (minutes), `s` (seconds). Repeated units accumulate, so "30m30m"
//! is 60 minutes.

use chrono::Duration;
use tickbar_core::{Error, Result};

/// Parse an interval string into a duration.
///
/// Fails with [`Error::InvalidInterval`] on any character that is neither a
/// digit nor a unit letter, on a unit with no preceding count, on a count
/// with no trailing unit, and on empty or zero-length input. A zero interval
/// is a configuration error, never a silent no-op.
pub fn parse_interval(input: &str) -> Result<Duration> {
    let mut secs: i64 = 0;
    let mut num = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            num.push(ch);
            continue;
        }
        let unit_secs = match ch {
            'd' => 86_400,
            'h' => 3_600,
            'm' => 60,
            's' => 1,
            _ => {
                return Err(Error::invalid_interval(format!(
                    "unexpected character '{ch}' in '{input}'"
                )))
            }
        };
        if num.is_empty() {
            return Err(Error::invalid_interval(format!(
                "unit '{ch}' without a count in '{input}'"
            )));
        }
        let count: i64 = num.parse().map_err(|_| {
            Error::invalid_interval(format!("count '{num}' out of range in '{input}'"))
        })?;
        secs += count * unit_secs;
        num.clear();
    }

    if !num.is_empty() {
        return Err(Error::invalid_interval(format!(
            "dangling count '{num}' in '{input}'"
        )));
    }
    if secs <= 0 {
        return Err(Error::invalid_interval(format!(
            "interval '{input}' has zero length"
        )));
    }

    Ok(Duration::seconds(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unit() {
        assert_eq!(parse_interval("1m").unwrap(), Duration::minutes(1));
        assert_eq!(parse_interval("2d").unwrap(), Duration::hours(48));
        assert_eq!(parse_interval("45s").unwrap(), Duration::seconds(45));
    }

    #[test]
    fn test_combined_units() {
        assert_eq!(parse_interval("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(
            parse_interval("1d2h3m4s").unwrap(),
            Duration::seconds(86_400 + 7_200 + 180 + 4)
        );
    }

    #[test]
    fn test_repeated_units_accumulate() {
        assert_eq!(parse_interval("30m30m").unwrap(), Duration::minutes(60));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            parse_interval(""),
            Err(Error::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_character() {
        assert!(matches!(
            parse_interval("1x"),
            Err(Error::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_rejects_unit_without_count() {
        assert!(matches!(
            parse_interval("h1"),
            Err(Error::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_rejects_dangling_count() {
        assert!(matches!(
            parse_interval("90"),
            Err(Error::InvalidInterval(_))
        ));
        assert!(matches!(
            parse_interval("1h30"),
            Err(Error::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_rejects_zero_length() {
        assert!(matches!(
            parse_interval("0m"),
            Err(Error::InvalidInterval(_))
        ));
        assert!(matches!(
            parse_interval("0d0s"),
            Err(Error::InvalidInterval(_))
        ));
    }
}
