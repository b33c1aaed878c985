//! Timestamp rounding to interval boundaries.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Round a timestamp to the nearest multiple of `delta`, measured from
/// midnight of the timestamp's own calendar day.
///
/// Whole seconds since midnight are rounded half-up; the sub-second
/// component is discarded before rounding, and exact ties round up. The
/// result carries past midnight into the next day when the nearest multiple
/// is the day boundary. The rounding is relative to each calendar day, not
/// to a global multiple of `delta` since some epoch.
///
/// `delta` must be a positive whole number of seconds.
pub fn round_to_interval(ts: NaiveDateTime, delta: Duration) -> NaiveDateTime {
    let step = delta.num_seconds();
    debug_assert!(step > 0, "interval must be positive");

    let seconds = i64::from(ts.num_seconds_from_midnight());
    // floor((seconds + step/2) / step) * step, kept in integer arithmetic
    let rounded = (2 * seconds + step) / (2 * step) * step;

    let midnight = ts.date().and_hms_opt(0, 0, 0).unwrap();
    midnight + Duration::seconds(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn test_rounds_down_in_first_half() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:30:29"), Duration::minutes(1)),
            dt("2024-09-18 09:30:00")
        );
    }

    #[test]
    fn test_rounds_up_in_second_half() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:30:31"), Duration::minutes(1)),
            dt("2024-09-18 09:31:00")
        );
    }

    #[test]
    fn test_exact_tie_rounds_up() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:30:30"), Duration::minutes(1)),
            dt("2024-09-18 09:31:00")
        );
    }

    #[test]
    fn test_subseconds_discarded_before_rounding() {
        // 29.999999s is still in the first half: the fraction never tips
        // the rounding over.
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:30:29.999999"), Duration::minutes(1)),
            dt("2024-09-18 09:30:00")
        );
    }

    #[test]
    fn test_result_has_zero_subseconds() {
        let rounded = round_to_interval(dt("2024-09-18 09:30:31.500000"), Duration::minutes(1));
        assert_eq!(rounded, dt("2024-09-18 09:31:00"));
    }

    #[test]
    fn test_five_minute_interval() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:07:29"), Duration::minutes(5)),
            dt("2024-09-18 09:05:00")
        );
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:07:30"), Duration::minutes(5)),
            dt("2024-09-18 09:10:00")
        );
    }

    #[test]
    fn test_carries_past_midnight() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 23:59:40"), Duration::minutes(1)),
            dt("2024-09-19 00:00:00")
        );
    }

    #[test]
    fn test_exact_boundary_is_identity() {
        assert_eq!(
            round_to_interval(dt("2024-09-18 09:30:00"), Duration::minutes(1)),
            dt("2024-09-18 09:30:00")
        );
    }
}
