//! Conversion between signed seconds and [`Duration`]

use super::decompose::{decompose, SECONDS_DAY, SECONDS_HOUR, SECONDS_MINUTE, SECONDS_YEAR};
use crate::models::Duration;

/// Month length used only for months that came from explicit input
pub const AVERAGE_MONTH: u64 = SECONDS_YEAR / 12;

/// Signed seconds spanned by `duration`.
///
/// Plain fixed-unit arithmetic so that `to_seconds(to_duration(s)) == s`.
/// Results beyond the `i64` range saturate.
pub fn to_seconds(duration: &Duration) -> i64 {
    let magnitude = fixed_seconds(duration) + month_seconds(duration.months);
    let signed = if duration.inverted { -magnitude } else { magnitude };

    i64::try_from(signed).unwrap_or(if signed < 0 { i64::MIN } else { i64::MAX })
}

fn fixed_seconds(duration: &Duration) -> i128 {
    i128::from(duration.years) * i128::from(SECONDS_YEAR)
        + i128::from(duration.days) * i128::from(SECONDS_DAY)
        + i128::from(duration.hours) * i128::from(SECONDS_HOUR)
        + i128::from(duration.minutes) * i128::from(SECONDS_MINUTE)
        + i128::from(duration.seconds)
}

/// Approximate; a flat count can never be turned back into months
fn month_seconds(months: u64) -> i128 {
    i128::from(months) * i128::from(AVERAGE_MONTH)
}

/// Decompose signed seconds; months are always zero in this direction
pub fn to_duration(seconds: i64) -> Duration {
    let b = decompose(seconds.unsigned_abs(), false);

    Duration {
        years: b.years,
        months: 0,
        days: b.days,
        hours: b.hours,
        minutes: b.minutes,
        seconds: b.seconds,
        inverted: seconds < 0,
    }
}

/// Re-express `duration` in the largest fixed units (months become days)
pub fn to_largest_denominator(duration: &Duration) -> Duration {
    to_duration(to_seconds(duration))
}
