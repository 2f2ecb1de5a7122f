//! Fixed-unit breakdown of a seconds count

use serde::{Deserialize, Serialize};

pub const SECONDS_MINUTE: u64 = 60;
pub const SECONDS_HOUR: u64 = 3_600;
pub const SECONDS_DAY: u64 = 86_400;
/// A year is always 365 days here; leap days are ignored
pub const SECONDS_YEAR: u64 = 31_536_000;

/// Year/day/hour/minute/second magnitudes of a flat seconds count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buckets {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Break `secs` into buckets, largest unit first.
///
/// With `suppress_seconds` the sub-minute remainder is rounded half-up into
/// the minute bucket and `seconds` is left at zero.
pub fn decompose(secs: u64, suppress_seconds: bool) -> Buckets {
    let years = secs / SECONDS_YEAR;
    let rest = secs % SECONDS_YEAR;

    let days = rest / SECONDS_DAY;
    let rest = rest % SECONDS_DAY;

    let hours = rest / SECONDS_HOUR;
    let rest = rest % SECONDS_HOUR;

    if suppress_seconds {
        return Buckets {
            years,
            days,
            hours,
            minutes: round_minutes(rest),
            seconds: 0,
        };
    }

    Buckets {
        years,
        days,
        hours,
        minutes: rest / SECONDS_MINUTE,
        seconds: rest % SECONDS_MINUTE,
    }
}

/// Whole minutes in `secs`, rounding half-up
pub(crate) fn round_minutes(secs: u64) -> u64 {
    secs / SECONDS_MINUTE + u64::from(secs % SECONDS_MINUTE >= SECONDS_MINUTE / 2)
}

impl Buckets {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
