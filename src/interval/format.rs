//! Human-readable rendering of buckets and durations

use super::decompose::{decompose, round_minutes, Buckets};
use super::validity::is_non_zero;
use crate::i18n::{Translator, LESS_THAN_A_MINUTE};
use crate::models::{Duration, Unit};

/// Renders "2 years, 3 days" style phrases through an injected translator
#[derive(Debug, Clone)]
pub struct HumanFormatter<T> {
    translator: T,
    zero_unit: Unit,
}

impl<T: Translator> HumanFormatter<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            zero_unit: Unit::Seconds,
        }
    }

    /// Unit named when the value is exactly zero ("0 days")
    pub fn with_zero_unit(mut self, unit: Unit) -> Self {
        self.zero_unit = unit;
        self
    }

    /// Join non-zero buckets; a unit is singular only when its count is 1
    pub fn from_buckets(&self, buckets: &Buckets, show_seconds: bool) -> String {
        if buckets.is_zero() {
            return self.zero();
        }

        let segments = self.bucket_segments(buckets, show_seconds);
        if segments.is_empty() {
            return self.less_than_a_minute();
        }
        segments.join(", ")
    }

    /// Join non-zero duration fields; a unit is plural only when its count exceeds 1
    pub fn from_duration(&self, duration: &Duration, show_seconds: bool) -> String {
        if !is_non_zero(duration) {
            return self.zero();
        }

        let duration = if show_seconds {
            *duration
        } else {
            fold_seconds(duration)
        };

        let segments: Vec<String> = duration
            .components()
            .filter(|(_, n)| *n > 0)
            .map(|(unit, n)| self.segment(unit, n, n <= 1))
            .collect();

        if segments.is_empty() {
            return self.less_than_a_minute();
        }

        let text = segments.join(", ");
        if duration.inverted {
            format!("-{}", text)
        } else {
            text
        }
    }

    /// Format a signed seconds count, rounding away seconds when hidden
    pub fn from_seconds(&self, seconds: i64, show_seconds: bool) -> String {
        let buckets = decompose(seconds.unsigned_abs(), !show_seconds);
        if buckets.is_zero() {
            return if seconds == 0 {
                self.zero()
            } else {
                self.less_than_a_minute()
            };
        }

        let text = self.bucket_segments(&buckets, show_seconds).join(", ");
        if seconds < 0 {
            format!("-{}", text)
        } else {
            text
        }
    }

    fn bucket_segments(&self, b: &Buckets, show_seconds: bool) -> Vec<String> {
        let seconds = if show_seconds { b.seconds } else { 0 };

        [
            (Unit::Years, b.years),
            (Unit::Days, b.days),
            (Unit::Hours, b.hours),
            (Unit::Minutes, b.minutes),
            (Unit::Seconds, seconds),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(unit, n)| self.segment(unit, n, n == 1))
        .collect()
    }

    fn segment(&self, unit: Unit, n: u64, singular: bool) -> String {
        let key = if singular { unit.singular() } else { unit.plural() };
        format!("{} {}", n, self.translator.phrase(key, n))
    }

    fn zero(&self) -> String {
        self.segment(self.zero_unit, 0, false)
    }

    fn less_than_a_minute(&self) -> String {
        self.translator.phrase(LESS_THAN_A_MINUTE, 0)
    }
}

/// Drop the seconds field, counting it as one more minute once it rounds to one
fn fold_seconds(duration: &Duration) -> Duration {
    let carry = u64::from(round_minutes(duration.seconds) >= 1);
    Duration {
        minutes: duration.minutes.saturating_add(carry),
        seconds: 0,
        ..*duration
    }
}
