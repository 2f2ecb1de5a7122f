use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// A decomposed span of time
///
/// Fields hold magnitudes only; the direction lives in `inverted`.
/// `months` is only populated from explicit input, never from a flat
/// seconds count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    #[serde(default)]
    pub years: u64,
    #[serde(default)]
    pub months: u64,
    #[serde(default)]
    pub days: u64,
    #[serde(default)]
    pub hours: u64,
    #[serde(default)]
    pub minutes: u64,
    #[serde(default)]
    pub seconds: u64,
    #[serde(default)]
    pub inverted: bool,
}

impl Duration {
    pub fn zero() -> Self {
        Self::default()
    }

    /// A duration of `amount` in a single unit, inverted when negative
    pub fn of(unit: Unit, amount: i64) -> Self {
        Self::zero()
            .with_unit(unit, amount.unsigned_abs())
            .with_inverted(amount < 0)
    }

    pub fn with_unit(mut self, unit: Unit, amount: u64) -> Self {
        match unit {
            Unit::Years => self.years = amount,
            Unit::Months => self.months = amount,
            Unit::Days => self.days = amount,
            Unit::Hours => self.hours = amount,
            Unit::Minutes => self.minutes = amount,
            Unit::Seconds => self.seconds = amount,
        }
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Same magnitudes, pointing forward
    pub fn abs(self) -> Self {
        self.with_inverted(false)
    }

    pub fn negated(self) -> Self {
        let inverted = !self.inverted;
        self.with_inverted(inverted)
    }

    /// Components in rendering order, largest unit first
    pub fn components(&self) -> impl Iterator<Item = (Unit, u64)> + '_ {
        Unit::ALL.into_iter().map(move |unit| (unit, self.get(unit)))
    }
}

impl From<Duration> for TimeDelta {
    fn from(duration: Duration) -> Self {
        let secs = crate::interval::convert::to_seconds(&duration);
        TimeDelta::try_seconds(secs).unwrap_or(if secs < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_sets_single_unit_and_sign() {
        let d = Duration::of(Unit::Months, -2);
        assert_eq!(d.months, 2);
        assert!(d.inverted);
        assert_eq!(d.years + d.days + d.hours + d.minutes + d.seconds, 0);
    }

    #[test]
    fn abs_and_negated_return_new_values() {
        let d = Duration::of(Unit::Hours, -1);
        assert!(!d.abs().inverted);
        assert!(!d.negated().inverted);
        assert!(d.inverted);
        assert_eq!(d.abs().hours, 1);
    }

    #[test]
    fn components_are_largest_first() {
        let d = Duration::zero().with_unit(Unit::Seconds, 4).with_unit(Unit::Years, 1);
        let units: Vec<_> = d.components().filter(|(_, n)| *n > 0).collect();
        assert_eq!(units, vec![(Unit::Years, 1), (Unit::Seconds, 4)]);
    }

    #[test]
    fn converts_to_time_delta() {
        let delta: TimeDelta = Duration::of(Unit::Hours, -1).into();
        assert_eq!(delta.num_seconds(), -3600);
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let d: Duration = serde_json::from_str(r#"{"days": 3}"#).unwrap();
        assert_eq!(d, Duration::zero().with_unit(Unit::Days, 3));
    }
}
