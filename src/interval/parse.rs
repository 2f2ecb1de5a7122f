//! Phrase and amount/unit parsing
//!
//! Phrases are sequences of `[+|-]<n> <unit>` separated by whitespace, commas
//! or "and", optionally ending in "ago". A sign carries over to the unsigned
//! numbers after it, so `-2 years, 3 days` reads as one backward duration.

use regex::Regex;
use std::sync::OnceLock;

use super::convert::{to_duration, AVERAGE_MONTH};
use super::decompose::{SECONDS_DAY, SECONDS_HOUR, SECONDS_MINUTE, SECONDS_YEAR};
use crate::error::ParseError;
use crate::models::{Duration, Unit};

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"(?i)(?P<num>[+-]?[0-9]+)|(?P<word>[a-z]+)|(?P<other>\S)")
            .expect("token pattern is valid")
    })
}

/// Signed per-unit totals produced by the interpreter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Components {
    values: [i128; 6],
}

impl Components {
    fn slot(unit: Unit) -> usize {
        Unit::ALL.iter().position(|u| *u == unit).unwrap_or_default()
    }

    fn add(&mut self, unit: Unit, value: i128) {
        self.values[Self::slot(unit)] += value;
    }

    fn negate(&mut self) {
        self.values.iter_mut().for_each(|v| *v = -*v);
    }

    /// Magnitudes of the components whose sign matches `negative`
    fn magnitudes(&self, negative: bool) -> Result<Duration, ParseError> {
        let mut duration = Duration::zero().with_inverted(negative);
        for (unit, value) in Unit::ALL.iter().zip(self.values) {
            if (value < 0) != negative || value == 0 {
                continue;
            }
            let magnitude = u64::try_from(value.unsigned_abs())
                .map_err(|_| ParseError::Overflow(format!("{} {}", value, unit)))?;
            duration = duration.with_unit(*unit, magnitude);
        }
        Ok(duration)
    }

    /// Signed seconds of all components, months at their average length
    fn signed_seconds(&self) -> i128 {
        Unit::ALL
            .iter()
            .zip(self.values)
            .map(|(unit, value)| value * i128::from(unit_seconds(*unit)))
            .sum()
    }
}

fn unit_seconds(unit: Unit) -> u64 {
    match unit {
        Unit::Years => SECONDS_YEAR,
        Unit::Months => AVERAGE_MONTH,
        Unit::Days => SECONDS_DAY,
        Unit::Hours => SECONDS_HOUR,
        Unit::Minutes => SECONDS_MINUTE,
        Unit::Seconds => 1,
    }
}

/// Unit and multiplier for a word in a phrase
fn phrase_unit(word: &str) -> Result<(Unit, i128), ParseError> {
    match word.to_lowercase().as_str() {
        "week" | "weeks" | "w" => Ok((Unit::Days, 7)),
        "fortnight" | "fortnights" => Ok((Unit::Days, 14)),
        other => other.parse().map(|unit| (unit, 1)),
    }
}

fn interpret(text: &str) -> Result<Components, ParseError> {
    let mut components = Components::default();
    let mut found = false;
    let mut negative = false;
    let mut ago = false;
    let mut pending: Option<i128> = None;

    for caps in token_regex().captures_iter(text) {
        if ago {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected {:?} after \"ago\"",
                &caps[0]
            )));
        }

        if let Some(num) = caps.name("num") {
            if pending.is_some() {
                return Err(ParseError::InvalidFormat(format!(
                    "number without unit before {:?}",
                    num.as_str()
                )));
            }
            let raw = num.as_str();
            let digits = raw.trim_start_matches(['+', '-']);
            if raw.len() != digits.len() {
                negative = raw.starts_with('-');
            }
            let value: u64 = digits
                .parse()
                .map_err(|_| ParseError::Overflow(raw.to_string()))?;
            pending = Some(if negative {
                -i128::from(value)
            } else {
                i128::from(value)
            });
            continue;
        }

        if let Some(word) = caps.name("word") {
            let word = word.as_str();
            match (pending.take(), word.to_lowercase().as_str()) {
                (None, "and") => {}
                (None, "ago") => ago = true,
                (None, _) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "unexpected {:?}",
                        word
                    )))
                }
                (Some(value), _) => {
                    let (unit, multiplier) = phrase_unit(word)?;
                    tracing::trace!("Phrase component {} {}", value * multiplier, unit);
                    components.add(unit, value * multiplier);
                    found = true;
                }
            }
            continue;
        }

        match &caps[0] {
            "," if pending.is_none() => {}
            other => {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?}",
                    other
                )))
            }
        }
    }

    if pending.is_some() {
        return Err(ParseError::InvalidFormat("number without unit".to_string()));
    }
    if !found {
        return Err(ParseError::InvalidFormat(format!(
            "no duration in {:?}",
            text
        )));
    }
    if ago {
        components.negate();
    }
    Ok(components)
}

/// Parse a free-form phrase such as "2 years, 3 days" or "90 minutes ago"
pub fn parse_phrase(text: &str) -> Result<Duration, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let components = interpret(text)?;
    let has_positive = components.values.iter().any(|v| *v > 0);
    let has_negative = components.values.iter().any(|v| *v < 0);

    if !(has_positive && has_negative) {
        return components.magnitudes(has_negative);
    }

    // Mixed directions cannot be stored as magnitudes; collapse to the signed total
    let total = i64::try_from(components.signed_seconds())
        .map_err(|_| ParseError::Overflow(text.to_string()))?;

    tracing::debug!("Collapsed mixed-sign phrase {:?} to {}s", text, total);
    Ok(to_duration(total))
}

/// A single-unit duration; a missing unit means `default_unit`
pub fn parse_amount_unit(amount: i64, unit: Option<Unit>, default_unit: Unit) -> Duration {
    Duration::of(unit.unwrap_or(default_unit), amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(n: u64) -> Duration {
        Duration::zero().with_unit(Unit::Days, n)
    }

    #[test]
    fn parses_comma_separated_phrase() {
        let d = parse_phrase("2 years, 3 days").unwrap();
        assert_eq!(d, Duration { years: 2, days: 3, ..Duration::zero() });
    }

    #[test]
    fn accepts_and_abbreviations_and_case() {
        let d = parse_phrase("1 Hour and 30 mins").unwrap();
        assert_eq!(d, Duration { hours: 1, minutes: 30, ..Duration::zero() });
        assert_eq!(parse_phrase("2days").unwrap(), days(2));
    }

    #[test]
    fn weeks_become_days() {
        assert_eq!(parse_phrase("2 weeks 1 day").unwrap(), days(15));
        assert_eq!(parse_phrase("1 fortnight").unwrap(), days(14));
    }

    #[test]
    fn repeated_units_accumulate() {
        assert_eq!(parse_phrase("1 day 2 days").unwrap(), days(3));
    }

    #[test]
    fn sign_carries_to_following_numbers() {
        let d = parse_phrase("-2 years, 3 days").unwrap();
        assert_eq!(
            d,
            Duration { years: 2, days: 3, inverted: true, ..Duration::zero() }
        );
    }

    #[test]
    fn ago_inverts() {
        let d = parse_phrase("3 months ago").unwrap();
        assert_eq!(d, Duration::of(Unit::Months, -3));
        assert_eq!(parse_phrase("-1 day ago").unwrap(), days(1));
    }

    #[test]
    fn mixed_signs_collapse_to_total() {
        let d = parse_phrase("1 day -1 hour").unwrap();
        assert_eq!(d, Duration { hours: 23, ..Duration::zero() });

        let d = parse_phrase("1 hour -1 day").unwrap();
        assert_eq!(d, Duration { hours: 23, inverted: true, ..Duration::zero() });
    }

    #[test]
    fn zero_phrase_is_a_zero_duration() {
        assert_eq!(parse_phrase("0 days").unwrap(), Duration::zero());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_phrase("   "), Err(ParseError::Empty));
        assert!(matches!(parse_phrase("soon"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("5"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("5 6 days"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("2 days; 3 hours"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("2 days ago 1 hour"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase(", and ,"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("\u{0663} days"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_phrase("\u{FF15} hours"), Err(ParseError::InvalidFormat(_))));
        assert_eq!(
            parse_phrase("4 eons"),
            Err(ParseError::UnknownUnit("eons".to_string()))
        );
    }

    #[test]
    fn rejects_oversized_numbers() {
        assert!(matches!(
            parse_phrase("99999999999999999999999 days"),
            Err(ParseError::Overflow(_))
        ));
    }

    #[test]
    fn mixed_sign_total_out_of_range_is_an_error() {
        assert!(matches!(
            parse_phrase("300000000000 years -1 day"),
            Err(ParseError::Overflow(_))
        ));
        assert!(matches!(
            parse_phrase("-300000000000 years 1 day"),
            Err(ParseError::Overflow(_))
        ));
        let d = parse_phrase("1 month -1 day").unwrap();
        assert_eq!(crate::interval::to_seconds(&d), 2_628_000 - 86_400);
    }

    #[test]
    fn amount_unit_sets_one_field() {
        assert_eq!(
            parse_amount_unit(-2, Some(Unit::Months), Unit::Days),
            Duration::of(Unit::Months, -2)
        );
        assert_eq!(parse_amount_unit(4, None, Unit::Days), days(4));
    }
}
