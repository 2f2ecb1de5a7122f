//! Single entry point turning any accepted input into a [`Duration`]

use serde::{Deserialize, Serialize};

use super::convert::to_duration;
use super::parse::{parse_amount_unit, parse_phrase};
use crate::error::ParseError;
use crate::models::{Duration, RawInput, Unit};

/// Fallback used when no value was supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub amount: i64,
    pub unit: Unit,
}

pub fn normalize(input: RawInput, defaults: &Defaults) -> Result<Duration, ParseError> {
    match input {
        RawInput::Seconds(seconds) => Ok(to_duration(seconds)),
        RawInput::Phrase(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return normalize(RawInput::Absent, defaults);
            }
            // Numeric strings are stored seconds
            if let Ok(seconds) = trimmed.parse::<i64>() {
                return Ok(to_duration(seconds));
            }
            parse_phrase(trimmed)
        }
        RawInput::AmountUnit { amount, unit } => Ok(parse_amount_unit(amount, unit, defaults.unit)),
        RawInput::Absent if defaults.amount != 0 => {
            Ok(parse_amount_unit(defaults.amount, None, defaults.unit))
        }
        RawInput::Absent => Ok(Duration::zero()),
    }
}
