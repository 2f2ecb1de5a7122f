use serde::Deserialize;
use serde_json::Value;

use super::unit::Unit;
use crate::error::ParseError;

/// Any shape a duration value can arrive in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Signed seconds, negative means inverted
    Seconds(i64),
    /// Free-form phrase such as "2 years, 3 days"
    Phrase(String),
    /// Explicit single-unit amount; no unit means the configured default
    AmountUnit { amount: i64, unit: Option<Unit> },
    Absent,
}

impl Default for RawInput {
    fn default() -> Self {
        Self::Absent
    }
}

impl From<i64> for RawInput {
    fn from(seconds: i64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for RawInput {
    fn from(phrase: &str) -> Self {
        Self::Phrase(phrase.to_string())
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// JSON shapes accepted on the wire
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireInput {
    Seconds(i64),
    Phrase(String),
    Pair {
        #[serde(default)]
        amount: Option<WireAmount>,
        #[serde(default)]
        period: Option<String>,
    },
}

/// Form posts send the amount as text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Int(i64),
    Text(String),
}

impl WireAmount {
    fn resolve(self) -> Result<i64, ParseError> {
        match self {
            Self::Int(n) => Ok(n),
            Self::Text(s) if s.trim().is_empty() => Ok(0),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("amount {:?}", s))),
        }
    }
}

impl RawInput {
    /// Convert a JSON value (`null`, integer, string or `{amount, period}`)
    pub fn from_json(value: Value) -> Result<Self, ParseError> {
        let wire: Option<WireInput> = serde_json::from_value(value)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        match wire {
            None => Ok(Self::Absent),
            Some(WireInput::Seconds(n)) => Ok(Self::Seconds(n)),
            Some(WireInput::Phrase(s)) => Ok(Self::Phrase(s)),
            Some(WireInput::Pair { amount, period }) => {
                let amount = amount.map(WireAmount::resolve).transpose()?.unwrap_or(0);
                let unit = match period.as_deref().map(str::trim) {
                    None | Some("") => None,
                    Some(name) => Some(name.parse::<Unit>()?),
                };
                Ok(Self::AmountUnit { amount, unit })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_every_wire_shape() {
        assert_eq!(RawInput::from_json(json!(86400)), Ok(RawInput::Seconds(86400)));
        assert_eq!(RawInput::from_json(json!(-3600)), Ok(RawInput::Seconds(-3600)));
        assert_eq!(
            RawInput::from_json(json!("2 years, 3 days")),
            Ok(RawInput::Phrase("2 years, 3 days".to_string()))
        );
        assert_eq!(
            RawInput::from_json(json!({"amount": -2, "period": "months"})),
            Ok(RawInput::AmountUnit { amount: -2, unit: Some(Unit::Months) })
        );
        assert_eq!(RawInput::from_json(Value::Null), Ok(RawInput::Absent));
    }

    #[test]
    fn pair_accepts_text_amount_and_blank_period() {
        assert_eq!(
            RawInput::from_json(json!({"amount": " 5 ", "period": ""})),
            Ok(RawInput::AmountUnit { amount: 5, unit: None })
        );
        assert_eq!(
            RawInput::from_json(json!({"amount": "", "period": "hours"})),
            Ok(RawInput::AmountUnit { amount: 0, unit: Some(Unit::Hours) })
        );
    }

    #[test]
    fn pair_rejects_unknown_period() {
        assert_eq!(
            RawInput::from_json(json!({"amount": 1, "period": "eons"})),
            Err(ParseError::UnknownUnit("eons".to_string()))
        );
    }

    #[test]
    fn rejects_fractional_numbers() {
        assert!(matches!(
            RawInput::from_json(json!(1.5)),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn option_maps_none_to_absent() {
        assert_eq!(RawInput::from(None::<i64>), RawInput::Absent);
        assert_eq!(RawInput::from(Some(90061_i64)), RawInput::Seconds(90061));
    }
}
