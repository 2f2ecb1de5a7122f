//! Duration field: storage, display and edit-form values for one record field

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::ParseError;
use crate::i18n::Translator;
use crate::interval::{normalize, to_largest_denominator, to_seconds, Defaults, HumanFormatter};
use crate::models::{Duration, RawInput, Unit};
use crate::utils::title_case;

/// Amount/unit pair an edit control is pre-filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditValue {
    /// Empty for records that were never saved
    pub amount: Option<i64>,
    pub unit: Unit,
}

/// A configured duration field
#[derive(Debug, Clone)]
pub struct IntervalField<T> {
    defaults: Defaults,
    show_seconds: bool,
    formatter: HumanFormatter<T>,
}

impl<T: Translator> IntervalField<T> {
    pub fn new(defaults: Defaults, show_seconds: bool, translator: T) -> Self {
        Self {
            defaults,
            show_seconds,
            formatter: HumanFormatter::new(translator).with_zero_unit(defaults.unit),
        }
    }

    pub fn from_settings(settings: &Settings, translator: T) -> Self {
        Self::new(settings.defaults(), settings.show_seconds, translator)
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn formatter(&self) -> &HumanFormatter<T> {
        &self.formatter
    }

    /// Resolve an incoming value against this field's defaults
    pub fn normalize(&self, input: RawInput) -> Result<Duration, ParseError> {
        tracing::debug!("Normalizing {:?}", input);
        normalize(input, &self.defaults)
            .inspect_err(|e| tracing::debug!("Rejected interval value: {}", e))
    }

    /// Stored form
    pub fn serialize(&self, duration: &Duration) -> i64 {
        to_seconds(duration)
    }

    pub fn is_empty(&self, duration: &Duration) -> bool {
        to_seconds(duration) == 0
    }

    /// Display text, re-expressed in the largest fixed units
    pub fn display(&self, duration: &Duration) -> String {
        if self.is_empty(duration) {
            return self.formatter.from_duration(&Duration::zero(), self.show_seconds);
        }
        self.formatter
            .from_duration(&to_largest_denominator(duration), self.show_seconds)
    }

    /// Title-cased display text for tables and summaries
    pub fn table_display(&self, duration: &Duration) -> String {
        title_case(&self.display(duration))
    }

    /// The largest non-zero unit of the stored value, signed
    pub fn edit_value(&self, duration: &Duration, fresh: bool) -> EditValue {
        if fresh {
            return EditValue {
                amount: None,
                unit: self.defaults.unit,
            };
        }

        let canonical = to_largest_denominator(duration);
        let largest = canonical.components().find(|(_, n)| *n > 0);
        match largest {
            Some((unit, n)) => {
                let amount = i64::try_from(n).unwrap_or(i64::MAX);
                EditValue {
                    amount: Some(if canonical.inverted { -amount } else { amount }),
                    unit,
                }
            }
            None => EditValue {
                amount: Some(0),
                unit: self.defaults.unit,
            },
        }
    }
}
