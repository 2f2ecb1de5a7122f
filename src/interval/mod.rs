//! Conversion and formatting core
//!
//! Seconds are the stored form, [`Duration`](crate::models::Duration) the
//! structured form and a comma-joined phrase the display form.

pub mod convert;
pub mod decompose;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod validity;

pub use convert::{to_duration, to_largest_denominator, to_seconds};
pub use decompose::{decompose, Buckets};
pub use format::HumanFormatter;
pub use normalize::{normalize, Defaults};
pub use parse::{parse_amount_unit, parse_phrase};
pub use validity::{is_non_zero, is_valid_phrase};
