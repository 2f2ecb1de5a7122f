//! Duration values for data records: stored as signed seconds, edited as
//! phrases or amount/unit pairs, displayed as pluralized text.

pub mod config;
pub mod error;
pub mod field;
pub mod i18n;
pub mod interval;
pub mod models;
pub mod utils;

pub use error::ParseError;
pub use field::{EditValue, IntervalField};
pub use models::{Duration, RawInput, Unit};
