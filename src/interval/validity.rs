use super::parse::parse_phrase;
use crate::models::Duration;

/// True when any magnitude is non-zero; the sign is not considered
pub fn is_non_zero(duration: &Duration) -> bool {
    duration.components().any(|(_, n)| n != 0)
}

/// True when `text` parses to a non-zero duration
pub fn is_valid_phrase(text: &str) -> bool {
    parse_phrase(text).map(|d| is_non_zero(&d)).unwrap_or(false)
}
