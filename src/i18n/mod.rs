//! Translation capability used by the formatter
//!
//! The formatter picks the singular or plural key itself and passes the count
//! along so catalogs with richer plural rules can still choose a form.

pub mod catalog;

pub use catalog::CatalogTranslator;

/// Key of the floor phrase shown for sub-minute durations
pub const LESS_THAN_A_MINUTE: &str = "less than a minute";

pub trait Translator: Send + Sync {
    fn phrase(&self, key: &str, count: u64) -> String;
}

/// Keys are already English; returns them unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Translator for English {
    fn phrase(&self, key: &str, _count: u64) -> String {
        key.to_string()
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn phrase(&self, key: &str, count: u64) -> String {
        (**self).phrase(key, count)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn phrase(&self, key: &str, count: u64) -> String {
        (**self).phrase(key, count)
    }
}
