//! Translator backed by a flat JSON message catalog

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use super::Translator;

/// Maps message keys to translated text, falling back to the key itself
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Load a catalog such as `{"day": "jour", "days": "jours"}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let messages: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("parsing catalog {}", path.display()))?;

        tracing::debug!("Loaded {} messages from {}", messages.len(), path.display());
        Ok(Self::new(messages))
    }
}

impl Translator for CatalogTranslator {
    fn phrase(&self, key: &str, _count: u64) -> String {
        match self.messages.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::debug!("No translation for {:?}", key);
                key.to_string()
            }
        }
    }
}
