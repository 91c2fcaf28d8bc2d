//! Registry of the upstream catalogs the proxy fronts.

use std::collections::HashMap;

use url::Url;

/// One upstream catalog and the tag its items are published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub tag: String,
    pub upstream_url: Url,
}

impl SourceConfig {
    pub fn new(tag: impl Into<String>, upstream_url: Url) -> Self {
        Self {
            tag: tag.into(),
            upstream_url,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceConfigError {
    #[error("source entry `{0}` is not of the form tag=url")]
    MalformedEntry(String),
    #[error("source `{tag}` has an invalid upstream url: {reason}")]
    InvalidUrl { tag: String, reason: String },
    #[error("source `{0}` is configured twice")]
    DuplicateTag(String),
}

#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, SourceConfig>,
}

impl SourceRegistry {
    /// Parse a `tag=url;tag=url` list. Blank entries are skipped.
    pub fn parse(raw: &str) -> Result<Self, SourceConfigError> {
        let mut registry = Self::default();

        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (tag, url) = entry
                .split_once('=')
                .map(|(t, u)| (t.trim(), u.trim()))
                .filter(|(t, u)| !t.is_empty() && !u.is_empty())
                .ok_or_else(|| SourceConfigError::MalformedEntry(entry.to_string()))?;

            let upstream_url = Url::parse(url).map_err(|e| SourceConfigError::InvalidUrl {
                tag: tag.to_string(),
                reason: e.to_string(),
            })?;

            registry.insert(SourceConfig::new(tag, upstream_url))?;
        }

        Ok(registry)
    }

    pub fn insert(&mut self, source: SourceConfig) -> Result<(), SourceConfigError> {
        if self.sources.contains_key(&source.tag) {
            return Err(SourceConfigError::DuplicateTag(source.tag));
        }
        self.sources.insert(source.tag.clone(), source);
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<&SourceConfig> {
        self.sources.get(tag)
    }

    /// Configured tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
