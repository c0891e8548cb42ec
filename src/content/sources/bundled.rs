//! Documentation compiled into the binary.
//!
//! `build.rs` enumerates `docs/*.md` and generates a `(name, text)` table, so
//! the default build needs no files or network at runtime.

use async_trait::async_trait;

use crate::content::{ContentError, ContentSource, validate_resource_name};

include!(concat!(env!("OUT_DIR"), "/bundled_docs.rs"));

pub struct BundledSource {
    docs: &'static [(&'static str, &'static str)],
}

impl Default for BundledSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BundledSource {
    pub fn new() -> Self {
        Self { docs: BUNDLED_DOCS }
    }

    /// Names of every bundled resource, sorted.
    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.docs.iter().map(|(name, _)| *name)
    }

    fn lookup(&self, resource: &str) -> Option<&'static str> {
        self.docs
            .iter()
            .find(|(name, _)| *name == resource)
            .map(|(_, text)| *text)
    }
}

#[async_trait]
impl ContentSource for BundledSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        validate_resource_name(resource)?;
        self.lookup(resource)
            .map(str::to_owned)
            .ok_or_else(|| ContentError::NotFound(resource.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topics::TOPICS;

    #[test]
    fn every_topic_has_bundled_document() {
        let source = BundledSource::new();
        for topic in TOPICS {
            assert!(
                source.lookup(topic.resource).is_some(),
                "no bundled document for {}",
                topic.resource
            );
        }
    }

    #[tokio::test]
    async fn fetch_returns_bundled_text() {
        let source = BundledSource::new();
        let text = source.fetch("economy.md").await.unwrap();
        assert!(text.starts_with("# Economy System"));
        assert!(text.contains("/pay Steve 100"));
    }

    #[tokio::test]
    async fn fetch_unknown_is_not_found() {
        let source = BundledSource::new();
        let err = source.fetch("nope.md").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(ref n) if n == "nope.md"));
    }
}
