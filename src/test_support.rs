//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::content::{ContentError, ContentSource};
use crate::tui::clipboard::Clipboard;

/// In-memory content keyed by resource name.
pub struct MapSource {
    docs: HashMap<String, String>,
}

impl MapSource {
    pub fn new(docs: &[(&str, &str)]) -> Self {
        Self {
            docs: docs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl ContentSource for MapSource {
    fn name(&self) -> &str {
        "map"
    }

    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        self.docs
            .get(resource)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(resource.to_string()))
    }
}

/// Content that takes a fixed, per-resource time to arrive.
pub struct DelayedSource {
    docs: HashMap<String, (String, Duration)>,
}

impl DelayedSource {
    pub fn new(docs: &[(&str, &str, Duration)]) -> Self {
        Self {
            docs: docs
                .iter()
                .map(|(k, v, d)| (k.to_string(), (v.to_string(), *d)))
                .collect(),
        }
    }
}

#[async_trait]
impl ContentSource for DelayedSource {
    fn name(&self) -> &str {
        "delayed"
    }

    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        let Some((text, delay)) = self.docs.get(resource) else {
            return Err(ContentError::NotFound(resource.to_string()));
        };
        tokio::time::sleep(*delay).await;
        Ok(text.clone())
    }
}

/// Remembers every value written to it.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Lets a test keep a handle on a clipboard it hands over as `Box<dyn Clipboard>`.
impl<C: Clipboard> Clipboard for Rc<C> {
    fn write_text(&self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }
}

/// Rejects every write.
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> io::Result<()> {
        Err(io::Error::other("clipboard unavailable"))
    }
}

/// Creates a test App.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("test")
}
