//! # Content Loader
//!
//! Wraps a [`ContentSource`] fetch so it always settles into displayable text.
//!
//! Every navigation takes a fresh [`LoadTicket`]. The fetch result travels
//! back to the event loop tagged with that ticket, and `core::action::update`
//! only applies it if the ticket is still the page's current one. A slow
//! fetch for a topic the user already left is therefore dropped instead of
//! overwriting the newer page.

use log::{debug, warn};

use super::source::ContentSource;

/// Identifies one content request. Later requests have larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> LoadTicket {
        self.last += 1;
        LoadTicket(self.last)
    }
}

/// Body shown in place of a document that could not be loaded.
pub fn placeholder(resource: &str) -> String {
    format!("# Error loading documentation\nCould not load {resource}")
}

/// Fetch `resource`, substituting [`placeholder`] on any failure.
///
/// Never returns an error: the page waiting on this always becomes ready.
pub async fn load_document(source: &dyn ContentSource, resource: &str) -> String {
    match source.fetch(resource).await {
        Ok(text) => {
            debug!(
                "Loaded {} from {} source ({} bytes)",
                resource,
                source.name(),
                text.len()
            );
            text
        }
        Err(e) => {
            warn!("Failed to load {} from {} source: {}", resource, source.name(), e);
            placeholder(resource)
        }
    }
}
