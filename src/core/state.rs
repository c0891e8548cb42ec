//! # Application State
//!
//! Core state for the docs browser. Domain data only: which topic is shown,
//! whether its text has arrived, and the status line. Presentation state
//! (scroll, sidebar overlay, copy feedback) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── page: Option<Page>          // topic on screen + load status
//! │   ├── topic: &DocumentTopic
//! │   ├── ticket: LoadTicket      // the fetch this page waits for
//! │   └── status: Loading | Ready(text)
//! ├── tickets: TicketCounter      // issues a new ticket per navigation
//! ├── status_message: String      // header status text
//! └── source_name: String         // "bundled", "dir", "http"
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::content::{LoadTicket, TicketCounter};
use crate::core::topics::{DocumentTopic, ROOT_ROUTE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Ready(String),
}

#[derive(Debug)]
pub struct Page {
    pub topic: &'static DocumentTopic,
    pub ticket: LoadTicket,
    pub status: PageStatus,
}

impl Page {
    pub fn is_loading(&self) -> bool {
        self.status == PageStatus::Loading
    }

    /// Raw markdown, once loaded.
    pub fn text(&self) -> Option<&str> {
        match &self.status {
            PageStatus::Ready(text) => Some(text),
            PageStatus::Loading => None,
        }
    }
}

pub struct App {
    pub page: Option<Page>,
    pub tickets: TicketCounter,
    pub status_message: String,
    pub source_name: String,
}

impl App {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            page: None,
            tickets: TicketCounter::new(),
            status_message: String::new(),
            source_name: source_name.into(),
        }
    }

    /// Route of the page on screen (root before the first navigation).
    pub fn current_route(&self) -> &'static str {
        self.page.as_ref().map_or(ROOT_ROUTE, |p| p.topic.route)
    }

    pub fn is_loading(&self) -> bool {
        self.page.as_ref().is_some_and(Page::is_loading)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.page.is_none());
        assert!(!app.is_loading());
        assert_eq!(app.current_route(), "/");
        assert_eq!(app.source_name, "test");
    }
}
