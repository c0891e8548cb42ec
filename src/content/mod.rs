//! # Content Layer
//!
//! Where documentation text comes from. A [`ContentSource`] turns a resource
//! name (`economy.md`) into raw markdown; the [`loader`] wraps a fetch so the
//! caller always ends up with something to display.
//!
//! ```text
//!   route ──► DocumentTopic.resource ──► ContentSource::fetch
//!                                              │
//!                     ┌────────────────────────┼──────────────────────┐
//!                     ▼                        ▼                      ▼
//!              BundledSource          DirectorySource           HttpSource
//!            (compiled-in docs)     (<root>/docs/<name>)   (<url>/docs/<name>)
//! ```

pub mod loader;
pub mod source;
pub mod sources;

pub use loader::{LoadTicket, TicketCounter, load_document, placeholder};
pub use source::{ContentError, ContentSource, validate_resource_name};
pub use sources::{BundledSource, DirectorySource, HttpSource};
