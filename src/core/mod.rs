//! # Core Application Logic
//!
//! This module contains the docs browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Topics (route table) │
//!                    │  • Navigation entries   │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  content   │
//!         │  Adapter   │ ── Effect ────►  │  sources   │
//!         │ (ratatui)  │ ◄── Action ────  │  (async)   │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`topics`]: the static route → topic table
//! - [`navigation`]: sidebar entries, groups, prev/next
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy
//!
//! `config` is the one exception to "no I/O": it reads the config file at
//! startup, before the reducer ever runs.

pub mod action;
pub mod config;
pub mod navigation;
pub mod state;
pub mod topics;
