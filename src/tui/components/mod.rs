//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: top bar with app name, topic title, loading indicator, status
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in `TuiState` and survives between frames; the
//! wrapper is built each frame around `&mut State` plus props.
//!
//! - `Sidebar` / `SidebarState`: grouped topic list, docked or overlay
//! - `DocView` / `DocViewState`: scrollable page with code blocks
//! - `CodeBlock` / `CodeBlockState`: one code sample and its copy feedback
//!
//! Event handling is implemented on the state types (`EventHandler`), since
//! the wrappers do not outlive a frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── header.rs       (Top bar)
//! ├── sidebar.rs      (Navigation, Resources, version)
//! ├── doc_view.rs     (Document pane + prev/next footer)
//! └── code_block.rs   (Code sample widget, copy state)
//! ```

pub mod code_block;
pub mod doc_view;
pub mod header;
pub mod sidebar;

pub use doc_view::{DocView, DocViewEvent, DocViewState};
pub use header::Header;
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
