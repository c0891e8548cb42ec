//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetching
//!
//! `update()` answers a navigation with `Effect::Fetch`. The loop spawns a
//! tokio task that loads the resource and sends `Action::ContentLoaded`
//! back over a std mpsc channel, drained between frames. Results carrying
//! an outdated ticket are dropped by the reducer.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (page loading, copy confirmation up): draws every ~80ms
//!   so the confirmation disappears on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

pub mod clipboard;
mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::content::{
    BundledSource, ContentSource, DirectorySource, HttpSource, LoadTicket, load_document,
};
use crate::core::action::{Action, Effect, update};
use crate::core::config::{ContentRoot, ResolvedConfig};
use crate::core::navigation;
use crate::core::state::App;
use crate::tui::clipboard::{Clipboard, build_clipboard};
use crate::tui::component::EventHandler;
use crate::tui::components::{DocViewEvent, DocViewState, SidebarEvent, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Content,
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub focus: Pane,
    // Persistent component states
    pub sidebar: SidebarState,
    pub doc_view: DocViewState,
    pub clipboard: Box<dyn Clipboard>,
    /// Minimum body width for a docked sidebar.
    pub sidebar_breakpoint: u16,
    /// Sidebar docked in the last frame.
    pub docked: bool,
}

impl TuiState {
    pub fn new(clipboard: Box<dyn Clipboard>, line_numbers: bool, sidebar_breakpoint: u16) -> Self {
        Self {
            focus: Pane::Content,
            sidebar: SidebarState::new(),
            doc_view: DocViewState::new(line_numbers),
            clipboard,
            sidebar_breakpoint,
            docked: false,
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        self.docked || self.sidebar.open
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes make a bare Esc arrive without delay;
        // terminals without the protocol ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            Show
        );
    }
}

/// Build the content source selected by config.
pub fn build_source(root: &ContentRoot) -> Arc<dyn ContentSource> {
    match root {
        ContentRoot::Bundled => Arc::new(BundledSource::new()),
        ContentRoot::Directory(path) => Arc::new(DirectorySource::new(path.clone())),
        ContentRoot::Url(url) => Arc::new(HttpSource::new(url.clone())),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config.content_root);
    let mut app = App::new(source.name());
    let mut tui = TuiState::new(
        build_clipboard(config.clipboard_enabled),
        config.line_numbers,
        config.sidebar_breakpoint,
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetches
    let (tx, rx) = mpsc::channel();

    let mut should_quit = apply(
        &mut app,
        Action::Navigate(config.start_route.clone()),
        &source,
        &tx,
    );
    let mut needs_redraw = true; // Force first frame
    let mut was_animating = false;

    while !should_quit {
        let now = Instant::now();
        let animating = app.is_loading() || tui.doc_view.feedback_active(now);

        // One extra frame after animation ends clears the confirmation
        if animating || was_animating {
            needs_redraw = true;
        }
        was_animating = animating;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, event, Instant::now())
                && apply(&mut app, action, &source, &tx)
            {
                should_quit = true;
                break;
            }
        }

        // Handle finished fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(&mut app, action, &source, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer and carry out its effect.
/// Returns true when the app should exit.
fn apply(
    app: &mut App,
    action: Action,
    source: &Arc<dyn ContentSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Fetch { ticket, resource } => {
            spawn_fetch(source.clone(), ticket, resource, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_fetch(
    source: Arc<dyn ContentSource>,
    ticket: LoadTicket,
    resource: &'static str,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning fetch: {} from {} (ticket {})",
        resource,
        source.name(),
        ticket.id()
    );
    tokio::spawn(async move {
        let body = load_document(source.as_ref(), resource).await;
        if tx.send(Action::ContentLoaded { ticket, body }).is_err() {
            warn!(
                "Failed to deliver {} (ticket {}): receiver dropped",
                resource,
                ticket.id()
            );
        }
    });
}

/// Route one terminal event. Returns an action for the reducer when the
/// event changes domain state (navigation, quit).
pub fn handle_event(
    app: &App,
    tui: &mut TuiState,
    event: TuiEvent,
    now: Instant,
) -> Option<Action> {
    // A navigation since the last frame leaves the cached document stale
    tui.doc_view.sync(app.page.as_ref());
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::NextPage => return Some(Action::NextPage),
        TuiEvent::PrevPage => return Some(Action::PrevPage),
        TuiEvent::Reload => return Some(Action::Reload),
        TuiEvent::Resize => return None,
        TuiEvent::ToggleSidebar => {
            toggle_sidebar(app, tui);
            return None;
        }
        TuiEvent::ToggleFocus => {
            if tui.sidebar_visible() {
                match tui.focus {
                    Pane::Sidebar => tui.focus = Pane::Content,
                    Pane::Content => focus_sidebar(app, tui),
                }
            }
            return None;
        }
        TuiEvent::Escape if tui.sidebar.open => {
            tui.sidebar.close();
            tui.focus = Pane::Content;
            return None;
        }
        TuiEvent::MouseClick(col, row) => return click(tui, col, row, now),
        // Wheel and code block keys always act on the document
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::NextCodeBlock
        | TuiEvent::PrevCodeBlock
        | TuiEvent::CopyCodeBlock
        | TuiEvent::ToggleLineNumbers => {
            content_event(tui, &event, now);
            return None;
        }
        _ => {}
    }

    match tui.focus {
        Pane::Sidebar => match tui.sidebar.handle_event(&event)? {
            SidebarEvent::Navigate(route) => {
                tui.focus = Pane::Content;
                Some(Action::Navigate(route.to_string()))
            }
            SidebarEvent::Dismiss => {
                tui.focus = Pane::Content;
                None
            }
        },
        Pane::Content => {
            content_event(tui, &event, now);
            None
        }
    }
}

fn toggle_sidebar(app: &App, tui: &mut TuiState) {
    if tui.docked {
        match tui.focus {
            Pane::Sidebar => tui.focus = Pane::Content,
            Pane::Content => focus_sidebar(app, tui),
        }
    } else if tui.sidebar.open {
        tui.sidebar.close();
        tui.focus = Pane::Content;
    } else {
        tui.sidebar.open_overlay(app.current_route());
        tui.focus = Pane::Sidebar;
    }
}

/// Move focus to the sidebar with its cursor on the current page.
fn focus_sidebar(app: &App, tui: &mut TuiState) {
    tui.sidebar.selected = navigation::active_index(app.current_route()).unwrap_or(0);
    tui.focus = Pane::Sidebar;
}

fn content_event(tui: &mut TuiState, event: &TuiEvent, now: Instant) {
    if let Some(DocViewEvent::CopyRequested) = tui.doc_view.handle_event(event) {
        copy_code(tui, now);
    }
}

fn copy_code(tui: &mut TuiState, now: Instant) {
    match tui.doc_view.copy_focused(tui.clipboard.as_ref(), now) {
        Some(true) => info!("Copied code block {:?}", tui.doc_view.focused_code),
        Some(false) => {} // logged by the code block
        None => debug!("Copy requested on a page without code blocks"),
    }
}

fn click(tui: &mut TuiState, col: u16, row: u16, now: Instant) -> Option<Action> {
    match ui::hit_test(tui, col, row) {
        Hit::Sidebar => match tui.sidebar.click(row) {
            Some(SidebarEvent::Navigate(route)) => {
                tui.focus = Pane::Content;
                Some(Action::Navigate(route.to_string()))
            }
            _ => None,
        },
        // Clicking anywhere outside an open overlay dismisses it
        _ if tui.sidebar.open => {
            tui.sidebar.close();
            tui.focus = Pane::Content;
            None
        }
        Hit::Document => {
            tui.focus = Pane::Content;
            if let Some(DocViewEvent::CopyRequested) = tui.doc_view.click(row) {
                copy_code(tui, now);
            }
            None
        }
        Hit::Elsewhere => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingClipboard, test_app};
    use crate::tui::clipboard::NoClipboard;
    use std::rc::Rc;

    const ECONOMY: &str = "# Economy System\n\n```bash\n/pay Steve 100\n```\n";

    fn app_on(route: &str, body: &str) -> App {
        let mut app = test_app();
        update(&mut app, Action::Navigate(route.into()));
        let ticket = app.page.as_ref().unwrap().ticket;
        update(&mut app, Action::ContentLoaded { ticket, body: body.into() });
        app
    }

    fn narrow_tui(clipboard: Box<dyn Clipboard>) -> TuiState {
        TuiState::new(clipboard, false, 100)
    }

    #[test]
    fn global_keys_map_to_actions() {
        let app = app_on("/", "# Intro");
        let mut tui = narrow_tui(Box::new(NoClipboard));
        let now = Instant::now();
        assert!(matches!(handle_event(&app, &mut tui, TuiEvent::Quit, now), Some(Action::Quit)));
        assert!(matches!(
            handle_event(&app, &mut tui, TuiEvent::NextPage, now),
            Some(Action::NextPage)
        ));
        assert!(matches!(
            handle_event(&app, &mut tui, TuiEvent::Reload, now),
            Some(Action::Reload)
        ));
    }

    #[test]
    fn overlay_select_closes_then_navigates() {
        let app = app_on("/", "# Intro");
        let mut tui = narrow_tui(Box::new(NoClipboard));
        let now = Instant::now();

        handle_event(&app, &mut tui, TuiEvent::ToggleSidebar, now);
        assert!(tui.sidebar.open);
        assert_eq!(tui.focus, Pane::Sidebar);

        handle_event(&app, &mut tui, TuiEvent::CursorDown, now);
        let action = handle_event(&app, &mut tui, TuiEvent::Submit, now);
        assert!(!tui.sidebar.open);
        assert_eq!(tui.focus, Pane::Content);
        match action {
            Some(Action::Navigate(route)) => assert_eq!(route, "/configuration"),
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn escape_closes_overlay_without_navigating() {
        let app = app_on("/economy", "# Economy");
        let mut tui = narrow_tui(Box::new(NoClipboard));
        let now = Instant::now();
        handle_event(&app, &mut tui, TuiEvent::ToggleSidebar, now);
        assert!(handle_event(&app, &mut tui, TuiEvent::Escape, now).is_none());
        assert!(!tui.sidebar.open);
        assert_eq!(tui.focus, Pane::Content);
    }

    #[test]
    fn tab_only_moves_to_visible_sidebar() {
        let app = app_on("/economy", "# Economy");
        let mut tui = narrow_tui(Box::new(NoClipboard));
        let now = Instant::now();
        handle_event(&app, &mut tui, TuiEvent::ToggleFocus, now);
        assert_eq!(tui.focus, Pane::Content);

        tui.docked = true;
        handle_event(&app, &mut tui, TuiEvent::ToggleFocus, now);
        assert_eq!(tui.focus, Pane::Sidebar);
        assert_eq!(tui.sidebar.selected, 5);
        handle_event(&app, &mut tui, TuiEvent::ToggleFocus, now);
        assert_eq!(tui.focus, Pane::Content);
    }

    #[test]
    fn copy_key_writes_first_code_block() {
        let app = app_on("/economy", ECONOMY);
        let clipboard = Rc::new(RecordingClipboard::default());
        let mut tui = narrow_tui(Box::new(clipboard.clone()));
        tui.doc_view.sync(app.page.as_ref());

        let now = Instant::now();
        assert!(handle_event(&app, &mut tui, TuiEvent::CopyCodeBlock, now).is_none());
        assert_eq!(clipboard.last().as_deref(), Some("/pay Steve 100"));
        assert!(tui.doc_view.feedback_active(now + Duration::from_millis(1999)));
        assert!(!tui.doc_view.feedback_active(now + Duration::from_millis(2000)));
    }

    #[test]
    fn copy_after_navigation_ignores_page_left_behind() {
        let mut app = app_on("/economy", ECONOMY);
        let clipboard = Rc::new(RecordingClipboard::default());
        let mut tui = narrow_tui(Box::new(clipboard.clone()));
        tui.doc_view.sync(app.page.as_ref());

        let now = Instant::now();
        let action = handle_event(&app, &mut tui, TuiEvent::NextPage, now);
        assert!(matches!(action, Some(Action::NextPage)));
        update(&mut app, Action::NextPage);
        assert!(app.is_loading());

        handle_event(&app, &mut tui, TuiEvent::CopyCodeBlock, now);
        assert!(clipboard.last().is_none());
        assert!(!tui.doc_view.feedback_active(now));
        assert_eq!(tui.doc_view.code_block_count(), 0);
    }

    #[test]
    fn copy_with_disabled_clipboard_shows_nothing() {
        let app = app_on("/economy", ECONOMY);
        let mut tui = narrow_tui(Box::new(NoClipboard));
        tui.doc_view.sync(app.page.as_ref());

        let now = Instant::now();
        handle_event(&app, &mut tui, TuiEvent::CopyCodeBlock, now);
        assert!(!tui.doc_view.feedback_active(now));
    }

    #[test]
    fn code_keys_work_while_sidebar_focused() {
        let app = app_on("/economy", ECONOMY);
        let mut tui = narrow_tui(Box::new(NoClipboard));
        tui.doc_view.sync(app.page.as_ref());
        tui.docked = true;
        tui.focus = Pane::Sidebar;

        handle_event(&app, &mut tui, TuiEvent::NextCodeBlock, Instant::now());
        assert_eq!(tui.doc_view.focused_code, Some(0));
        handle_event(&app, &mut tui, TuiEvent::ToggleLineNumbers, Instant::now());
        assert!(tui.doc_view.line_numbers);
    }

    #[test]
    fn build_source_follows_content_root() {
        assert_eq!(build_source(&ContentRoot::Bundled).name(), "bundled");
        assert_eq!(
            build_source(&ContentRoot::Directory("/srv/vonix".into())).name(),
            "dir"
        );
        assert_eq!(
            build_source(&ContentRoot::Url("https://docs.example".into())).name(),
            "http"
        );
    }
}
