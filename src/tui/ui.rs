use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DocView, Header, Sidebar};
use crate::tui::{Pane, TuiState};

/// Width of the docked sidebar.
pub const SIDEBAR_WIDTH: u16 = 30;
/// Width of the overlay sidebar on narrow terminals.
pub const OVERLAY_WIDTH: u16 = 34;

/// What a mouse click landed on, judged against the last frame.
#[derive(Debug, PartialEq, Eq)]
pub enum Hit {
    Sidebar,
    Document,
    Elsewhere,
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let [header_area, body] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    tui.docked = body.width >= tui.sidebar_breakpoint;
    if tui.docked {
        tui.sidebar.close();
    }
    if !tui.sidebar_visible() {
        tui.focus = Pane::Content;
    }

    let page = app.page.as_ref();
    let route = app.current_route();

    let status = if tui.doc_view.feedback_active(now) {
        "✓ Copied to clipboard"
    } else {
        app.status_message.as_str()
    };
    let key_hint = if tui.docked {
        "Tab focus · y copy · q quit"
    } else {
        "m menu · y copy · q quit"
    };
    Header::new(page.map(|p| p.topic.title), app.is_loading(), status, key_hint)
        .render(frame, header_area);

    let sidebar_focused = tui.focus == Pane::Sidebar;
    if tui.docked {
        let [side, main] = Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body);
        Sidebar::new(&mut tui.sidebar, route, sidebar_focused, false).render(frame, side);
        DocView::new(&mut tui.doc_view, page, now).render(frame, padded(main));
        return;
    }

    DocView::new(&mut tui.doc_view, page, now).render(frame, padded(body));
    if tui.sidebar.open {
        let overlay = Rect {
            width: OVERLAY_WIDTH.min(body.width),
            ..body
        };
        Sidebar::new(&mut tui.sidebar, route, sidebar_focused, true).render(frame, overlay);
    } else {
        tui.sidebar.area = Rect::default();
        tui.sidebar.row_hits.clear();
    }
}

fn padded(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    })
}

/// Which pane a click at `(col, row)` hits. The overlay sits on top.
pub fn hit_test(tui: &TuiState, col: u16, row: u16) -> Hit {
    let pos = Position::new(col, row);
    if tui.sidebar_visible() && tui.sidebar.area.contains(pos) {
        Hit::Sidebar
    } else if tui.doc_view.area.contains(pos) {
        Hit::Document
    } else {
        Hit::Elsewhere
    }
}
