//! # Sidebar Component
//!
//! Grouped topic list, the Resources links and a version footer.
//!
//! Docked on wide terminals; on narrow ones it is an overlay opened with
//! `m` and closed by `Esc` or by picking an entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` (overlay flag, cursor, hit-test rows) lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state and the current route
//!
//! The highlighted entry is computed from the current route on every
//! frame; nothing records which entry is active.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::navigation::{self, EXTERNAL_LINKS, Icon, NAV_ENTRIES};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Server => "▤",
        Icon::Terminal => "›",
        Icon::Key => "⚷",
        Icon::Shield => "◈",
        Icon::Dollar => "$",
        Icon::Skull => "☠",
        Icon::Message => "✉",
        Icon::Refresh => "↻",
        Icon::Book => "◧",
        Icon::Github => "⎇",
        Icon::External => "↗",
    }
}

/// Persistent sidebar state.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Overlay visible (narrow terminals only).
    pub open: bool,
    /// Keyboard cursor, an index into `NAV_ENTRIES`.
    pub selected: usize,
    /// Screen rows of entries from the last frame: `(row, entry index)`.
    pub row_hits: Vec<(u16, usize)>,
    /// Area the sidebar occupied in the last frame.
    pub area: Rect,
}

/// Events emitted by the sidebar.
#[derive(Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    Navigate(&'static str),
    Dismiss,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay with the cursor on the current page.
    pub fn open_overlay(&mut self, current_route: &str) {
        self.open = true;
        self.selected = navigation::active_index(current_route).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick an entry: the overlay closes first, then navigation is requested.
    pub fn select(&mut self, index: usize) -> Option<SidebarEvent> {
        let entry = NAV_ENTRIES.get(index)?;
        self.selected = index;
        self.close();
        Some(SidebarEvent::Navigate(entry.route))
    }

    /// Resolve a click at screen row `row` against the last frame.
    pub fn click(&mut self, row: u16) -> Option<SidebarEvent> {
        let index = self
            .row_hits
            .iter()
            .find(|(hit_row, _)| *hit_row == row)
            .map(|(_, index)| *index)?;
        self.select(index)
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(NAV_ENTRIES.len() - 1);
                None
            }
            TuiEvent::ScrollToTop => {
                self.selected = 0;
                None
            }
            TuiEvent::ScrollToBottom => {
                self.selected = NAV_ENTRIES.len() - 1;
                None
            }
            TuiEvent::Submit => self.select(self.selected),
            TuiEvent::Escape => {
                self.close();
                Some(SidebarEvent::Dismiss)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    current_route: &'a str,
    focused: bool,
    overlay: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        current_route: &'a str,
        focused: bool,
        overlay: bool,
    ) -> Self {
        Self {
            state,
            current_route,
            focused,
            overlay,
        }
    }

    /// Content lines plus the line index of each entry.
    fn lines(&self) -> (Vec<Line<'static>>, Vec<(usize, usize)>) {
        let mut lines = vec![];
        let mut entry_lines = vec![];
        let label_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD);

        for (group, entries) in navigation::grouped() {
            if let Some(label) = group {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(label.to_uppercase(), label_style)));
            }
            for (index, entry) in entries {
                let active = navigation::is_active(entry, self.current_route);
                let cursor = self.focused && index == self.state.selected;

                let mut style = if active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                if cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let marker = if active { "▌" } else { " " };

                entry_lines.push((lines.len(), index));
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{} {}", icon_glyph(entry.icon), entry.title), style),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("RESOURCES", label_style)));
        for link in EXTERNAL_LINKS {
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{} {} {}",
                        icon_glyph(link.icon),
                        link.title,
                        icon_glyph(Icon::External)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", link.url),
                Style::default().fg(Color::DarkGray),
            )));
        }

        (lines, entry_lines)
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        if self.overlay {
            frame.render_widget(Clear, area);
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::default()
            .borders(if self.overlay { Borders::ALL } else { Borders::RIGHT })
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        if self.overlay {
            block = block.title(" Menu ").title_bottom(Line::from(" Esc close ").centered());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let (lines, entry_lines) = self.lines();

        // Keep the cursor row on screen
        let cursor_line = entry_lines
            .iter()
            .find(|(_, index)| *index == self.state.selected)
            .map_or(0, |(line, _)| *line as u16);
        let scroll = cursor_line.saturating_sub(list_area.height.saturating_sub(1));

        self.state.row_hits = entry_lines
            .iter()
            .filter_map(|(line, index)| {
                let row = (*line as u16).checked_sub(scroll)?;
                (row < list_area.height).then_some((list_area.y + row, *index))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Version {}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ))),
            footer_area,
        );
    }
}
