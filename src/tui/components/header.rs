//! # Header Component
//!
//! One-line bar at the top of the screen.
//!
//! Stateless: all data arrives as props each frame.
//!
//! The text degrades in priority order on narrow terminals:
//!
//! 1. **Loading**: `"VonixCore Docs │ Economy │ Loading… │ <status>"`
//! 2. **Status message**: `"VonixCore Docs │ Economy │ <status>"`
//! 3. **Default**: `"VonixCore Docs │ Economy"`
//!
//! A short key hint is right-aligned when there is room for it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const APP_NAME: &str = "VonixCore Docs";

pub struct Header<'a> {
    /// Title of the topic on screen, if any.
    pub topic_title: Option<&'a str>,
    pub loading: bool,
    /// Transient notice (redirects, copy confirmation).
    pub status_message: &'a str,
    /// Hint shown on the right, e.g. which key opens the menu.
    pub key_hint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(
        topic_title: Option<&'a str>,
        loading: bool,
        status_message: &'a str,
        key_hint: &'a str,
    ) -> Self {
        Self {
            topic_title,
            loading,
            status_message,
            key_hint,
        }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![Span::styled(
            APP_NAME,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(title) = self.topic_title {
            spans.push(sep.clone());
            spans.push(Span::styled(title, Style::default().fg(Color::White)));
        }
        if self.loading {
            spans.push(sep.clone());
            spans.push(Span::styled(
                "Loading…",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(sep);
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Gray),
            ));
        }
        spans
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = Line::from(self.spans());
        let hint_width = self.key_hint.chars().count() as u16;

        if !self.key_hint.is_empty() && left.width() as u16 + hint_width + 2 <= area.width {
            let hint = Line::from(Span::styled(self.key_hint, Style::default().fg(Color::DarkGray)))
                .right_aligned();
            frame.render_widget(Paragraph::new(hint), area);
        }
        frame.render_widget(Paragraph::new(left), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(mut header: Header, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_app_and_topic() {
        let text = draw(Header::new(Some("Economy"), false, "", "q quit"), 80);
        assert!(text.contains(APP_NAME));
        assert!(text.contains("Economy"));
        assert!(text.contains("q quit"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn shows_loading_and_status() {
        let text = draw(
            Header::new(Some("Introduction"), true, "No page at /shops, showing Introduction", ""),
            120,
        );
        assert!(text.contains("Loading…"));
        assert!(text.contains("No page at /shops"));
    }

    #[test]
    fn hint_dropped_when_narrow() {
        let text = draw(Header::new(Some("Configuration"), false, "", "m menu · q quit"), 40);
        assert!(text.contains("Configuration"));
        assert!(!text.contains("q quit"));
    }
}
