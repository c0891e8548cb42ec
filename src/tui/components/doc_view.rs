//! # DocView Component
//!
//! Scrollable document pane: topic description, rendered markdown with code
//! blocks, and a previous/next footer.
//!
//! ## Architecture
//!
//! `DocView` is a transient component (created each frame) that wraps
//! `&'a mut DocViewState` (persistent state) and the current `Page` (props).
//!
//! The rendered document is cached against the page's load ticket. When the
//! ticket changes (new navigation, reload) the cache, scroll position and
//! per-block copy state are dropped and rebuilt from the new text.
//!
//! Block heights are measured every frame (`Paragraph::line_count` for prose,
//! `CodeBlock::height` for code) and stacked into a `ScrollView`.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::content::LoadTicket;
use crate::core::navigation;
use crate::core::state::Page;
use crate::tui::clipboard::Clipboard;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::code_block::{CodeBlock, CodeBlockState};
use crate::tui::event::TuiEvent;
use crate::tui::markdown::{self, DocBlock, RenderedDocument};

/// Blank rows after each code block.
const CODE_BLOCK_GAP: u16 = 1;

/// Persistent document pane state. Lives in `TuiState`.
#[derive(Default)]
pub struct DocViewState {
    pub scroll_state: ScrollViewState,
    rendered: Option<(LoadTicket, RenderedDocument)>,
    code_states: Vec<CodeBlockState>,
    /// Code block targeted by `y`, cycled with `n`/`N`.
    pub focused_code: Option<usize>,
    pub line_numbers: bool,
    /// `(top, height)` of each code block in content rows, from the last frame.
    code_spans: Vec<(u16, u16)>,
    viewport_height: u16,
    content_height: u16,
    scroll_to_focus: bool,
    /// Area the pane occupied in the last frame.
    pub area: Rect,
}

/// Events emitted by the document pane.
#[derive(Debug, PartialEq, Eq)]
pub enum DocViewEvent {
    /// Copy the focused code block (or the first one).
    CopyRequested,
}

impl DocViewState {
    pub fn new(line_numbers: bool) -> Self {
        Self {
            line_numbers,
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&RenderedDocument> {
        self.rendered.as_ref().map(|(_, doc)| doc)
    }

    /// Bring the cache in line with the page: render new text, or drop a
    /// document that belongs to an older ticket.
    pub fn sync(&mut self, page: Option<&Page>) {
        let Some(page) = page else {
            self.reset(None);
            return;
        };
        if self.rendered.as_ref().map(|(ticket, _)| *ticket) == Some(page.ticket) {
            return;
        }
        let doc = page
            .text()
            .map(|text| (page.ticket, markdown::render(text, Color::White)));
        self.reset(doc);
    }

    fn reset(&mut self, rendered: Option<(LoadTicket, RenderedDocument)>) {
        let blocks = rendered
            .as_ref()
            .map_or(0, |(_, doc)| doc.code_block_count());
        self.rendered = rendered;
        self.code_states = vec![CodeBlockState::default(); blocks];
        self.code_spans.clear();
        self.focused_code = None;
        self.scroll_to_focus = false;
        self.scroll_state = ScrollViewState::default();
    }

    pub fn code_block_count(&self) -> usize {
        self.code_states.len()
    }

    pub fn focus_next(&mut self) {
        let count = self.code_block_count();
        if count == 0 {
            return;
        }
        self.focused_code = Some(self.focused_code.map_or(0, |i| (i + 1) % count));
        self.scroll_to_focus = true;
    }

    pub fn focus_prev(&mut self) {
        let count = self.code_block_count();
        if count == 0 {
            return;
        }
        self.focused_code = Some(self.focused_code.map_or(count - 1, |i| (i + count - 1) % count));
        self.scroll_to_focus = true;
    }

    pub fn toggle_line_numbers(&mut self) {
        self.line_numbers = !self.line_numbers;
    }

    /// Copy the focused block, or the first block when none is focused.
    /// `None` when the page has no code.
    pub fn copy_focused(&mut self, clipboard: &dyn Clipboard, now: Instant) -> Option<bool> {
        let index = self.focused_code.unwrap_or(0);
        let sample = self.rendered.as_ref()?.1.code_samples().nth(index)?;
        let state = self.code_states.get_mut(index)?;
        self.focused_code = Some(index);
        Some(state.copy(clipboard, &sample.code, now))
    }

    /// Whether any block is showing its copy confirmation at `now`.
    pub fn feedback_active(&self, now: Instant) -> bool {
        self.code_states.iter().any(|s| s.is_showing_copied(now))
    }

    /// Focus the code block under a click. Clicking a block's top border
    /// (where the copy hint sits) also asks for a copy.
    pub fn click(&mut self, row: u16) -> Option<DocViewEvent> {
        let area = self.area;
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let content_y = row - area.y + self.scroll_state.offset().y;
        let index = self
            .code_spans
            .iter()
            .position(|(top, height)| content_y >= *top && content_y < top + height)?;
        self.focused_code = Some(index);
        (content_y == self.code_spans[index].0).then_some(DocViewEvent::CopyRequested)
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Scroll so the focused code block is visible, top edge first.
    fn reveal_focused(&mut self) {
        let Some(&(top, height)) = self.focused_code.and_then(|i| self.code_spans.get(i)) else {
            return;
        };
        let offset_y = self.scroll_state.offset().y;
        if top < offset_y || height > self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if top + height > offset_y + self.viewport_height {
            let y = (top + height).saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }
}

impl EventHandler for DocViewState {
    type Event = DocViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DocViewEvent> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => {
                self.scroll_state.set_offset(Position { x: 0, y: self.max_offset() });
            }
            TuiEvent::NextCodeBlock => self.focus_next(),
            TuiEvent::PrevCodeBlock => self.focus_prev(),
            TuiEvent::ToggleLineNumbers => self.toggle_line_numbers(),
            TuiEvent::CopyCodeBlock => return Some(DocViewEvent::CopyRequested),
            TuiEvent::Escape => self.focused_code = None,
            _ => {}
        }
        None
    }
}

/// One stacked element of the page.
enum Piece<'a> {
    Prose(Paragraph<'a>),
    Code(CodeBlock<'a>),
}

/// Transient render wrapper for the document pane.
pub struct DocView<'a> {
    state: &'a mut DocViewState,
    page: Option<&'a Page>,
    now: Instant,
}

impl<'a> DocView<'a> {
    pub fn new(state: &'a mut DocViewState, page: Option<&'a Page>, now: Instant) -> Self {
        Self { state, page, now }
    }
}

impl Component for DocView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.page);
        self.state.area = area;

        let Some(page) = self.page else {
            return;
        };
        let Some((_, doc)) = &self.state.rendered else {
            let loading = Paragraph::new(format!("Loading {}…", page.topic.title))
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            let row = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
            frame.render_widget(loading, row);
            return;
        };

        let content_width = area.width.saturating_sub(1); // scrollbar
        let mut pieces: Vec<(Piece, u16)> = vec![];

        let description = Paragraph::new(Text::from(vec![
            Line::from(Span::styled(
                page.topic.description,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
        ]))
        .wrap(Wrap { trim: false });
        let height = description.line_count(content_width) as u16;
        pieces.push((Piece::Prose(description), height));

        let mut code_index = 0;
        for block in &doc.blocks {
            match block {
                DocBlock::Prose(text) => {
                    let paragraph = Paragraph::new(text.clone()).wrap(Wrap { trim: false });
                    let height = paragraph.line_count(content_width) as u16;
                    pieces.push((Piece::Prose(paragraph), height));
                }
                DocBlock::Code(sample) => {
                    let copied = self
                        .state
                        .code_states
                        .get(code_index)
                        .is_some_and(|s| s.is_showing_copied(self.now));
                    let focused = self.state.focused_code == Some(code_index);
                    let widget = CodeBlock::new(sample, self.state.line_numbers, focused, copied);
                    let height = widget.height(content_width);
                    pieces.push((Piece::Code(widget), height));
                    code_index += 1;
                }
            }
        }

        if let Some(footer) = footer(page.topic.route, content_width) {
            let height = footer.line_count(content_width) as u16;
            pieces.push((Piece::Prose(footer), height));
        }

        // Lay out top to bottom, remembering where code blocks landed
        let mut code_spans = vec![];
        let mut y: u16 = 0;
        let mut placed = Vec::with_capacity(pieces.len());
        for (piece, height) in pieces {
            let rect = Rect::new(0, y, content_width, height);
            y = y.saturating_add(height);
            if let Piece::Code(_) = piece {
                code_spans.push((rect.y, height));
                y = y.saturating_add(CODE_BLOCK_GAP);
            }
            placed.push((piece, rect));
        }
        let total_height = y;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (piece, rect) in placed {
            match piece {
                Piece::Prose(paragraph) => scroll_view.render_widget(paragraph, rect),
                Piece::Code(widget) => scroll_view.render_widget(widget, rect),
            }
        }

        self.state.code_spans = code_spans;
        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        if std::mem::take(&mut self.state.scroll_to_focus) {
            self.state.reveal_focused();
        }
        self.state.clamp_scroll();

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Previous/next links by sidebar order.
fn footer(route: &str, width: u16) -> Option<Paragraph<'static>> {
    let (prev, next) = navigation::neighbors(route);
    if prev.is_none() && next.is_none() {
        return None;
    }
    let link = Style::default().fg(Color::Cyan);
    let key = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(prev) = prev {
        lines.push(Line::from(vec![
            Span::styled("[ ", key),
            Span::styled(format!("← {}", prev.title), link),
        ]));
    }
    if let Some(next) = next {
        lines.push(
            Line::from(vec![
                Span::styled(format!("{} →", next.title), link),
                Span::styled(" ]", key),
            ])
            .right_aligned(),
        );
    }
    Some(Paragraph::new(lines))
}
