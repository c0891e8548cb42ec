//! # CodeBlock Component
//!
//! Bordered code sample with a language/filename label, optional line
//! numbers and a copy control.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CodeBlockState` (copy feedback timestamp) lives in `DocViewState`,
//!   one per code block on the page
//! - `CodeBlock` is created each frame from the sample and that state
//!
//! Copy feedback is a timestamp compared against the frame's `now`, so the
//! "✓ Copied" label disappears on the first redraw after
//! [`COPY_FEEDBACK`] has elapsed. Nothing is scheduled.

use std::time::{Duration, Instant};

use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::tui::clipboard::Clipboard;
use crate::tui::markdown::CodeSample;

/// How long "✓ Copied" stays up after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Borders (1 + 1) plus horizontal padding (1 + 1).
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top and bottom border.
const VERTICAL_OVERHEAD: u16 = 2;

/// Copy feedback for one code block.
#[derive(Debug, Default, Clone)]
pub struct CodeBlockState {
    copied_at: Option<Instant>,
}

impl CodeBlockState {
    /// Write `text` to the clipboard. On success the confirmation starts at
    /// `now`; on failure the error is logged and the state is left alone.
    pub fn copy(&mut self, clipboard: &dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                debug!("Copy to clipboard failed: {}", e);
                false
            }
        }
    }

    pub fn is_showing_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK)
    }
}

/// Transient render wrapper for one code sample.
pub struct CodeBlock<'a> {
    pub sample: &'a CodeSample,
    pub line_numbers: bool,
    pub focused: bool,
    pub copied: bool,
}

impl<'a> CodeBlock<'a> {
    pub fn new(sample: &'a CodeSample, line_numbers: bool, focused: bool, copied: bool) -> Self {
        Self {
            sample,
            line_numbers,
            focused,
            copied,
        }
    }

    /// Rendered height at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.body_lines(width).len() as u16 + VERTICAL_OVERHEAD
    }

    fn gutter_width(&self) -> usize {
        if !self.line_numbers {
            return 0;
        }
        let digits = self.sample.highlighted.len().max(1).to_string().len();
        digits + 3 // "NN │ "
    }

    /// Body rows: each sample line, cut to the inner width. Lines are
    /// numbered from 1, blank ones included; only the first row of a line
    /// carries its number.
    fn body_lines(&self, width: u16) -> Vec<Line<'a>> {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let gutter = self.gutter_width();
        let text_width = inner.saturating_sub(gutter).max(1);
        let digits = gutter.saturating_sub(3);
        let gutter_style = Style::default().fg(Color::DarkGray);

        let mut out = vec![];
        for (i, line) in self.sample.highlighted.iter().enumerate() {
            for (row, spans) in wrap_spans(line, text_width).into_iter().enumerate() {
                let mut rendered = Vec::with_capacity(spans.len() + 1);
                if self.line_numbers {
                    let label = if row == 0 {
                        format!("{:>digits$} │ ", i + 1)
                    } else {
                        format!("{:>digits$} │ ", "")
                    };
                    rendered.push(Span::styled(label, gutter_style));
                }
                rendered.extend(spans);
                out.push(Line::from(rendered));
            }
        }
        out
    }

    fn label(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        if let Some(filename) = &self.sample.filename {
            spans.push(Span::styled(
                filename.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        let language = self
            .sample
            .language
            .as_deref()
            .unwrap_or("text")
            .to_uppercase();
        spans.push(Span::styled(language, Style::default().fg(Color::Gray)));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn copy_hint(&self) -> Line<'static> {
        let hint = if self.copied {
            Span::styled(
                " ✓ Copied ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" [y] copy ", Style::default().fg(Color::DarkGray))
        };
        Line::from(hint).right_aligned()
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(self.label())
            .title_top(self.copy_hint())
            .padding(Padding::horizontal(1));

        Paragraph::new(self.body_lines(area.width))
            .block(block)
            .render(area, buf);
    }
}

/// Split a line's spans into rows no wider than `width` columns.
fn wrap_spans<'a>(line: &Line<'a>, width: usize) -> Vec<Vec<Span<'a>>> {
    let mut rows: Vec<Vec<Span<'a>>> = vec![vec![]];
    let mut used = 0;
    for span in &line.spans {
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !chunk.is_empty() {
                    let piece = std::mem::take(&mut chunk);
                    if let Some(row) = rows.last_mut() {
                        row.push(Span::styled(piece, span.style));
                    }
                }
                rows.push(vec![]);
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty()
            && let Some(row) = rows.last_mut()
        {
            row.push(Span::styled(chunk, span.style));
        }
    }
    rows
}
