//! Markdown → ratatui renderer.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values. Headings, bold, italic, inline code, lists,
//! task lists, blockquotes, links, tables, and rules become prose; fenced and
//! indented code blocks are split out as [`CodeSample`]s (with syntect
//! highlighting) so the document view can draw them through the code block
//! widget with live copy state.
//!
//! Rendering is a pure function of the input text. Anything the writer does
//! not understand (raw HTML, footnote references) is shown literally.

use std::sync::LazyLock;

use pulldown_cmark::{
    Alignment, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use unicode_width::UnicodeWidthStr;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Widest a table column may grow before its cells wrap.
const MAX_CELL_WIDTH: usize = 40;

/// A literal code sample plus its highlighted presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSample {
    /// Exact text between the fences, without the final newline.
    pub code: String,
    pub language: Option<String>,
    pub filename: Option<String>,
    /// One entry per line of `code` (`code.split('\n')`), tabs expanded.
    pub highlighted: Vec<Line<'static>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock {
    Prose(Text<'static>),
    Code(CodeSample),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedDocument {
    /// Text of the first level-1 heading.
    pub title: Option<String>,
    pub blocks: Vec<DocBlock>,
}

impl RenderedDocument {
    pub fn code_samples(&self) -> impl Iterator<Item = &CodeSample> {
        self.blocks.iter().filter_map(|b| match b {
            DocBlock::Code(sample) => Some(sample),
            DocBlock::Prose(_) => None,
        })
    }

    pub fn code_block_count(&self) -> usize {
        self.code_samples().count()
    }
}

/// Parse markdown content into a styled document.
pub fn render(content: &str, base_fg: Color) -> RenderedDocument {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_TABLES);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.finish()
}

/// Split a fence info string (`toml title="app.toml"`) into language and filename.
pub fn parse_info_string(info: &str) -> (Option<String>, Option<String>) {
    let info = info.trim();
    let (lang, rest) = match info.find(char::is_whitespace) {
        Some(i) => (&info[..i], info[i..].trim_start()),
        None => (info, ""),
    };
    let language = (!lang.is_empty() && !lang.contains('=')).then(|| lang.to_string());

    let attrs = if language.is_some() { rest } else { info };
    let filename = ["title=", "filename="].iter().find_map(|key| {
        let start = attrs.find(key)? + key.len();
        let value = &attrs[start..];
        let value = match value.strip_prefix('"') {
            Some(quoted) => quoted.split('"').next()?,
            None => value.split_whitespace().next()?,
        };
        (!value.is_empty()).then(|| value.to_string())
    });
    (language, filename)
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    blocks: Vec<DocBlock>,
    /// Prose accumulated since the last code block.
    text: Text<'static>,
    title: Option<String>,
    base_fg: Color,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// A list item marker was just written; the item's paragraph continues it.
    fresh_item: bool,
    /// Open fenced/indented code block.
    code: Option<CodeBuilder>,
    /// Open table.
    table: Option<TableBuilder>,
    /// Stored link URL, appended after the link text closes.
    link_url: Option<String>,
    /// Collecting the text of the first H1.
    capturing_title: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

struct CodeBuilder {
    language: Option<String>,
    filename: Option<String>,
    buf: String,
}

struct TableBuilder {
    alignments: Vec<Alignment>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            blocks: vec![],
            text: Text::default(),
            title: None,
            base_fg,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            fresh_item: false,
            code: None,
            table: None,
            link_url: None,
            capturing_title: None,
            needs_newline: false,
        }
    }

    fn finish(mut self) -> RenderedDocument {
        self.flush_prose();
        RenderedDocument {
            title: self.title,
            blocks: self.blocks,
        }
    }

    fn flush_prose(&mut self) {
        if !self.text.lines.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.blocks.push(DocBlock::Prose(text));
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    /// Push a style that composes with the current one (inherits parent modifiers).
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        self.fresh_item = false;
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        if let Some(table) = self.table.as_mut() {
            match event {
                Event::Text(t) | Event::Code(t) | Event::InlineHtml(t) | Event::Html(t) => {
                    table.cell.push_str(&t);
                    return;
                }
                Event::SoftBreak | Event::HardBreak => {
                    table.cell.push(' ');
                    return;
                }
                _ => {}
            }
        }

        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::Html(html) => self.literal_block(html),
            Event::InlineHtml(html) => {
                let style = self.style();
                self.push_span(Span::styled(html.to_string(), style));
            }
            Event::FootnoteReference(label) => {
                let style = self.style();
                self.push_span(Span::styled(format!("[^{label}]"), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_span(Span::raw(marker));
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        // Cells are plain text; inline markup inside a table is dropped
        if self.table.is_some() {
            return;
        }
        match tag {
            // ── Block elements ──────────────────────────────────────────
            Tag::Paragraph => {
                if self.fresh_item {
                    return;
                }
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                let hs = heading_style(self.base_fg, level);
                let depth = heading_depth(level) as usize;
                self.push_line(Line::from(Span::styled(
                    format!("{} ", "#".repeat(depth)),
                    hs,
                )));
                if level == HeadingLevel::H1 && self.title.is_none() {
                    self.capturing_title = Some(String::new());
                }
                // Heading text inherits the heading style, not just the `#` prefix
                self.push_style(hs);
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.line_prefixes.push(Span::styled(
                    "│ ",
                    Style::default().fg(Color::DarkGray),
                ));
                self.push_style(
                    Style::default()
                        .fg(self.base_fg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => {
                let (language, filename) = match &kind {
                    CodeBlockKind::Fenced(info) => parse_info_string(info),
                    CodeBlockKind::Indented => (None, None),
                };
                self.flush_prose();
                self.fresh_item = false;
                self.code = Some(CodeBuilder {
                    language,
                    filename,
                    buf: String::new(),
                });
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let depth = self.list_indices.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}- "),
                        Some(n) => {
                            let s = format!("{indent}{}. ", n);
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(
                        marker,
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                self.fresh_item = true;
            }
            Tag::Table(alignments) => {
                self.blank_line_if_needed();
                self.table = Some(TableBuilder {
                    alignments,
                    header: None,
                    rows: vec![],
                    row: vec![],
                    cell: String::new(),
                });
            }

            // ── Inline elements ─────────────────────────────────────────
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Tag::Image { dest_url, .. } => {
                self.push_span(Span::styled("[image: ", Style::default().fg(Color::DarkGray)));
                self.link_url = Some(dest_url.to_string());
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            _ => {} // Table heads/rows/cells handled in close(); definitions skipped
        }
    }

    fn close(&mut self, tag: TagEnd) {
        if let Some(table) = self.table.as_mut() {
            match tag {
                TagEnd::TableCell => {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell.trim().to_string());
                    return;
                }
                TagEnd::TableHead => {
                    table.header = Some(std::mem::take(&mut table.row));
                    return;
                }
                TagEnd::TableRow => {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                    return;
                }
                TagEnd::Table => {}
                _ => return,
            }
        }

        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                if let Some(title) = self.capturing_title.take() {
                    self.title = Some(title.trim().to_string());
                }
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                if let Some(builder) = self.code.take() {
                    self.blocks.push(DocBlock::Code(builder.finish()));
                }
                self.needs_newline = false;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Item => self.fresh_item = false,
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    for line in table.render(self.base_fg) {
                        self.push_line(line);
                    }
                }
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(
                        url,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    self.push_span(Span::raw(")"));
                }
            }
            TagEnd::Image => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::styled(
                        format!(" ({url})]"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            _ => {}
        }
    }

    // ── Content handlers ────────────────────────────────────────────────

    fn text(&mut self, cow: CowStr<'_>) {
        if let Some(code) = self.code.as_mut() {
            code.buf.push_str(&cow);
            return;
        }

        // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
        let raw = cow.to_string();
        let text = if raw.contains('\t') {
            raw.replace('\t', "    ")
        } else {
            raw
        };

        if let Some(title) = self.capturing_title.as_mut() {
            title.push_str(&text);
        }

        // Normal text inherits current style (heading, bold, etc.)
        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        if let Some(title) = self.capturing_title.as_mut() {
            title.push_str(&cow);
        }
        let style = Style::default().fg(Color::White).bg(Color::DarkGray);
        self.push_span(Span::styled(cow.to_string(), style));
    }

    /// Raw HTML blocks are shown as-is.
    fn literal_block(&mut self, html: CowStr<'_>) {
        let style = Style::default().fg(self.base_fg);
        for line in html.lines() {
            self.push_line(Line::from(Span::styled(line.to_owned(), style)));
        }
        self.needs_newline = true;
    }
}

impl CodeBuilder {
    fn finish(self) -> CodeSample {
        let code = self
            .buf
            .strip_suffix('\n')
            .unwrap_or(&self.buf)
            .to_string();
        let highlighted = highlight(&code, self.language.as_deref());
        CodeSample {
            code,
            language: self.language,
            filename: self.filename,
            highlighted,
        }
    }
}

/// Highlight each line of `code`, one output line per `split('\n')` line.
fn highlight(code: &str, language: Option<&str>) -> Vec<Line<'static>> {
    let syntax = language.and_then(|l| SYNTAX_SET.find_syntax_by_token(l));
    let Some(syntax) = syntax else {
        let plain = Style::default().fg(Color::White);
        return code
            .split('\n')
            .map(|line| Line::from(Span::styled(line.replace('\t', "    "), plain)))
            .collect();
    };

    let theme = &THEME_SET.themes["base16-ocean.dark"];
    let mut hl = HighlightLines::new(syntax, theme);
    code.split('\n')
        .map(|line| {
            let with_newline = format!("{line}\n");
            match hl.highlight_line(&with_newline, &SYNTAX_SET) {
                Ok(ranges) => Line::from(
                    ranges
                        .into_iter()
                        .filter_map(|(hl_style, frag)| {
                            let content = frag.trim_end_matches('\n').replace('\t', "    ");
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect::<Vec<_>>(),
                ),
                Err(_) => Line::from(line.replace('\t', "    ")),
            }
        })
        .collect()
}

impl TableBuilder {
    fn render(self, base_fg: Color) -> Vec<Line<'static>> {
        let columns = self
            .header
            .iter()
            .chain(self.rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return vec![];
        }

        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                self.header
                    .iter()
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0)
                    .clamp(1, MAX_CELL_WIDTH)
            })
            .collect();

        let border = Style::default().fg(Color::DarkGray);
        let header_style = Style::default().fg(base_fg).add_modifier(Modifier::BOLD);
        let cell_style = Style::default().fg(base_fg);

        let mut lines = vec![];
        if let Some(header) = &self.header {
            lines.extend(self.render_row(header, &widths, header_style, border));
            let rule = widths
                .iter()
                .map(|w| "─".repeat(*w))
                .collect::<Vec<_>>()
                .join("─┼─");
            lines.push(Line::from(Span::styled(rule, border)));
        }
        for row in &self.rows {
            lines.extend(self.render_row(row, &widths, cell_style, border));
        }
        lines
    }

    /// One or more terminal lines for a row; long cells wrap within their column.
    fn render_row(
        &self,
        row: &[String],
        widths: &[usize],
        style: Style,
        border: Style,
    ) -> Vec<Line<'static>> {
        let wrapped: Vec<Vec<String>> = widths
            .iter()
            .enumerate()
            .map(|(c, w)| {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                let lines: Vec<String> = textwrap::wrap(cell, *w)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect();
                if lines.is_empty() { vec![String::new()] } else { lines }
            })
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|r| {
                let mut spans = vec![];
                for (c, w) in widths.iter().enumerate() {
                    if c > 0 {
                        spans.push(Span::styled(" │ ", border));
                    }
                    let content = wrapped[c].get(r).map(String::as_str).unwrap_or("");
                    let align = self.alignments.get(c).copied().unwrap_or(Alignment::None);
                    spans.push(Span::styled(pad(content, *w, align), style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn pad(content: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(content.width());
    match align {
        Alignment::Right => format!("{}{}", " ".repeat(fill), content),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), content, " ".repeat(fill - left))
        }
        Alignment::None | Alignment::Left => format!("{}{}", content, " ".repeat(fill)),
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prose_lines(doc: &RenderedDocument) -> Vec<String> {
        doc.blocks
            .iter()
            .filter_map(|b| match b {
                DocBlock::Prose(text) => Some(text),
                DocBlock::Code(_) => None,
            })
            .flat_map(|t| t.lines.iter())
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    fn first_prose(doc: &RenderedDocument) -> &Text<'static> {
        match &doc.blocks[0] {
            DocBlock::Prose(text) => text,
            other => panic!("expected prose, got {other:?}"),
        }
    }

    #[test]
    fn heading_text_inherits_heading_style() {
        let doc = render("## Hello", Color::Blue);
        let line = &first_prose(&doc).lines[0];
        assert!(line.spans.len() >= 2, "expected >= 2 spans, got {:?}", line);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[1].style.fg, Some(Color::Blue));
    }

    #[test]
    fn first_h1_becomes_title() {
        let doc = render("# Economy System\n\nText\n\n# Second", Color::Blue);
        assert_eq!(doc.title.as_deref(), Some("Economy System"));
    }

    #[test]
    fn bold_text_is_bold() {
        let doc = render("Some **bold** text", Color::Blue);
        let line = &first_prose(&doc).lines[0];
        let bold_span = line.spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inline_code_styled() {
        let doc = render("Use `foo()` here", Color::Blue);
        let line = &first_prose(&doc).lines[0];
        let code_span = line.spans.iter().find(|s| s.content == "foo()").unwrap();
        assert_eq!(code_span.style.fg, Some(Color::White));
        assert_eq!(code_span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn code_block_is_split_out_verbatim() {
        let doc = render("Intro\n\n```bash\n/pay Steve 100\n```\n\nAfter", Color::Blue);
        assert_eq!(doc.blocks.len(), 3);
        let sample = doc.code_samples().next().unwrap();
        assert_eq!(sample.code, "/pay Steve 100");
        assert_eq!(sample.language.as_deref(), Some("bash"));
        assert_eq!(sample.highlighted.len(), 1);
    }

    #[test]
    fn code_sample_keeps_blank_lines_and_indentation() {
        let doc = render("```\n  a\n\n\tb\n```", Color::Blue);
        let sample = doc.code_samples().next().unwrap();
        assert_eq!(sample.code, "  a\n\n\tb");
        assert_eq!(sample.highlighted.len(), 3);
        let third: String = sample.highlighted[2]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(third, "    b", "tabs expand only in the display copy");
    }

    #[test]
    fn info_string_filename_is_parsed() {
        assert_eq!(
            parse_info_string(r#"toml title="vonixcore-discord.toml""#),
            (Some("toml".into()), Some("vonixcore-discord.toml".into()))
        );
        assert_eq!(
            parse_info_string("yaml filename=config.yml"),
            (Some("yaml".into()), Some("config.yml".into()))
        );
        assert_eq!(parse_info_string("rust"), (Some("rust".into()), None));
        assert_eq!(parse_info_string(""), (None, None));
    }

    #[test]
    fn plain_text_uses_base_color() {
        let doc = render("hello", Color::Green);
        let span = &first_prose(&doc).lines[0].spans[0];
        assert_eq!(span.style.fg, Some(Color::Green));
    }

    #[test]
    fn table_renders_header_rule_and_cells() {
        let md = "| Type | Best For |\n| --- | --- |\n\
                  | sqlite | Single servers |\n| mysql | Networks |";
        let lines = prose_lines(&render(md, Color::Blue));
        let header = lines.iter().position(|l| l.contains("Type")).unwrap();
        assert!(lines[header].contains("│"));
        assert!(lines[header].contains("Best For"));
        assert!(lines[header + 1].contains("┼"));
        assert!(lines[header + 2].starts_with("sqlite"));
        assert!(lines[header + 3].starts_with("mysql "));
    }

    #[test]
    fn raw_html_is_shown_literally() {
        let lines = prose_lines(&render("<div class=\"note\">hi</div>\n", Color::Blue));
        assert!(lines.iter().any(|l| l.contains("<div class=\"note\">")));
    }

    #[test]
    fn malformed_markdown_degrades_to_text() {
        let lines = prose_lines(&render("**unclosed and [broken](", Color::Blue));
        let all = lines.join("\n");
        assert!(all.contains("**unclosed"));
        assert!(all.contains("[broken]("));
    }

    #[test]
    fn rendering_is_deterministic() {
        let md = "# T\n\n- a\n- b\n\n```toml\nx = 1\n```\n";
        assert_eq!(render(md, Color::Blue), render(md, Color::Blue));
    }

    #[test]
    fn loose_list_items_keep_marker_on_text_line() {
        let lines = prose_lines(&render("- one\n\n- two\n", Color::Blue));
        assert!(lines.iter().any(|l| l == "- one"), "got {lines:?}");
        assert!(lines.iter().any(|l| l == "- two"), "got {lines:?}");
    }

    #[test]
    fn task_list_markers_render() {
        let lines = prose_lines(&render("- [x] done\n- [ ] todo\n", Color::Blue));
        assert!(lines.iter().any(|l| l.contains("[x] done")));
        assert!(lines.iter().any(|l| l.contains("[ ] todo")));
    }
}
