// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Markdown rendering for AI replies
//!
//! Rendering is an injected capability: the widget asks a
//! [`MarkdownRenderer`] to turn reply text into styled terminal text, so
//! tests (and `--plain` mode) can substitute a no-op renderer. User
//! messages never pass through here; they are rendered verbatim.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};
use ratatui::prelude::*;
use ratatui::text::Text;

/// Turns reply text into styled terminal text.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, content: &str) -> Text<'static>;
}

/// Renders content verbatim, one line per input line.
#[derive(Debug, Default)]
pub struct PlainRenderer;

impl MarkdownRenderer for PlainRenderer {
    fn render(&self, content: &str) -> Text<'static> {
        Text::raw(content.to_string())
    }
}

/// Markdown renderer backed by pulldown-cmark.
///
/// Supports the inline and block constructs a chat reply realistically
/// uses: emphasis, strong, inline code, fenced code blocks, headings,
/// bullet/ordered lists, and rules. Everything else falls through as text.
#[derive(Debug, Default)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, content: &str) -> Text<'static> {
        let mut builder = LineBuilder::new();

        for event in Parser::new(content) {
            match event {
                Event::Start(tag) => builder.start_tag(tag),
                Event::End(tag) => builder.end_tag(tag),
                Event::Text(text) => builder.text(&text),
                Event::Code(code) => builder.push_span(
                    code.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Event::SoftBreak | Event::HardBreak => builder.flush_line(),
                Event::Rule => builder.rule(),
                _ => {}
            }
        }

        builder.finish()
    }
}

/// Accumulates styled spans into lines while walking the event stream.
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    in_code_block: bool,
    list_stack: Vec<Option<u64>>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            bold: 0,
            italic: 0,
            in_code_block: false,
            list_stack: Vec::new(),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Strong => self.bold += 1,
            Tag::Emphasis => self.italic += 1,
            Tag::Heading(level, _, _) => {
                self.blank_separator();
                self.push_span(
                    heading_prefix(level).to_string(),
                    Style::default().fg(Color::Cyan).bold(),
                );
                self.bold += 1;
            }
            Tag::CodeBlock(kind) => {
                self.blank_separator();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.lines.push(Line::from(Span::styled(
                            format!("[{lang}]"),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.blank_separator();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(index)) => {
                        let marker = format!("{indent}{index}. ");
                        *index += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.push_span(marker, Style::default().fg(Color::DarkGray));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Strong => self.bold = self.bold.saturating_sub(1),
            Tag::Emphasis => self.italic = self.italic.saturating_sub(1),
            Tag::Heading(..) => {
                self.bold = self.bold.saturating_sub(1);
                self.flush_line();
            }
            Tag::Paragraph => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.blank_separator();
                }
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.blank_separator();
            }
            Tag::List(_) => {
                self.list_stack.pop();
                self.flush_line();
            }
            Tag::Item => self.flush_line(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                self.lines.push(Line::from(Span::styled(
                    format!("  {line}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            return;
        }

        let mut style = Style::default();
        if self.bold > 0 {
            style = style.bold();
        }
        if self.italic > 0 {
            style = style.italic();
        }
        self.push_span(text.to_string(), style);
    }

    fn push_span(&mut self, content: String, style: Style) {
        self.current.push(Span::styled(content, style));
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    /// Insert one blank line between blocks, never two in a row.
    fn blank_separator(&mut self) {
        self.flush_line();
        if matches!(self.lines.last(), Some(line) if !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn rule(&mut self) {
        self.blank_separator();
        self.lines.push(Line::from(Span::styled(
            "─".repeat(24),
            Style::default().fg(Color::DarkGray),
        )));
        self.blank_separator();
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        while matches!(self.lines.last(), Some(line) if line.spans.is_empty()) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        Text::from(self.lines)
    }
}

fn heading_prefix(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "# ",
        HeadingLevel::H2 => "## ",
        HeadingLevel::H3 => "### ",
        HeadingLevel::H4 => "#### ",
        HeadingLevel::H5 => "##### ",
        HeadingLevel::H6 => "###### ",
    }
}
