// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Sources panel widget
//!
//! Shows the citations behind the latest AI reply: document name, a
//! tier-colored relevance tag, and the cited excerpt when the backend
//! provides one.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::state::{truncate_string, Source};

/// Placeholder when the latest reply cited nothing
const EMPTY_PLACEHOLDER: &str = "No sources for this reply";

/// Placeholder for a source without an excerpt
const NO_SNIPPET: &str = "No text preview available";

/// Widget for rendering the sources panel
pub struct SourcesPanel<'a> {
    sources: &'a [Source],
}

impl<'a> SourcesPanel<'a> {
    pub fn new(sources: &'a [Source]) -> Self {
        Self { sources }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        if self.sources.is_empty() {
            return vec![
                Line::default(),
                Line::from(Span::styled(
                    format!(" {EMPTY_PLACEHOLDER}"),
                    Style::default().fg(Color::DarkGray).italic(),
                )),
            ];
        }

        let mut lines = Vec::new();
        for (index, source) in self.sources.iter().enumerate() {
            let tier = source.tier();
            let name = truncate_string(&source.name, width.saturating_sub(10).max(8));

            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(name, Style::default().fg(Color::White).bold()),
                Span::raw(" "),
                Span::styled(
                    format!("{:>3}%", source.relevance),
                    Style::default().fg(tier.color()).bold(),
                ),
            ]));

            let snippet = match &source.text_snippet {
                Some(text) => Span::styled(
                    format!("    {}", truncate_string(text, width.saturating_sub(4) * 3)),
                    Style::default().fg(Color::Gray),
                ),
                None => Span::styled(
                    format!("    {NO_SNIPPET}"),
                    Style::default().fg(Color::DarkGray).italic(),
                ),
            };
            lines.push(Line::from(snippet));
            lines.push(Line::default());
        }

        lines
    }
}

impl<'a> Widget for SourcesPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Sources ")
            .title_style(Style::default().fg(Color::White).bold());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.lines(inner.width as usize))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
