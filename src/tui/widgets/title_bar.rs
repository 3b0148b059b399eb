// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Title bar widget
//!
//! Always visible, even minimized. Shows the widget title, a busy dot
//! while a reply is pending, and the endpoint on the right.

use ratatui::prelude::*;

use crate::tui::state::truncate_string;

/// Widget for rendering the title bar
pub struct TitleBar<'a> {
    title: &'a str,
    endpoint: &'a str,
    minimized: bool,
    fullscreen: bool,
    typing: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, endpoint: &'a str) -> Self {
        Self {
            title,
            endpoint,
            minimized: false,
            fullscreen: false,
            typing: false,
        }
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    /// Toggle glyphs on the right edge: restore/minimize and
    /// fullscreen/windowed, mirroring the current state.
    fn toggles(&self) -> String {
        let min_glyph = if self.minimized { "▣" } else { "▁" };
        let full_glyph = if self.fullscreen { "❐" } else { "⛶" };
        format!("{min_glyph} ^T  {full_glyph} ^F ")
    }
}

impl<'a> Widget for TitleBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let base = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position::new(x, area.y)) {
                cell.set_style(base);
            }
        }

        let mut spans = vec![Span::styled(
            format!(" {} ", self.title),
            base.bold(),
        )];

        if self.typing {
            spans.push(Span::styled("● ", base.fg(Color::Green)));
        }

        if !self.minimized {
            spans.push(Span::styled(
                truncate_string(self.endpoint, area.width.saturating_sub(24).max(8) as usize),
                base.fg(Color::Gray),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Right-aligned toggle hints
        let toggles = self.toggles();
        let toggles_width = toggles.chars().count() as u16;
        if area.width > toggles_width {
            buf.set_string(
                area.x + area.width - toggles_width,
                area.y,
                toggles,
                base.fg(Color::Gray),
            );
        }
    }
}
