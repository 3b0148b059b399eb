// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Input area widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::state::InputState;

/// Widget for rendering the input area
pub struct InputArea<'a> {
    input: &'a InputState,
    placeholder: Option<&'a str>,
    waiting: bool,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            placeholder: None,
            waiting: false,
        }
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Dim the border while a reply is pending
    pub fn waiting(mut self, waiting: bool) -> Self {
        self.waiting = waiting;
        self
    }

    /// Calculate cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Account for border (1) and prompt "> " (2)
        let x = area.x + 1 + 2 + self.input.cursor as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(1)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.waiting {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        let text_x = inner.x + 2;
        let text_width = inner.width.saturating_sub(2) as usize;

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_string(
                    text_x,
                    inner.y,
                    placeholder,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let display: String = self.input.text().chars().take(text_width).collect();
            buf.set_string(text_x, inner.y, display, Style::default().fg(Color::White));
        }

        // Highlight the cursor cell
        let (cursor_x, cursor_y) = self.cursor_position(area);
        if cursor_x < area.x + area.width && cursor_y < area.y + area.height {
            if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

/// Render the input area with a key-hint line below it
pub fn render_input_with_hints(
    input: &InputState,
    area: Rect,
    buf: &mut Buffer,
    waiting: bool,
    hints: &[(&str, &str)],
) {
    if area.height < 2 {
        return;
    }

    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };

    let hints_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    InputArea::new(input)
        .waiting(waiting)
        .placeholder("Ask about your documents...")
        .render(input_area, buf);

    let mut x = hints_area.x + 1;
    for (key, desc) in hints {
        if x + (key.len() + desc.len() + 4) as u16 > hints_area.x + hints_area.width {
            break;
        }

        buf.set_string(x, hints_area.y, key, Style::default().fg(Color::Yellow));
        x += key.len() as u16;
        buf.set_string(x, hints_area.y, " ", Style::default());
        x += 1;
        buf.set_string(x, hints_area.y, desc, Style::default().fg(Color::DarkGray));
        x += desc.len() as u16;
        buf.set_string(x, hints_area.y, " │ ", Style::default().fg(Color::DarkGray));
        x += 3;
    }
}
