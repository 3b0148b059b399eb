// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Message rendering widgets
//!
//! Renders single transcript messages plus the scrolled message area,
//! including the typing indicator row while requests are in flight.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::tui::state::{Message, ScrollState, Sender};

/// Widget for rendering a single message
pub struct MessageWidget<'a> {
    message: &'a Message,
    skip_rows: u16,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            message,
            skip_rows: 0,
        }
    }

    /// Skip the first `rows` of the message, so the visible tail of a
    /// message clipped at the top of the viewport still renders.
    pub fn skip_rows(mut self, rows: u16) -> Self {
        self.skip_rows = rows;
        self
    }

    fn header(&self) -> Line<'static> {
        let (label_style, _) = sender_styles(self.message.sender);

        let mut spans = vec![
            Span::styled(format!("  {}", self.message.sender.label()), label_style),
            Span::styled(
                format!(" · {}", self.message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if self.message.has_sources() {
            let count = self.message.sources.len();
            let noun = if count == 1 { "source" } else { "sources" };
            spans.push(Span::styled(
                format!(" · {count} {noun} (^S)"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }
}

impl<'a> Widget for MessageWidget<'a> {
    // Row layout: header, wrapped content lines, one blank spacing row.
    // `skip_rows` drops leading rows; whatever fits in `area` is drawn.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bottom = area.y + area.height;
        let mut y = area.y;

        if self.skip_rows == 0 {
            buf.set_line(area.x, y, &self.header(), area.width);
            y += 1;
        }

        let (_, content_style) = sender_styles(self.message.sender);
        let lines = self.message.wrapped_display(area.width);
        let content_skip = (self.skip_rows as usize).saturating_sub(1);

        for line in lines.iter().skip(content_skip) {
            if y >= bottom {
                return;
            }
            let styled: Vec<Span<'static>> = line
                .spans
                .iter()
                .map(|span| Span::styled(span.content.clone(), content_style.patch(span.style)))
                .collect();
            buf.set_line(
                area.x + 2,
                y,
                &Line::from(styled),
                area.width.saturating_sub(4),
            );
            y += 1;
        }
    }
}

fn sender_styles(sender: Sender) -> (Style, Style) {
    match sender {
        Sender::User => (
            Style::default().fg(Color::Cyan).bold(),
            Style::default().fg(Color::Cyan),
        ),
        Sender::Ai => (
            Style::default().fg(Color::White).bold(),
            Style::default().fg(Color::White),
        ),
    }
}

/// Animation frames for the typing indicator
const TYPING_FRAMES: [&str; 4] = ["·  ", "·· ", "···", "   "];

/// Number of rows the typing indicator occupies when visible
pub const TYPING_INDICATOR_HEIGHT: u16 = 2;

/// The animated "sage is typing" row shown below the newest message
pub fn typing_indicator_line(tick_count: u64) -> Line<'static> {
    let frame = TYPING_FRAMES[(tick_count / 4) as usize % TYPING_FRAMES.len()];
    Line::from(vec![
        Span::styled("  sage is typing ", Style::default().fg(Color::DarkGray)),
        Span::styled(frame.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

/// Render the scrolled message area: every message stacked top to bottom,
/// shifted up by the scroll offset, with the typing indicator appended
/// while requests are pending.
pub fn render_messages(
    messages: &[Message],
    scroll: &mut ScrollState,
    typing: bool,
    tick_count: u64,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    scroll.update_viewport_height(area.height);

    let mut total = scroll.total_height(messages, area.width);
    if typing {
        total += TYPING_INDICATOR_HEIGHT as usize;
    }
    scroll.maybe_auto_scroll(total);

    // Walk messages, skipping those fully above the viewport
    let mut y_virtual: usize = 0;
    let viewport_top = scroll.offset;
    let viewport_bottom = scroll.offset + area.height as usize;

    for message in messages {
        let height = message.height(area.width) as usize;
        let top = y_virtual;
        y_virtual += height;

        if y_virtual <= viewport_top {
            continue;
        }
        if top >= viewport_bottom {
            break;
        }

        // Partially visible messages are clipped at the viewport edges;
        // one clipped at the top renders its tail from the skipped row on
        let visible_top = top.max(viewport_top);
        let screen_y = area.y + (visible_top - viewport_top) as u16;
        let visible_height = (y_virtual.min(viewport_bottom) - visible_top) as u16;

        let message_area = Rect {
            x: area.x,
            y: screen_y,
            width: area.width,
            height: visible_height,
        };
        MessageWidget::new(message)
            .skip_rows((visible_top - top) as u16)
            .render(message_area, buf);
    }

    if typing && y_virtual < viewport_bottom && y_virtual >= viewport_top {
        let screen_y = area.y + (y_virtual - viewport_top) as u16;
        if screen_y < area.y + area.height {
            buf.set_line(area.x, screen_y, &typing_indicator_line(tick_count), area.width);
        }
    }
}

/// Greeting shown before the first message
pub fn render_welcome(title: &str, area: Rect, buf: &mut Buffer) {
    if area.height < 3 {
        return;
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  Ask a question about your documents to get started.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::PlainRenderer;
    use crate::tui::state::Source;
    use ratatui::backend::TestBackend;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell(Position::new(x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_message_widget_renders_sender_and_content() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let message = Message::user("hello there");

        terminal
            .draw(|f| {
                f.render_widget(MessageWidget::new(&message), f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("you"));
        assert!(text.contains("hello there"));
    }

    #[test]
    fn test_message_widget_sources_hint() {
        let sources = vec![Source {
            name: "guide.pdf".to_string(),
            relevance: 90,
            text_snippet: None,
        }];
        let message = Message::ai("answer", sources, 90, &PlainRenderer);

        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(MessageWidget::new(&message), f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("1 source (^S)"));
    }

    #[test]
    fn test_typing_indicator_animates() {
        let first = typing_indicator_line(0);
        let later = typing_indicator_line(4);
        assert_ne!(
            format!("{:?}", first.spans.last()),
            format!("{:?}", later.spans.last())
        );
    }

    #[test]
    fn test_render_messages_shows_typing_indicator() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let messages = vec![Message::user("question")];
        let mut scroll = ScrollState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                render_messages(&messages, &mut scroll, true, 0, area, f.buffer_mut());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("sage is typing"));
    }

    #[test]
    fn test_render_messages_auto_scrolls_to_newest() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let messages: Vec<Message> = (0..10)
            .map(|i| Message::user(format!("message number {i}")))
            .collect();
        let mut scroll = ScrollState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                render_messages(&messages, &mut scroll, false, 0, area, f.buffer_mut());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("message number 9"));
        assert!(!text.contains("message number 0"));
    }

    #[test]
    fn test_tall_message_tail_visible_after_auto_scroll() {
        // A single message taller than the viewport: auto-scroll must land
        // on its final content line, not a blank screen
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let content: String = (0..30)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let messages = vec![Message::user(content)];
        let mut scroll = ScrollState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                render_messages(&messages, &mut scroll, false, 0, area, f.buffer_mut());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("line 29"));
        assert!(!text.contains("line 10"));
    }

    #[test]
    fn test_clipped_message_renders_visible_rows() {
        // Scrolled into the middle of an over-tall message: the rows under
        // the viewport are drawn, the header above it is not
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let content: String = (0..30)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let messages = vec![Message::user(content)];
        let mut scroll = ScrollState::new();
        scroll.auto_scroll = false;
        scroll.offset = 5;

        terminal
            .draw(|f| {
                let area = f.area();
                render_messages(&messages, &mut scroll, false, 0, area, f.buffer_mut());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("line 4"));
        assert!(text.contains("line 7"));
        assert!(!text.contains("line 8"));
        assert!(!text.contains("you"));
    }

    #[test]
    fn test_render_messages_empty_area() {
        let messages = vec![Message::user("hi")];
        let mut scroll = ScrollState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));

        // Zero-sized area is a no-op
        render_messages(
            &messages,
            &mut scroll,
            false,
            0,
            Rect::default(),
            &mut buf,
        );
    }

    #[test]
    fn test_render_welcome() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                render_welcome("sage", f.area(), f.buffer_mut());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("sage"));
        assert!(text.contains("Ask a question"));
    }
}
