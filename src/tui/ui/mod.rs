// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Rendering for the chat TUI
//!
//! One entry point, [`draw`], projects the application state onto the
//! frame. All geometry comes from [`layout::calculate_layout`]; nothing
//! here mutates state except the scroll position, which tracks the
//! viewport the draw pass established.

pub mod layout;

use ratatui::prelude::*;

use super::app::ChatApp;
use super::widgets::{
    render_input_with_hints, render_messages, render_welcome, SourcesPanel, TitleBar,
};
use layout::calculate_layout;

/// Key hints shown under the input area
const HINTS: &[(&str, &str)] = &[
    ("Enter", "Send"),
    ("^S", "Sources"),
    ("^F", "Fullscreen"),
    ("^T", "Minimize"),
    ("^C", "Quit"),
];

/// Draw the whole widget for one frame
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let layout = calculate_layout(
        frame.area(),
        app.minimized,
        app.fullscreen,
        app.sources_open,
    );

    let title_bar = TitleBar::new(&app.title, app.endpoint())
        .minimized(app.minimized)
        .fullscreen(app.fullscreen)
        .typing(app.typing_indicator_visible());
    frame.render_widget(title_bar, layout.title_bar);

    if app.minimized {
        return;
    }

    let typing = app.typing_indicator_visible();
    if app.messages.is_empty() && !typing {
        render_welcome(&app.title, layout.messages, frame.buffer_mut());
    } else {
        render_messages(
            &app.messages,
            &mut app.scroll,
            typing,
            app.tick_count,
            layout.messages,
            frame.buffer_mut(),
        );
    }

    if let Some(sources_area) = layout.sources {
        frame.render_widget(SourcesPanel::new(&app.current_sources), sources_area);
    }

    if let Some(input_area) = layout.input {
        render_input_with_hints(&app.input, input_area, frame.buffer_mut(), typing, HINTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatClient;
    use crate::markdown::PlainRenderer;
    use crate::tui::events::create_event_channel;
    use crate::tui::state::Source;
    use ratatui::backend::TestBackend;

    fn test_app() -> ChatApp {
        let (tx, rx) = create_event_channel();
        let client = ChatClient::new("http://localhost:5000/chat");
        ChatApp::new(client, Box::new(PlainRenderer), "sage".to_string(), tx, rx)
    }

    fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell(Position::new(x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &mut ChatApp) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_welcome_when_empty() {
        let mut app = test_app();
        let text = render(&mut app);
        assert!(text.contains("Ask a question"));
    }

    #[test]
    fn test_draw_transcript() {
        let mut app = test_app();
        app.messages.push(crate::tui::state::Message::user("hello"));

        let text = render(&mut app);
        assert!(text.contains("hello"));
        assert!(!text.contains("Ask a question"));
    }

    #[test]
    fn test_draw_minimized_title_only() {
        let mut app = test_app();
        app.messages.push(crate::tui::state::Message::user("hidden"));
        app.minimized = true;

        let text = render(&mut app);
        assert!(text.contains("sage"));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_draw_sources_panel() {
        let mut app = test_app();
        app.sources_open = true;
        app.current_sources = vec![Source {
            name: "guide.pdf".to_string(),
            relevance: 91,
            text_snippet: None,
        }];

        let text = render(&mut app);
        assert!(text.contains("Sources"));
        assert!(text.contains("guide.pdf"));
        assert!(text.contains("91%"));
    }

    #[test]
    fn test_draw_typing_indicator() {
        let mut app = test_app();
        app.messages.push(crate::tui::state::Message::user("q"));
        app.pending_requests = 1;

        let text = render(&mut app);
        assert!(text.contains("sage is typing"));
    }

    #[test]
    fn test_draw_fullscreen() {
        let mut app = test_app();
        app.fullscreen = true;

        // Just a smoke test that the full-terminal layout renders
        render(&mut app);
    }
}
