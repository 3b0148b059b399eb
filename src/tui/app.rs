// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Chat application state machine
//!
//! The main state container for the chat TUI: transcript, input, view
//! toggles, and in-flight request tracking. All transitions happen here;
//! rendering only reads this state.

use std::time::Duration;

use crate::api::ChatClient;
use crate::error::Result;
use crate::markdown::MarkdownRenderer;

use super::events::{send_event, ChatEvent, EventReceiver, EventSender};
use super::state::{InputState, Message, ScrollState, Source};

/// Result of a tick (event loop iteration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue running
    Continue,
    /// User wants to quit
    Quit,
}

/// Main application state for the chat TUI
pub struct ChatApp {
    // === Content ===
    pub messages: Vec<Message>,
    /// Sources shown in the panel: always those of the latest AI message
    pub current_sources: Vec<Source>,
    pub input: InputState,
    pub scroll: ScrollState,

    // === View toggles ===
    pub minimized: bool,
    pub fullscreen: bool,
    pub sources_open: bool,

    // === Status ===
    /// Number of requests awaiting a reply; the typing indicator shows
    /// whenever this is non-zero
    pub pending_requests: usize,
    pub should_quit: bool,
    /// Incremented every tick, drives the typing indicator animation
    pub tick_count: u64,

    // === Configuration ===
    pub title: String,

    // === Resources ===
    client: ChatClient,
    renderer: Box<dyn MarkdownRenderer>,
    event_tx: EventSender,
    event_rx: EventReceiver,
}

impl ChatApp {
    /// Create a new chat application
    pub fn new(
        client: ChatClient,
        renderer: Box<dyn MarkdownRenderer>,
        title: String,
        event_tx: EventSender,
        event_rx: EventReceiver,
    ) -> Self {
        Self {
            messages: Vec::new(),
            current_sources: Vec::new(),
            input: InputState::new(),
            scroll: ScrollState::new(),

            minimized: false,
            fullscreen: false,
            sources_open: false,

            pending_requests: 0,
            should_quit: false,
            tick_count: 0,

            title,

            client,
            renderer,
            event_tx,
            event_rx,
        }
    }

    /// Get the event sender for passing to async tasks
    pub fn event_sender(&self) -> EventSender {
        self.event_tx.clone()
    }

    /// Endpoint the client posts to, for the title bar
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Whether the typing indicator should be visible
    pub fn typing_indicator_visible(&self) -> bool {
        self.pending_requests > 0
    }

    /// Process one tick of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        self.tick_count = self.tick_count.wrapping_add(1);

        // Handle events with timeout for smooth UI updates
        tokio::select! {
            Some(event) = self.event_rx.recv() => {
                self.handle_event(event);
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                // Tick for animations/updates
            }
        }

        // Check keyboard input (non-blocking)
        if crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                self.handle_key(key);
            }
        }

        Ok(TickResult::Continue)
    }

    /// Handle a chat event
    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Reply(reply) => {
                // Indicator state settles before the transcript grows
                self.pending_requests = self.pending_requests.saturating_sub(1);
                let sources: Vec<Source> = reply
                    .sources
                    .into_iter()
                    .map(|s| s.into_source())
                    .collect();
                let message = Message::ai(
                    reply.message,
                    sources.clone(),
                    crate::api::clamp_score(reply.relevance_score),
                    self.renderer.as_ref(),
                );
                self.current_sources = sources;
                self.messages.push(message);
                self.scroll.invalidate_cache();
            }

            ChatEvent::Failed(error) => {
                self.pending_requests = self.pending_requests.saturating_sub(1);
                tracing::warn!("chat request failed: {error}");
                let message = Message::fallback(self.renderer.as_ref());
                self.current_sources.clear();
                self.messages.push(message);
                self.scroll.invalidate_cache();
            }

            ChatEvent::Refresh => {
                // Just triggers a redraw
            }
        }
    }

    /// Submit the current input buffer as a chat message.
    /// Whitespace-only input is a no-op: nothing is sent and the buffer
    /// is left untouched.
    pub fn submit_input(&mut self) {
        if self.input.text().trim().is_empty() {
            return;
        }

        let text = self.input.submit();
        self.send_message(text);
    }

    /// Append a user message and dispatch it to the backend
    pub fn send_message(&mut self, text: String) {
        self.messages.push(Message::user(text.clone()));
        self.scroll.invalidate_cache();
        self.scroll.auto_scroll = true;
        self.pending_requests += 1;

        let client = self.client.clone();
        let tx = self.event_sender();
        tokio::spawn(async move {
            match client.send(&text).await {
                Ok(reply) => send_event(&tx, ChatEvent::Reply(reply)),
                Err(e) => send_event(&tx, ChatEvent::Failed(e.to_string())),
            }
        });
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

        if key.kind == KeyEventKind::Release {
            return;
        }

        // Global keys that work in any view state
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
                return;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
                self.toggle_minimized();
                return;
            }
            _ => {}
        }

        // Everything below needs the widget body visible
        if self.minimized {
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                self.toggle_fullscreen();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
                self.toggle_sources();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.input.delete_word();
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.sources_open = false;
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.submit_input();
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.input.history_prev();
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.input.history_next();
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.scroll.page_up();
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                let total = self.scroll.last_total_height();
                self.scroll.page_down(total);
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
            }
            (KeyModifiers::NONE, KeyCode::Home) => {
                self.input.move_home();
            }
            (KeyModifiers::NONE, KeyCode::End) => {
                self.input.move_end();
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
            }
            _ => {}
        }
    }

    /// Collapse to the title bar, or restore. Restoring keeps the previous
    /// fullscreen and sources state.
    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn toggle_sources(&mut self) {
        self.sources_open = !self.sources_open;
    }
}
