// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Chat TUI module
//!
//! A terminal chat widget for a document-answering backend:
//! - Transcript with markdown-rendered replies
//! - Typing indicator while requests are in flight
//! - Sources panel with relevance scoring
//! - Minimize and fullscreen view toggles

pub mod app;
pub mod events;
pub mod state;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::api::ChatClient;
use crate::error::{Result, SageError};
use crate::markdown::MarkdownRenderer;

pub use app::{ChatApp, TickResult};
pub use events::{ChatEvent, EventSender};

/// Run the chat TUI
///
/// The main entry point: sets up the terminal, runs the event loop until
/// the user quits, and restores the terminal (also on panic).
pub async fn run(
    client: ChatClient,
    renderer: Box<dyn MarkdownRenderer>,
    title: String,
) -> Result<()> {
    // Panic hook to restore the terminal on crash
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| SageError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| SageError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| SageError::Tui(e.to_string()))?;

    let (event_tx, event_rx) = events::create_event_channel();
    let mut app = ChatApp::new(client, renderer, title, event_tx, event_rx);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    let _ = std::panic::take_hook();

    disable_raw_mode().map_err(|e| SageError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| SageError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| SageError::Tui(e.to_string()))?;

    result
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| SageError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}
