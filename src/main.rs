// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Sage - terminal chat client for a document-Q&A backend
//!
//! Entry point for the Sage CLI application.

use clap::Parser;

use sage::api::ChatClient;
use sage::cli::Cli;
use sage::config::Settings;
use sage::error::Result;
use sage::markdown::{CmarkRenderer, MarkdownRenderer, PlainRenderer};
use sage::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing. Default is warn; `-v` turns on sage diagnostics
    // without requiring users to know target names. `RUST_LOG` still takes
    // precedence.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { "trace" } else { "debug" };
        if let Ok(parsed) = format!("sage={level}").parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    // Logs go to stderr so they never tear the TUI
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings, then apply CLI overrides
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if cli.plain {
        settings.markdown = false;
    }

    let client = ChatClient::new(settings.endpoint.clone());
    let renderer: Box<dyn MarkdownRenderer> = if settings.markdown {
        Box::new(CmarkRenderer)
    } else {
        Box::new(PlainRenderer)
    };

    tui::run(client, renderer, settings.title).await
}
