// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Sage - terminal chat client for a document-Q&A backend
//!
//! Sage renders an append-only chat transcript, posts user input to a
//! backend `/chat` endpoint, and shows the citations ("sources") that
//! justify each AI reply in a side panel, bucketed by relevance.
//!
//! # Modules
//!
//! - [`api`]: HTTP client and wire types for the chat endpoint
//! - [`config`]: Settings loaded from the user config directory
//! - [`markdown`]: Pluggable markdown rendering for AI replies
//! - [`tui`]: The chat widget itself (state, event loop, widgets)

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod tui;
