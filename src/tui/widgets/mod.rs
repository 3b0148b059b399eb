// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Widgets for the chat TUI

pub mod input_area;
pub mod message;
pub mod sources_panel;
pub mod title_bar;

pub use input_area::{render_input_with_hints, InputArea};
pub use message::{render_messages, render_welcome, MessageWidget, TYPING_INDICATOR_HEIGHT};
pub use sources_panel::SourcesPanel;
pub use title_bar::TitleBar;
