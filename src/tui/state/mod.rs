// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! State types for the chat widget
//!
//! Pure state, no rendering: the widgets project these types onto the
//! terminal, which keeps every transition testable without a backend or a
//! real terminal.

pub mod input;
pub mod messages;
pub mod scroll;

pub use input::InputState;
pub use messages::{truncate_string, Message, RelevanceTier, Sender, Source, FALLBACK_REPLY};
pub use scroll::ScrollState;
