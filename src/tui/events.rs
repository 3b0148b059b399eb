// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Event system for the chat TUI
//!
//! Events let in-flight backend requests communicate with the UI without
//! blocking it. Uses tokio mpsc channels for thread-safe messaging.

use tokio::sync::mpsc;

use crate::api::ChatReply;

/// Events delivered from request tasks to the UI loop
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A backend reply arrived
    Reply(ChatReply),
    /// A request failed (network error, bad status, malformed body)
    Failed(String),
    /// Request to refresh the UI
    Refresh,
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<ChatEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if the receiver is dropped
pub fn send_event(tx: &EventSender, event: ChatEvent) {
    let _ = tx.send(event);
}
