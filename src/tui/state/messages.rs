// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Message state for the chat widget
//!
//! The transcript is append-only: messages are immutable once created and
//! never removed. AI messages own the sources that justified them; the
//! sources panel only ever holds a view of the latest AI message's sources.

use chrono::{DateTime, Local};
use ratatui::style::Color;
use ratatui::text::{Line, Span, Text};

use crate::markdown::MarkdownRenderer;

/// Fixed reply shown when a request fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Safely truncate a string at a character boundary, appending "..." if truncated.
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "you",
            Sender::Ai => "sage",
        }
    }
}

/// Relevance bucket for a source citation
///
/// Boundaries are inclusive at the lower bound of each tier: 90 is high,
/// 70 is medium, 69 is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    /// Bucket a 0-100 relevance score.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            RelevanceTier::High
        } else if score >= 70 {
            RelevanceTier::Medium
        } else {
            RelevanceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelevanceTier::High => "high",
            RelevanceTier::Medium => "medium",
            RelevanceTier::Low => "low",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RelevanceTier::High => Color::Green,
            RelevanceTier::Medium => Color::Yellow,
            RelevanceTier::Low => Color::Red,
        }
    }
}

/// A source citation attached to an AI message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Document name
    pub name: String,
    /// Relevance score, 0-100
    pub relevance: u8,
    /// Excerpt of the cited passage, when the backend provides one
    pub text_snippet: Option<String>,
}

impl Source {
    pub fn tier(&self) -> RelevanceTier {
        RelevanceTier::from_score(self.relevance)
    }
}

/// A message in the transcript
#[derive(Debug, Clone)]
pub struct Message {
    /// Who sent it
    pub sender: Sender,
    /// Raw content (markdown for AI, plain for user)
    pub content: String,
    /// Wall-clock arrival time
    pub timestamp: DateTime<Local>,
    /// Source citations (AI only)
    pub sources: Vec<Source>,
    /// Overall relevance of the reply, 0-100 (AI only)
    pub relevance_score: u8,
    /// Pre-rendered content for display
    display: Text<'static>,
}

impl Message {
    /// Create a user message. User content is rendered verbatim.
    pub fn user(content: impl Into<String>) -> Self {
        let content = content.into();
        let display = Text::raw(content.clone());
        Self {
            sender: Sender::User,
            content,
            timestamp: Local::now(),
            sources: Vec::new(),
            relevance_score: 0,
            display,
        }
    }

    /// Create an AI message, rendering the content through the injected
    /// markdown renderer once at arrival time.
    pub fn ai(
        content: impl Into<String>,
        sources: Vec<Source>,
        relevance_score: u8,
        renderer: &dyn MarkdownRenderer,
    ) -> Self {
        let content = content.into();
        let display = renderer.render(&content);
        Self {
            sender: Sender::Ai,
            content,
            timestamp: Local::now(),
            sources,
            relevance_score,
            display,
        }
    }

    /// Create the fixed fallback AI message for a failed request.
    pub fn fallback(renderer: &dyn MarkdownRenderer) -> Self {
        Self::ai(FALLBACK_REPLY, Vec::new(), 0, renderer)
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Rendered content lines.
    pub fn display(&self) -> &Text<'static> {
        &self.display
    }

    /// Rendered content wrapped to the given widget width, one element per
    /// terminal row. The renderer draws exactly these lines, so scroll math
    /// and rendering always agree on the height.
    pub fn wrapped_display(&self, width: u16) -> Vec<Line<'static>> {
        let content_width = width.saturating_sub(4).max(1) as usize;
        self.display
            .lines
            .iter()
            .flat_map(|line| wrap_line(line, content_width))
            .collect()
    }

    /// Height in terminal rows at the given width: one header row, the
    /// wrapped content rows, and one spacing row.
    pub fn height(&self, width: u16) -> u16 {
        (1 + self.wrapped_display(width).len() + 1) as u16
    }
}

/// Wrap one styled line at character boundaries, splitting spans as needed.
/// Always yields at least one line.
fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    let mut wrapped = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for span in &line.spans {
        let mut rest = span.content.as_ref();
        loop {
            let chars = rest.chars().count();
            let room = width - used;
            if chars <= room {
                if !rest.is_empty() {
                    current.push(Span::styled(rest.to_string(), span.style));
                    used += chars;
                }
                break;
            }
            let split = rest
                .char_indices()
                .nth(room)
                .map_or(rest.len(), |(offset, _)| offset);
            let (head, tail) = rest.split_at(split);
            if !head.is_empty() {
                current.push(Span::styled(head.to_string(), span.style));
            }
            wrapped.push(Line::from(std::mem::take(&mut current)));
            used = 0;
            rest = tail;
        }
    }

    wrapped.push(Line::from(current));
    wrapped
}
