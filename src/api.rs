// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! HTTP client for the chat endpoint
//!
//! One outbound call: `POST {endpoint}` with `{"message": text}`. The
//! response carries the reply text, an optional list of source citations,
//! and an optional overall relevance score. Sources may arrive either as
//! objects or as bare name strings; both forms are accepted.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SageError};
use crate::tui::state::Source;

/// Request body for the chat endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Response body from the chat endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Reply text (markdown)
    pub message: String,
    /// Source citations, newest reply only
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// Overall relevance of the reply, 0-100
    #[serde(default)]
    pub relevance_score: f64,
}

impl ChatReply {
    /// Overall relevance clamped to the 0-100 integer scale.
    pub fn relevance(&self) -> u8 {
        clamp_score(self.relevance_score)
    }
}

/// A source citation on the wire: either a full object or a bare name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    Detailed {
        name: String,
        #[serde(default)]
        relevance: f64,
        #[serde(default)]
        text_snippet: Option<String>,
    },
    Bare(String),
}

impl SourceRef {
    /// Convert the wire form into the display model.
    pub fn into_source(self) -> Source {
        match self {
            SourceRef::Detailed {
                name,
                relevance,
                text_snippet,
            } => Source {
                name,
                relevance: clamp_score(relevance),
                text_snippet,
            },
            SourceRef::Bare(name) => Source {
                name,
                relevance: 0,
                text_snippet: None,
            },
        }
    }
}

/// Clamp a raw wire score to the 0-100 integer scale.
pub fn clamp_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Client for the chat endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one user message and decode the reply.
    ///
    /// Network errors, non-success statuses, and malformed bodies all
    /// surface as errors; callers collapse them into a single fallback
    /// message for display.
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SageError::Backend(status.as_u16()));
        }

        let reply = response.json::<ChatReply>().await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_full_body() {
        let reply: ChatReply = serde_json::from_str(
            r#"{
                "message": "The answer is 42.",
                "sources": [
                    {"name": "guide.pdf", "relevance": 92, "text_snippet": "…42…"},
                    {"name": "notes.txt", "relevance": 71}
                ],
                "relevance_score": 88
            }"#,
        )
        .unwrap();

        assert_eq!(reply.message, "The answer is 42.");
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.relevance(), 88);
    }

    #[test]
    fn test_reply_minimal_body() {
        let reply: ChatReply = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(reply.message, "hi");
        assert!(reply.sources.is_empty());
        assert_eq!(reply.relevance(), 0);
    }

    #[test]
    fn test_reply_missing_message_is_error() {
        let result = serde_json::from_str::<ChatReply>(r#"{"sources": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_ref_detailed() {
        let source_ref: SourceRef =
            serde_json::from_str(r#"{"name": "guide.pdf", "relevance": 90, "text_snippet": "a"}"#)
                .unwrap();
        let source = source_ref.into_source();
        assert_eq!(source.name, "guide.pdf");
        assert_eq!(source.relevance, 90);
        assert_eq!(source.text_snippet.as_deref(), Some("a"));
    }

    #[test]
    fn test_source_ref_bare_string() {
        let source_ref: SourceRef = serde_json::from_str(r#""guide.pdf""#).unwrap();
        let source = source_ref.into_source();
        assert_eq!(source.name, "guide.pdf");
        assert_eq!(source.relevance, 0);
        assert!(source.text_snippet.is_none());
    }

    #[test]
    fn test_source_ref_missing_optional_fields() {
        let source_ref: SourceRef = serde_json::from_str(r#"{"name": "notes.txt"}"#).unwrap();
        let source = source_ref.into_source();
        assert_eq!(source.relevance, 0);
        assert!(source.text_snippet.is_none());
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(0.0), 0);
        assert_eq!(clamp_score(99.6), 100);
        assert_eq!(clamp_score(250.0), 100);
    }

    #[test]
    fn test_client_endpoint() {
        let client = ChatClient::new("http://localhost:5000/chat");
        assert_eq!(client.endpoint(), "http://localhost:5000/chat");
    }
}
