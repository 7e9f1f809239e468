//! Chat session domain model.
//!
//! A session owns the ordered message history for one conversation and
//! the composing flag the surface observes while a reply is pending.
//! All mutation goes through the methods here; callers never assign
//! fields directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::ChatMessage;
use crate::advisor::{self, Advice};

/// A single conversation between the user and the advisor.
///
/// New sessions open with the assistant greeting (and its starter
/// suggestions) already appended. History is append-only; messages are
/// never edited or removed. The composing flag is bookkeeping for the
/// caller layer, which is responsible for keeping submissions
/// single-flight; the session itself imposes no concurrency guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (UUID format).
    id: String,
    /// Timestamp when the session was created (ISO 8601 format).
    created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format).
    updated_at: String,
    /// Ordered conversation history.
    messages: Vec<ChatMessage>,
    /// True while a reply is being composed.
    composing: bool,
}

impl ChatSession {
    /// Creates a new session seeded with the assistant greeting.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            messages: vec![ChatMessage::assistant(&advisor::greeting())],
            composing: false,
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read-only view of the ordered message history.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the most recent message, if any.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// True while a reply is being composed for this session.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Appends a user message carrying the submitted text verbatim.
    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    /// Appends an assistant message built from the given advice.
    pub fn push_assistant(&mut self, advice: &Advice) -> &ChatMessage {
        self.push(ChatMessage::assistant(advice))
    }

    /// Marks the start or end of a composition.
    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self.messages.push(message);
        // Safe to unwrap because we just pushed an element
        self.messages.last().unwrap()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
