//! Conversation message types.
//!
//! This module contains types for representing messages in a chat
//! session, including roles and follow-up suggestions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::Advice;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in a conversation history.
///
/// Messages are created once per turn and never mutated afterwards;
/// the owning session only appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format).
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub text: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
    /// Follow-up suggestions, in display order. Empty for user messages.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    /// Creates a user message carrying the submitted text verbatim.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions: Vec::new(),
        }
    }

    /// Creates an assistant message from a piece of advice.
    pub fn assistant(advice: &Advice) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            text: advice.text.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions: advice.suggestions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::advise;

    #[test]
    fn test_user_message_keeps_text_verbatim() {
        let msg = ChatMessage::user("  How many calories for breakfast?  ");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.text, "  How many calories for breakfast?  ");
        assert!(msg.suggestions.is_empty());
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_assistant_message_carries_suggestions() {
        let advice = advise("workout");
        let msg = ChatMessage::assistant(&advice);
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.text, advice.text);
        assert_eq!(msg.suggestions, advice.suggestions);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("one");
        assert_ne!(a.id, b.id);
    }
}
