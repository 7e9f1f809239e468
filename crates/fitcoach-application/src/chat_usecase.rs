//! Chat use case: turn sequencing for one conversation.

use std::sync::Arc;

use fitcoach_core::error::{CoachError, Result};
use fitcoach_core::session::{ChatMessage, ChatSession};
use tokio::sync::RwLock;

use crate::advisor_service::AdvisorService;

/// Sequences chat turns for a single session.
///
/// On each submission the user message is appended immediately and
/// synchronously, the session enters the composing state, and the
/// advisor is awaited; its reply is then appended as an assistant
/// message and the composing state ends. Exactly one composition may be
/// in flight: this layer owns the caller-side guards, so blank input
/// and concurrent submissions are rejected before the engine is
/// invoked.
pub struct ChatUseCase {
    /// Session state shared with any observers
    session: Arc<RwLock<ChatSession>>,
    /// Reply producer
    advisor: Arc<dyn AdvisorService>,
}

impl ChatUseCase {
    /// Creates a use case around a fresh session.
    pub fn new(advisor: Arc<dyn AdvisorService>) -> Self {
        Self {
            session: Arc::new(RwLock::new(ChatSession::new())),
            advisor,
        }
    }

    /// Submits user text and awaits the assistant's reply.
    ///
    /// The text is carried into the history verbatim; suggestion chips
    /// rely on this for their round-trip contract.
    ///
    /// # Errors
    ///
    /// * `CoachError::EmptyInput` - the text is blank or whitespace-only
    /// * `CoachError::Busy` - a reply is already being composed
    pub async fn submit(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(CoachError::EmptyInput);
        }

        {
            let mut session = self.session.write().await;
            if session.is_composing() {
                return Err(CoachError::busy("composing"));
            }
            session.push_user(text);
            session.set_composing(true);
        }
        tracing::debug!(chars = text.len(), "user message accepted, composing reply");

        // No cancellation: once scheduled, the reply always arrives.
        let advice = self.advisor.advise(text).await;

        let mut session = self.session.write().await;
        session.push_assistant(&advice);
        session.set_composing(false);
        tracing::debug!(topic = %advice.topic, "assistant reply appended");

        Ok(())
    }

    /// Point-in-time snapshot of the session history.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.session.read().await.messages().to_vec()
    }

    /// The most recent message, if any.
    pub async fn last_message(&self) -> Option<ChatMessage> {
        self.session.read().await.last_message().cloned()
    }

    /// True while a reply is being composed.
    pub async fn is_composing(&self) -> bool {
        self.session.read().await.is_composing()
    }

    /// The session identifier.
    pub async fn session_id(&self) -> String {
        self.session.read().await.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor_service::RuleBasedAdvisor;
    use async_trait::async_trait;
    use fitcoach_core::advisor::{self, Advice};
    use fitcoach_core::session::MessageRole;
    use tokio::sync::Notify;

    /// Advisor that blocks until released, for driving the composing
    /// state deterministically.
    struct GatedAdvisor {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl AdvisorService for GatedAdvisor {
        async fn advise(&self, text: &str) -> Advice {
            self.gate.notified().await;
            advisor::advise(text)
        }
    }

    fn instant_chat() -> ChatUseCase {
        ChatUseCase::new(Arc::new(RuleBasedAdvisor::instant()))
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let chat = instant_chat();
        chat.submit("What should I eat for breakfast?").await.unwrap();

        let history = chat.history().await;
        // Greeting, user turn, assistant turn.
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, MessageRole::User);
        assert_eq!(history[1].text, "What should I eat for breakfast?");
        assert_eq!(history[2].role, MessageRole::Assistant);
        assert!(history[2].text.starts_with("Great question about breakfast!"));
        assert_eq!(history[2].suggestions.len(), 3);
        assert!(!chat.is_composing().await);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_before_the_engine() {
        let chat = instant_chat();
        assert_eq!(chat.submit("").await, Err(CoachError::EmptyInput));
        assert_eq!(chat.submit("   \n\t").await, Err(CoachError::EmptyInput));

        // Nothing beyond the greeting was appended.
        assert_eq!(chat.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_single_flight_submission() {
        let gate = Arc::new(Notify::new());
        let chat = Arc::new(ChatUseCase::new(Arc::new(GatedAdvisor {
            gate: gate.clone(),
        })));

        let first = {
            let chat = chat.clone();
            tokio::spawn(async move { chat.submit("workout").await })
        };

        // Wait for the first submission to enter the composing state.
        while !chat.is_composing().await {
            tokio::task::yield_now().await;
        }

        // A second submission while composing is rejected.
        let err = chat.submit("breakfast").await.unwrap_err();
        assert!(err.is_busy());

        // Release the advisor; the first submission completes normally.
        gate.notify_one();
        first.await.unwrap().unwrap();

        let history = chat.history().await;
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].text, "workout");
        assert!(!chat.is_composing().await);
    }

    #[tokio::test]
    async fn test_suggestion_round_trip_through_submit() {
        let chat = instant_chat();
        let suggestion = chat.history().await[0].suggestions[1].clone();
        assert_eq!(suggestion, "Create a workout plan for me");

        chat.submit(&suggestion).await.unwrap();
        let history = chat.history().await;
        assert_eq!(history[1].text, suggestion);
    }

    #[tokio::test]
    async fn test_history_is_a_snapshot() {
        let chat = instant_chat();
        let before = chat.history().await;
        chat.submit("calories").await.unwrap();
        // The earlier snapshot is unaffected by later turns.
        assert_eq!(before.len(), 1);
        assert_eq!(chat.history().await.len(), 3);
    }
}
