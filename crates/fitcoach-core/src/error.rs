//! Error types for the FitCoach engine.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the FitCoach crates.
///
/// Every "failure" the engine can report is a caller-side precondition
/// violation; the decision logic itself has no fatal error states. An
/// unmatched chat message resolves through the fallback rule and is
/// never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CoachError {
    /// Blank or whitespace-only input was submitted to the chat.
    #[error("Empty input: the message contains no text")]
    EmptyInput,

    /// A reply or plan is already being composed for this session.
    #[error("Busy: {activity} already in flight")]
    Busy { activity: &'static str },

    /// A wizard step was asked to advance without satisfying its guard.
    /// The state machine itself refuses silently; this variant exists
    /// for boundary helpers that require the advance to succeed.
    #[error("Invalid transition from step '{from}'")]
    InvalidTransition { from: &'static str },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoachError {
    /// Creates a Busy error for the named in-flight activity.
    pub fn busy(activity: &'static str) -> Self {
        Self::Busy { activity }
    }

    /// Creates an InvalidTransition error for the named step.
    pub fn invalid_transition(from: &'static str) -> Self {
        Self::InvalidTransition { from }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an EmptyInput error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Check if this is a Busy error
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Conversion from String (for error messages)
impl From<String> for CoachError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, CoachError>`.
pub type Result<T> = std::result::Result<T, CoachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(CoachError::EmptyInput.is_empty_input());
        assert!(CoachError::busy("composing").is_busy());
        assert!(CoachError::invalid_transition("profile").is_invalid_transition());
        assert!(CoachError::not_found("plan", "nope").is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let err = CoachError::busy("generating");
        assert_eq!(err.to_string(), "Busy: generating already in flight");

        let err = CoachError::not_found("workout plan", "99");
        assert_eq!(err.to_string(), "Entity not found: workout plan '99'");
    }
}
