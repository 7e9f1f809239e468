//! Chat session: message history and composing state.

pub mod message;
pub mod model;

pub use message::{ChatMessage, MessageRole};
pub use model::ChatSession;
