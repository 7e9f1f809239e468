//! Conversational advisor: topic rules and the intent matcher.
//!
//! The advisor maps free-text user input to one of a fixed set of topic
//! categories and returns that topic's canned reply together with
//! follow-up suggestions. Matching is a linear scan over a
//! priority-ordered rule list; the first rule whose keyword set hits
//! wins, and a designated fallback rule catches everything else.

pub mod catalog;
pub mod matcher;
pub mod model;

pub use catalog::{fallback_rule, greeting, quick_actions, topic_rules};
pub use matcher::advise;
pub use model::{Advice, Topic, TopicRule};
