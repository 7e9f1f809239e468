//! Advisor domain models.

use serde::{Deserialize, Serialize};

/// Topic categories the advisor can answer about.
///
/// The order of the variants mirrors the priority order in which the
/// rule catalog is evaluated: an input containing keywords from several
/// topics resolves to the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Meal and breakfast advice.
    Meals,
    /// Workout and exercise advice.
    Workouts,
    /// Calorie budgeting advice.
    Calories,
    /// Weight-loss strategy advice.
    WeightLoss,
    /// Catch-all topic used when no keyword matches.
    General,
}

/// A single keyword-to-reply rule in the advisor catalog.
///
/// Rules are defined once at startup and never modified. `keywords` is
/// empty only for the fallback rule, which matches every input.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRule {
    /// The topic this rule answers for.
    pub topic: Topic,
    /// Case-insensitive substrings that trigger the rule.
    pub keywords: &'static [&'static str],
    /// The canned reply text.
    pub response: &'static str,
    /// Follow-up suggestions shown with the reply, in display order.
    pub suggestions: &'static [&'static str],
}

impl TopicRule {
    /// Creates a new topic rule.
    pub const fn new(
        topic: Topic,
        keywords: &'static [&'static str],
        response: &'static str,
        suggestions: &'static [&'static str],
    ) -> Self {
        Self {
            topic,
            keywords,
            response,
            suggestions,
        }
    }

    /// Returns true when any keyword occurs in the given text. A rule
    /// with no keywords (the fallback) matches every input.
    ///
    /// The caller is expected to pass already-lowercased text; keywords
    /// are stored lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// The advisor's answer for one user input: reply text plus follow-up
/// suggestions, detached from the static catalog so callers can move it
/// into a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// The topic that produced this advice.
    pub topic: Topic,
    /// The reply text.
    pub text: String,
    /// Suggested follow-up inputs, in display order.
    pub suggestions: Vec<String>,
}

impl Advice {
    /// Builds owned advice from a catalog rule.
    pub fn from_rule(rule: &TopicRule) -> Self {
        Self {
            topic: rule.topic,
            text: rule.response.to_string(),
            suggestions: rule.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matches_on_any_keyword() {
        let rule = TopicRule::new(Topic::Meals, &["breakfast", "meal"], "hi", &[]);
        assert!(rule.matches("a hearty breakfast"));
        assert!(rule.matches("my meal plan"));
        assert!(!rule.matches("leg day"));
    }

    #[test]
    fn test_advice_from_rule_copies_suggestions_in_order() {
        let rule = TopicRule::new(Topic::Calories, &["calorie"], "text", &["first", "second"]);
        let advice = Advice::from_rule(&rule);
        assert_eq!(advice.topic, Topic::Calories);
        assert_eq!(advice.suggestions, vec!["first", "second"]);
    }
}
