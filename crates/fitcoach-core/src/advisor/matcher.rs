//! First-match-wins rule evaluation.

use super::catalog;
use super::model::Advice;

/// Maps free-text user input to the advice of the first matching topic
/// rule, falling back to the general rule when nothing matches.
///
/// The input is lowercased once and every rule tests its keywords as
/// plain substrings, so matching is case-insensitive. Exactly one rule
/// fires per call; overlapping keyword sets are resolved by catalog
/// order, never by ranking or combination. Pure function of the input
/// and the static catalog.
///
/// Callers are responsible for rejecting empty or whitespace-only input
/// before invoking the matcher; an empty string simply resolves to the
/// fallback rule here.
pub fn advise(raw_text: &str) -> Advice {
    let normalized = raw_text.to_lowercase();
    for rule in catalog::topic_rules() {
        if rule.matches(&normalized) {
            return Advice::from_rule(rule);
        }
    }
    Advice::from_rule(catalog::fallback_rule())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::model::Topic;

    #[test]
    fn test_breakfast_question_resolves_to_meals() {
        let advice = advise("What should I eat for breakfast?");
        assert_eq!(advice.topic, Topic::Meals);
        assert!(advice.text.starts_with("Great question about breakfast!"));
        assert_eq!(advice.suggestions.len(), 3);
        assert_eq!(advice.suggestions[0], "How many calories for breakfast?");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let advice = advise("BREAKFAST IDEAS PLEASE");
        assert_eq!(advice.topic, Topic::Meals);
    }

    #[test]
    fn test_earlier_rule_shadows_later_on_overlap() {
        // Contains keywords for meals, workouts, and calories; the
        // meals rule is checked first and must win.
        let advice = advise("how many calories in a pre-workout breakfast?");
        assert_eq!(advice.topic, Topic::Meals);

        // Without the meals keyword, workouts outranks calories.
        let advice = advise("how many calories does this workout burn?");
        assert_eq!(advice.topic, Topic::Workouts);

        // Calories outranks weight loss.
        let advice = advise("calorie deficit to lose weight");
        assert_eq!(advice.topic, Topic::Calories);
    }

    #[test]
    fn test_full_precedence_table() {
        assert_eq!(advise("meal").topic, Topic::Meals);
        assert_eq!(advise("exercise").topic, Topic::Workouts);
        assert_eq!(advise("calorie").topic, Topic::Calories);
        assert_eq!(advise("lose weight").topic, Topic::WeightLoss);
        assert_eq!(advise("hello there").topic, Topic::General);
    }

    #[test]
    fn test_gibberish_hits_fallback_with_four_suggestions() {
        let advice = advise("asdkjasdk");
        assert_eq!(advice.topic, Topic::General);
        assert_eq!(advice.suggestions.len(), 4);
    }

    #[test]
    fn test_deterministic() {
        let a = advise("best exercises for weight loss");
        let b = advise("best exercises for weight loss");
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyword_inside_word_still_matches() {
        // Keywords are substrings, not whole words.
        assert_eq!(advise("mealtime routine").topic, Topic::Meals);
    }
}
