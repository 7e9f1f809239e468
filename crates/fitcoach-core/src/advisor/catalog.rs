//! Builtin advisor catalog: topic rules, greeting, and quick actions.
//!
//! The catalog is system-defined and cannot be modified at runtime. It
//! is loaded once on first access and cached for the lifetime of the
//! application.

use std::sync::OnceLock;

use super::model::{Advice, Topic, TopicRule};

/// Static storage for the priority-ordered topic rules (initialized once).
static TOPIC_RULES: OnceLock<Vec<TopicRule>> = OnceLock::new();

/// The always-matching rule returned when no keyword set hits.
static FALLBACK_RULE: TopicRule = TopicRule::new(
    Topic::General,
    &[],
    "I'm here to help with all your fitness and nutrition questions! 🌟 Whether you need workout advice, meal planning, nutrition guidance, or motivation - just ask! I can provide personalized recommendations based on your goals and preferences.",
    &[
        "Help me plan meals",
        "Design a workout routine",
        "Nutrition advice",
        "Motivation tips",
    ],
);

/// Returns the keyword rules in evaluation order.
///
/// The order is a behavioral contract, not an implementation detail:
/// earlier topics shadow later ones when keyword sets overlap, so a
/// message mentioning both "breakfast" and "calories" resolves to the
/// meals rule. The fallback rule is not part of this slice; see
/// [`fallback_rule`].
pub fn topic_rules() -> &'static [TopicRule] {
    TOPIC_RULES.get_or_init(|| {
        vec![
            TopicRule::new(
                Topic::Meals,
                &["breakfast", "meal"],
                "Great question about breakfast! 🍳 A balanced breakfast should include protein, healthy fats, and complex carbs. Here are some options:\n\n• Greek yogurt with berries and nuts\n• Oatmeal with banana and almond butter\n• Eggs with avocado toast\n• Smoothie with spinach, banana, and protein powder\n\nThese options will keep you energized and satisfied throughout the morning!",
                &[
                    "How many calories for breakfast?",
                    "Quick breakfast ideas",
                    "Pre-workout breakfast options",
                ],
            ),
            TopicRule::new(
                Topic::Workouts,
                &["workout", "exercise"],
                "I'd love to help you with your workout! 💪 To give you the best recommendations, could you tell me:\n\n• Your fitness goal (weight loss, muscle gain, endurance)\n• Your current fitness level\n• How much time you have available\n• Any equipment you have access to\n\nBased on this, I can create a personalized workout plan that fits your needs perfectly!",
                &[
                    "I want to lose weight",
                    "Build muscle workout",
                    "30-minute home workout",
                    "Beginner workout plan",
                ],
            ),
            TopicRule::new(
                Topic::Calories,
                &["calories", "calorie"],
                "Calorie needs are very individual! 📊 They depend on factors like:\n\n• Age, gender, height, and weight\n• Activity level\n• Fitness goals\n• Metabolic rate\n\nAs a general guide:\n• Weight loss: 500 calories below maintenance\n• Maintenance: Match your daily energy expenditure\n• Muscle gain: 200-500 calories above maintenance\n\nWould you like me to help calculate your specific needs?",
                &[
                    "Calculate my daily calories",
                    "Weight loss calorie deficit",
                    "Calories for muscle gain",
                ],
            ),
            TopicRule::new(
                Topic::WeightLoss,
                &["weight loss", "lose weight"],
                "Weight loss success comes from combining the right nutrition and exercise! 🎯 Here's my proven approach:\n\n**Nutrition (70% of success):**\n• Create a modest calorie deficit\n• Focus on whole foods\n• Increase protein intake\n• Stay hydrated\n\n**Exercise (30% of success):**\n• Combine cardio and strength training\n• Aim for 150+ minutes moderate activity weekly\n• Include 2-3 strength sessions\n\nConsistency beats perfection every time!",
                &[
                    "Create a meal plan",
                    "Best cardio for weight loss",
                    "How much protein do I need?",
                ],
            ),
        ]
    })
}

/// Returns the fallback rule.
pub fn fallback_rule() -> &'static TopicRule {
    &FALLBACK_RULE
}

/// Returns the greeting the assistant opens every session with,
/// including the starter suggestions.
pub fn greeting() -> Advice {
    Advice {
        topic: Topic::General,
        text: "Hi! I'm your AI fitness and nutrition assistant! 🏋️‍♀️ I'm here to help you with personalized workout advice, nutrition guidance, meal planning, and answer any health-related questions you might have. What would you like to know?".to_string(),
        suggestions: vec![
            "What should I eat for breakfast?".to_string(),
            "Create a workout plan for me".to_string(),
            "How many calories should I eat?".to_string(),
            "Best exercises for weight loss".to_string(),
        ],
    }
}

/// Quick-action chip labels the surface can offer as one-tap inputs.
pub fn quick_actions() -> &'static [&'static str] {
    &[
        "Nutrition advice",
        "Workout help",
        "Goal setting",
        "Health tips",
    ]
}
