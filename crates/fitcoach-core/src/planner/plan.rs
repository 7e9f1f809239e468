//! Workout plan domain models.

use serde::{Deserialize, Serialize};

/// Difficulty rating of a plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One exercise within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name.
    pub name: String,
    /// Number of sets.
    pub sets: u32,
    /// Rep prescription; free text because interval work is written as
    /// a duration ("30 seconds") rather than a count.
    pub reps: String,
    /// Work interval in seconds, for timed exercises.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Rest between sets, in seconds.
    pub rest_seconds: u32,
    /// Coaching cue shown with the exercise.
    pub instruction: String,
}

impl Exercise {
    /// Creates a rep-based exercise.
    pub fn reps(
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        rest_seconds: u32,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: reps.into(),
            duration_seconds: None,
            rest_seconds,
            instruction: instruction.into(),
        }
    }

    /// Creates a timed-interval exercise.
    pub fn timed(
        name: impl Into<String>,
        sets: u32,
        duration_seconds: u32,
        rest_seconds: u32,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: format!("{} seconds", duration_seconds),
            duration_seconds: Some(duration_seconds),
            rest_seconds,
            instruction: instruction.into(),
        }
    }
}

/// A prebuilt workout plan drawn from the catalog.
///
/// Plans are handed out by clone and never modified by the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Unique plan identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Total session length in minutes.
    pub duration_minutes: u32,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Exercises in execution order.
    pub exercises: Vec<Exercise>,
    /// Muscle groups the plan targets.
    pub target_muscles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_exercise_formats_reps() {
        let ex = Exercise::timed("Burpees", 4, 30, 30, "Full body movement");
        assert_eq!(ex.reps, "30 seconds");
        assert_eq!(ex.duration_seconds, Some(30));
    }

    #[test]
    fn test_rep_exercise_has_no_duration() {
        let ex = Exercise::reps("Push-ups", 3, "12-15", 60, "Keep your body straight");
        assert_eq!(ex.duration_seconds, None);
        assert_eq!(ex.sets, 3);
    }
}
