//! Builtin workout plan catalog.
//!
//! Plans are system-defined, loaded once on first access, and cached
//! for the lifetime of the application. There is no update API.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::Rng;

use super::plan::{Difficulty, Exercise, WorkoutPlan};

/// Static storage for the plan catalog (initialized once).
static WORKOUT_PLANS: OnceLock<Vec<WorkoutPlan>> = OnceLock::new();

/// Lazily built id -> index map for O(1) amortized lookup.
static PLAN_INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

/// Returns all prebuilt workout plans.
pub fn workout_plans() -> &'static [WorkoutPlan] {
    WORKOUT_PLANS.get_or_init(|| {
        vec![
            WorkoutPlan {
                id: "upper-body-strength".to_string(),
                name: "Upper Body Strength".to_string(),
                description: "Build strength in your chest, shoulders, and arms".to_string(),
                duration_minutes: 45,
                difficulty: Difficulty::Intermediate,
                exercises: vec![
                    Exercise::reps(
                        "Push-ups",
                        3,
                        "12-15",
                        60,
                        "Keep your body straight and lower until chest nearly touches ground",
                    ),
                    Exercise::reps(
                        "Dumbbell Rows",
                        3,
                        "10-12",
                        60,
                        "Pull weight to your ribcage, squeeze shoulder blades together",
                    ),
                    Exercise::reps(
                        "Shoulder Press",
                        3,
                        "8-10",
                        90,
                        "Press weights overhead, keep core engaged",
                    ),
                    Exercise::reps(
                        "Tricep Dips",
                        3,
                        "10-12",
                        60,
                        "Lower body using arms, keep elbows close to body",
                    ),
                ],
                target_muscles: vec![
                    "Chest".to_string(),
                    "Shoulders".to_string(),
                    "Arms".to_string(),
                    "Back".to_string(),
                ],
            },
            WorkoutPlan {
                id: "hiit-cardio-blast".to_string(),
                name: "HIIT Cardio Blast".to_string(),
                description: "High-intensity intervals for maximum calorie burn".to_string(),
                duration_minutes: 30,
                difficulty: Difficulty::Advanced,
                exercises: vec![
                    Exercise::timed("Burpees", 4, 30, 30, "Full body movement: squat, plank, jump"),
                    Exercise::timed(
                        "Mountain Climbers",
                        4,
                        30,
                        30,
                        "Alternate bringing knees to chest in plank position",
                    ),
                    Exercise::timed(
                        "Jump Squats",
                        4,
                        30,
                        30,
                        "Squat down and explode up into a jump",
                    ),
                    Exercise::timed(
                        "High Knees",
                        4,
                        30,
                        30,
                        "Run in place bringing knees up to waist level",
                    ),
                ],
                target_muscles: vec!["Full Body".to_string(), "Cardio".to_string()],
            },
        ]
    })
}

/// Looks up a plan by id.
pub fn plan_by_id(id: &str) -> Option<&'static WorkoutPlan> {
    let index = PLAN_INDEX.get_or_init(|| {
        workout_plans()
            .iter()
            .enumerate()
            .map(|(i, plan)| (plan.id.as_str(), i))
            .collect()
    });
    index.get(id).map(|&i| &workout_plans()[i])
}

/// Picks one plan uniformly at random from the catalog.
pub fn random_plan<R: Rng + ?Sized>(rng: &mut R) -> &'static WorkoutPlan {
    let plans = workout_plans();
    &plans[rng.gen_range(0..plans.len())]
}
