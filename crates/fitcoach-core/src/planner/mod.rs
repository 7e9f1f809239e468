//! Workout planner: user profile, plan catalog, and the wizard state
//! machine that gates profile collection before a plan is generated.

pub mod catalog;
pub mod plan;
pub mod profile;
pub mod wizard;

pub use catalog::{plan_by_id, random_plan, workout_plans};
pub use plan::{Difficulty, Exercise, WorkoutPlan};
pub use profile::{
    FitnessGoal, FitnessLevel, Gender, ProfileDelta, TimeBudget, UserProfile, WorkoutType,
};
pub use wizard::{PlanWizard, Transition, WizardStep};
