//! User profile collected by the plan wizard.

use serde::{Deserialize, Serialize};

/// Gender as collected in the profile step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Self-reported experience level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FitnessLevel {
    /// New to fitness
    Beginner,
    /// Some experience
    Intermediate,
    /// Very experienced
    Advanced,
}

impl FitnessLevel {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

/// Fitness goals the user can select in the goals step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Strength,
    Flexibility,
    GeneralFitness,
}

impl FitnessGoal {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Strength => "Strength",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::GeneralFitness => "General Fitness",
        }
    }
}

/// Workout styles the user can prefer in the preferences step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Hiit,
    Yoga,
    Pilates,
    Functional,
}

impl WorkoutType {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength Training",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Pilates => "Pilates",
            WorkoutType::Functional => "Functional Training",
        }
    }
}

/// Session length the user can commit to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TimeBudget {
    /// 15-30 minutes
    Short,
    /// 30-45 minutes
    Medium,
    /// 45-60 minutes
    Long,
    /// 60+ minutes
    Extended,
}

impl TimeBudget {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            TimeBudget::Short => "15-30 minutes",
            TimeBudget::Medium => "30-45 minutes",
            TimeBudget::Long => "45-60 minutes",
            TimeBudget::Extended => "60+ minutes",
        }
    }
}

/// The profile the wizard collects step by step.
///
/// Fields start unset and are filled in as the user completes each
/// step. Whether a field may be *read* by a later step is enforced by
/// the wizard's gates, not by this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub weight_kg: Option<f32>,
    pub height_cm: Option<f32>,
    pub gender: Option<Gender>,
    pub fitness_level: Option<FitnessLevel>,
    /// Selected goals, in selection order.
    #[serde(default)]
    pub goals: Vec<FitnessGoal>,
    pub available_time: Option<TimeBudget>,
    /// Preferred workout styles, in selection order.
    #[serde(default)]
    pub preferred_workouts: Vec<WorkoutType>,
}

impl UserProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field collected by the profile step is set.
    pub fn has_basic_info(&self) -> bool {
        self.age.is_some()
            && self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.gender.is_some()
            && self.fitness_level.is_some()
    }

    /// True when at least one goal is selected.
    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    /// True when the preferences step is complete.
    pub fn has_preferences(&self) -> bool {
        self.available_time.is_some() && !self.preferred_workouts.is_empty()
    }

    /// Merges a partial update into the profile. Present fields
    /// overwrite; absent fields are left untouched. Goal and workout
    /// selections are replaced wholesale, matching checkbox semantics.
    pub fn apply(&mut self, delta: ProfileDelta) {
        if let Some(age) = delta.age {
            self.age = Some(age);
        }
        if let Some(weight) = delta.weight_kg {
            self.weight_kg = Some(weight);
        }
        if let Some(height) = delta.height_cm {
            self.height_cm = Some(height);
        }
        if let Some(gender) = delta.gender {
            self.gender = Some(gender);
        }
        if let Some(level) = delta.fitness_level {
            self.fitness_level = Some(level);
        }
        if let Some(goals) = delta.goals {
            self.goals = goals;
        }
        if let Some(time) = delta.available_time {
            self.available_time = Some(time);
        }
        if let Some(workouts) = delta.preferred_workouts {
            self.preferred_workouts = workouts;
        }
    }

    /// Adds or removes a goal, checkbox style.
    pub fn toggle_goal(&mut self, goal: FitnessGoal) {
        if let Some(pos) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(pos);
        } else {
            self.goals.push(goal);
        }
    }

    /// Adds or removes a preferred workout style, checkbox style.
    pub fn toggle_workout(&mut self, workout: WorkoutType) {
        if let Some(pos) = self.preferred_workouts.iter().position(|w| *w == workout) {
            self.preferred_workouts.remove(pos);
        } else {
            self.preferred_workouts.push(workout);
        }
    }
}

/// A partial profile update submitted through the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDelta {
    pub age: Option<u32>,
    pub weight_kg: Option<f32>,
    pub height_cm: Option<f32>,
    pub gender: Option<Gender>,
    pub fitness_level: Option<FitnessLevel>,
    pub goals: Option<Vec<FitnessGoal>>,
    pub available_time: Option<TimeBudget>,
    pub preferred_workouts: Option<Vec<WorkoutType>>,
}
