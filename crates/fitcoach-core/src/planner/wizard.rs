//! Plan wizard state machine.
//!
//! The wizard walks the user through Profile -> Goals -> Preferences ->
//! Plan. Each forward transition is guarded by the completeness of the
//! fields its step collects; a refused advance leaves the state
//! untouched. Backward transitions are always allowed (except from the
//! first step) and never reset previously entered values.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::plan::WorkoutPlan;
use super::profile::{ProfileDelta, UserProfile};

/// The wizard's current step.
///
/// The terminal step owns the generated plan, so "reached the plan step
/// without a plan" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardStep {
    /// Collecting age, weight, height, gender, and fitness level.
    Profile,
    /// Collecting at least one fitness goal.
    Goals,
    /// Collecting the time budget and preferred workout styles.
    Preferences,
    /// A plan has been generated.
    Plan {
        /// The generated plan.
        plan: WorkoutPlan,
    },
}

impl WizardStep {
    /// Step name for logging and display.
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Profile => "profile",
            WizardStep::Goals => "goals",
            WizardStep::Preferences => "preferences",
            WizardStep::Plan { .. } => "plan",
        }
    }

    /// 1-based step number as shown in the setup progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Profile => 1,
            WizardStep::Goals => 2,
            WizardStep::Preferences => 3,
            WizardStep::Plan { .. } => 4,
        }
    }

    /// True for the terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Plan { .. })
    }
}

/// Outcome of an attempted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The step changed.
    Advanced,
    /// The guard was unmet (or the move is undefined); state unchanged.
    Refused,
}

impl Transition {
    /// True when the step changed.
    pub fn advanced(&self) -> bool {
        matches!(self, Transition::Advanced)
    }
}

/// The gated multi-step flow that collects a profile and culminates in
/// plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWizard {
    step: WizardStep,
    profile: UserProfile,
}

impl PlanWizard {
    /// Creates a wizard at the profile step with an empty profile.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Profile,
            profile: UserProfile::new(),
        }
    }

    /// The current step.
    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// Read-only view of the collected profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Merges a partial profile update. Allowed at any step; re-entering
    /// a step after going back edits the same values.
    pub fn apply(&mut self, delta: ProfileDelta) {
        self.profile.apply(delta);
    }

    /// True when the current step's guard is satisfied.
    pub fn can_advance(&self) -> bool {
        match &self.step {
            WizardStep::Profile => self.profile.has_basic_info(),
            WizardStep::Goals => self.profile.has_goals(),
            WizardStep::Preferences => self.profile.has_preferences(),
            WizardStep::Plan { .. } => false,
        }
    }

    /// Attempts to advance to the next step.
    ///
    /// Advancing out of the preferences step generates the plan: one
    /// catalog entry is picked uniformly at random. The collected
    /// profile gates *whether* generation may proceed but does not
    /// influence *which* plan is produced. Re-advancing after "modify
    /// plan" rolls a fresh selection.
    ///
    /// A refused advance is not an error; the state is left untouched.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if !self.can_advance() {
            return Transition::Refused;
        }
        self.step = match &self.step {
            WizardStep::Profile => WizardStep::Goals,
            WizardStep::Goals => WizardStep::Preferences,
            WizardStep::Preferences => WizardStep::Plan {
                plan: catalog::random_plan(rng).clone(),
            },
            // can_advance is false on the terminal step
            WizardStep::Plan { .. } => return Transition::Refused,
        };
        Transition::Advanced
    }

    /// Steps backward, preserving every collected value. From the plan
    /// step this is the "modify plan" move back to preferences; the
    /// generated plan is discarded. Refused only at the first step.
    pub fn back(&mut self) -> Transition {
        self.step = match &self.step {
            WizardStep::Profile => return Transition::Refused,
            WizardStep::Goals => WizardStep::Profile,
            WizardStep::Preferences => WizardStep::Goals,
            WizardStep::Plan { .. } => WizardStep::Preferences,
        };
        Transition::Advanced
    }

    /// The generated plan, if the wizard has reached the plan step.
    pub fn generated_plan(&self) -> Option<&WorkoutPlan> {
        match &self.step {
            WizardStep::Plan { plan } => Some(plan),
            _ => None,
        }
    }
}

impl Default for PlanWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::profile::{FitnessGoal, FitnessLevel, Gender, TimeBudget, WorkoutType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn basic_info() -> ProfileDelta {
        ProfileDelta {
            age: Some(25),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Some(Gender::Male),
            fitness_level: Some(FitnessLevel::Beginner),
            ..ProfileDelta::default()
        }
    }

    fn wizard_at_preferences() -> PlanWizard {
        let mut wizard = PlanWizard::new();
        wizard.apply(basic_info());
        wizard.advance(&mut rng());
        wizard.apply(ProfileDelta {
            goals: Some(vec![FitnessGoal::WeightLoss]),
            ..ProfileDelta::default()
        });
        wizard.advance(&mut rng());
        wizard.apply(ProfileDelta {
            available_time: Some(TimeBudget::Medium),
            preferred_workouts: Some(vec![WorkoutType::Hiit]),
            ..ProfileDelta::default()
        });
        assert_eq!(wizard.step().number(), 3);
        wizard
    }

    #[test]
    fn test_starts_at_profile_step() {
        let wizard = PlanWizard::new();
        assert_eq!(*wizard.step(), WizardStep::Profile);
        assert_eq!(wizard.step().number(), 1);
        assert!(wizard.generated_plan().is_none());
    }

    #[test]
    fn test_profile_guard_refuses_when_any_field_missing() {
        let deltas = [
            ProfileDelta {
                age: None,
                ..basic_info()
            },
            ProfileDelta {
                weight_kg: None,
                ..basic_info()
            },
            ProfileDelta {
                height_cm: None,
                ..basic_info()
            },
            ProfileDelta {
                gender: None,
                ..basic_info()
            },
            ProfileDelta {
                fitness_level: None,
                ..basic_info()
            },
        ];
        for delta in deltas {
            let mut wizard = PlanWizard::new();
            wizard.apply(delta);
            assert_eq!(wizard.advance(&mut rng()), Transition::Refused);
            assert_eq!(*wizard.step(), WizardStep::Profile, "state must not move");
        }
    }

    #[test]
    fn test_profile_guard_passes_when_complete() {
        let mut wizard = PlanWizard::new();
        wizard.apply(basic_info());
        assert_eq!(wizard.advance(&mut rng()), Transition::Advanced);
        assert_eq!(*wizard.step(), WizardStep::Goals);
    }

    #[test]
    fn test_goals_guard_requires_a_selection() {
        let mut wizard = PlanWizard::new();
        wizard.apply(basic_info());
        wizard.advance(&mut rng());

        assert_eq!(wizard.advance(&mut rng()), Transition::Refused);

        wizard.apply(ProfileDelta {
            goals: Some(vec![FitnessGoal::MuscleGain]),
            ..ProfileDelta::default()
        });
        assert_eq!(wizard.advance(&mut rng()), Transition::Advanced);
        assert_eq!(*wizard.step(), WizardStep::Preferences);
    }

    #[test]
    fn test_generation_produces_catalog_member() {
        let ids: HashSet<String> = catalog::workout_plans()
            .iter()
            .map(|p| p.id.clone())
            .collect();

        // Whatever the profile contains, the plan comes from the
        // catalog.
        for seed in 0..20 {
            let mut wizard = wizard_at_preferences();
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(wizard.advance(&mut rng), Transition::Advanced);
            let plan = wizard.generated_plan().expect("plan step holds a plan");
            assert!(ids.contains(&plan.id));
        }
    }

    #[test]
    fn test_preferences_guard_needs_time_and_workouts() {
        let mut wizard = wizard_at_preferences();
        wizard.apply(ProfileDelta {
            preferred_workouts: Some(vec![]),
            ..ProfileDelta::default()
        });
        assert_eq!(wizard.advance(&mut rng()), Transition::Refused);
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn test_back_preserves_entered_values() {
        let mut wizard = wizard_at_preferences();
        wizard.back();
        wizard.back();
        assert_eq!(*wizard.step(), WizardStep::Profile);

        // Nothing was reset on the way back.
        assert_eq!(wizard.profile().age, Some(25));
        assert_eq!(wizard.profile().goals, vec![FitnessGoal::WeightLoss]);
        assert_eq!(wizard.profile().available_time, Some(TimeBudget::Medium));

        // And the guards still pass on the way forward again.
        assert!(wizard.advance(&mut rng()).advanced());
        assert!(wizard.advance(&mut rng()).advanced());
    }

    #[test]
    fn test_back_refused_at_first_step() {
        let mut wizard = PlanWizard::new();
        assert_eq!(wizard.back(), Transition::Refused);
    }

    #[test]
    fn test_modify_plan_returns_to_preferences() {
        let mut wizard = wizard_at_preferences();
        wizard.advance(&mut rng());
        assert!(wizard.step().is_terminal());

        assert_eq!(wizard.back(), Transition::Advanced);
        assert_eq!(*wizard.step(), WizardStep::Preferences);
        assert!(wizard.generated_plan().is_none());

        // Regeneration is allowed and rolls a fresh selection.
        assert!(wizard.advance(&mut rng()).advanced());
        assert!(wizard.generated_plan().is_some());
    }

    #[test]
    fn test_terminal_step_refuses_forward() {
        let mut wizard = wizard_at_preferences();
        wizard.advance(&mut rng());
        assert_eq!(wizard.advance(&mut rng()), Transition::Refused);
    }
}
