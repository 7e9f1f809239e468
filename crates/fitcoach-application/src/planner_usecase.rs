//! Planner use case: drives the wizard and models generation latency.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use fitcoach_core::planner::{PlanWizard, ProfileDelta, Transition, WizardStep, WorkoutPlan};
use tokio::sync::RwLock;

/// Default simulated generation time.
const DEFAULT_GENERATION_DELAY: Duration = Duration::from_secs(2);

/// Drives one user's plan wizard.
///
/// Forward moves through the profile and goals steps are synchronous.
/// Advancing out of the preferences step is the generation move: it is
/// modeled as a delayed step during which `is_generating` is true and
/// further advances are refused, so surfaces can disable their
/// "Generate" control. A refused advance is a no-op, never an error.
pub struct PlannerUseCase {
    wizard: Arc<RwLock<PlanWizard>>,
    generating: AtomicBool,
    generation_delay: Duration,
}

impl PlannerUseCase {
    /// Creates a use case with the default generation delay.
    pub fn new() -> Self {
        Self::with_generation_delay(DEFAULT_GENERATION_DELAY)
    }

    /// Creates a use case with a custom generation delay (zero for
    /// tests).
    pub fn with_generation_delay(generation_delay: Duration) -> Self {
        Self {
            wizard: Arc::new(RwLock::new(PlanWizard::new())),
            generating: AtomicBool::new(false),
            generation_delay,
        }
    }

    /// Merges a partial profile update into the wizard.
    pub async fn apply(&self, delta: ProfileDelta) {
        self.wizard.write().await.apply(delta);
    }

    /// The wizard's current step.
    pub async fn step(&self) -> WizardStep {
        self.wizard.read().await.step().clone()
    }

    /// True while a plan is being generated.
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// True when the current step's guard is satisfied.
    pub async fn can_advance(&self) -> bool {
        self.wizard.read().await.can_advance()
    }

    /// Attempts to advance the wizard, returning the step it lands on.
    ///
    /// When the guard is unmet the step is returned unchanged; callers
    /// are expected to disable their controls rather than surface an
    /// error. The generation move holds no lock while the simulated
    /// delay elapses, then re-checks the guard before committing.
    pub async fn advance(&self) -> WizardStep {
        {
            let mut wizard = self.wizard.write().await;
            match wizard.step() {
                WizardStep::Profile | WizardStep::Goals => {
                    if wizard.advance(&mut rand::thread_rng()) == Transition::Refused {
                        tracing::debug!(step = wizard.step().name(), "advance refused, guard unmet");
                    }
                    return wizard.step().clone();
                }
                WizardStep::Preferences => {
                    if !wizard.can_advance() {
                        tracing::debug!("generation refused, preferences incomplete");
                        return wizard.step().clone();
                    }
                }
                WizardStep::Plan { .. } => return wizard.step().clone(),
            }
        }

        if self.generating.swap(true, Ordering::SeqCst) {
            tracing::debug!("generation already in flight");
            return self.step().await;
        }

        tracing::info!("generating workout plan");
        tokio::time::sleep(self.generation_delay).await;

        let step = {
            let mut wizard = self.wizard.write().await;
            // The profile may have changed while the delay elapsed;
            // advance re-checks the guard and refuses if it no longer
            // holds.
            wizard.advance(&mut rand::thread_rng());
            wizard.step().clone()
        };
        self.generating.store(false, Ordering::SeqCst);

        if let WizardStep::Plan { plan } = &step {
            tracing::info!(plan = %plan.id, "workout plan generated");
        }
        step
    }

    /// Steps the wizard backward ("back" / "modify plan").
    pub async fn back(&self) -> WizardStep {
        let mut wizard = self.wizard.write().await;
        wizard.back();
        wizard.step().clone()
    }

    /// The generated plan, if the wizard has reached the plan step.
    pub async fn generated_plan(&self) -> Option<WorkoutPlan> {
        self.wizard.read().await.generated_plan().cloned()
    }

    /// Snapshot of the collected profile.
    pub async fn profile(&self) -> fitcoach_core::planner::UserProfile {
        self.wizard.read().await.profile().clone()
    }
}

impl Default for PlannerUseCase {
    fn default() -> Self {
        Self::new()
    }
}
