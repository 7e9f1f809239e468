//! Advisor service seam.
//!
//! The chat use case talks to an [`AdvisorService`] rather than the
//! matcher directly, so the reply producer is swappable (tests use
//! instant or gated implementations). The shipped implementation wraps
//! the rule catalog behind a simulated processing delay.

use std::time::Duration;

use async_trait::async_trait;
use fitcoach_core::advisor::{self, Advice};
use rand::Rng;

/// Produces the assistant's reply for one user input.
#[async_trait]
pub trait AdvisorService: Send + Sync {
    /// Composes advice for the given raw user text.
    async fn advise(&self, text: &str) -> Advice;
}

/// The rule-based advisor: first-match-wins over the builtin topic
/// catalog, behind a simulated processing delay.
///
/// The delay is sampled uniformly from `[min_latency, max_latency]`
/// per call, 1.0-2.0 seconds by default. Once a reply is scheduled it
/// always completes; there is no cancellation or timeout path.
pub struct RuleBasedAdvisor {
    min_latency: Duration,
    max_latency: Duration,
}

impl RuleBasedAdvisor {
    /// Creates an advisor with the default 1.0-2.0 s latency window.
    pub fn new() -> Self {
        Self {
            min_latency: Duration::from_millis(1000),
            max_latency: Duration::from_millis(2000),
        }
    }

    /// Creates an advisor with a custom latency window.
    pub fn with_latency(min_latency: Duration, max_latency: Duration) -> Self {
        debug_assert!(min_latency <= max_latency);
        Self {
            min_latency,
            max_latency,
        }
    }

    /// Creates an advisor that replies without delay (for tests and
    /// non-interactive callers).
    pub fn instant() -> Self {
        Self::with_latency(Duration::ZERO, Duration::ZERO)
    }

    fn sample_latency(&self) -> Duration {
        let min = self.min_latency.as_millis() as u64;
        let max = self.max_latency.as_millis() as u64;
        if min == max {
            return self.min_latency;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

impl Default for RuleBasedAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdvisorService for RuleBasedAdvisor {
    async fn advise(&self, text: &str) -> Advice {
        let latency = self.sample_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        advisor::advise(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcoach_core::advisor::Topic;

    #[tokio::test]
    async fn test_instant_advisor_matches_the_catalog() {
        let advisor = RuleBasedAdvisor::instant();
        let advice = advisor.advise("breakfast").await;
        assert_eq!(advice.topic, Topic::Meals);
    }

    #[tokio::test]
    async fn test_latency_window_is_respected() {
        tokio::time::pause();
        let advisor =
            RuleBasedAdvisor::with_latency(Duration::from_millis(50), Duration::from_millis(80));

        let start = tokio::time::Instant::now();
        let _ = advisor.advise("hello").await;
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed <= Duration::from_millis(81));
    }
}
