//! Retry policy with scheduled backoff and jitter.

use rand::Rng;
use std::time::Duration;

/// How transient failures are retried.
///
/// The total number of attempts for one call is `max_retries + 1`. Before retry
/// `i` (0-indexed) the executor waits `backoff_schedule[min(i, len - 1)]` plus a
/// random jitter in `[0, base * jitter_ratio)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff_schedule: Vec<Duration>,
    jitter_ratio: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            4,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(500),
                Duration::from_secs(1),
                Duration::from_secs(5),
            ],
            0.1,
        )
    }
}

impl RetryPolicy {
    /// Build a policy. `jitter_ratio` is clamped to `[0, 1]`.
    pub fn new(max_retries: u32, backoff_schedule: Vec<Duration>, jitter_ratio: f64) -> Self {
        let jitter_ratio = if jitter_ratio.is_finite() {
            jitter_ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            max_retries,
            backoff_schedule,
            jitter_ratio,
        }
    }

    /// A policy that never retries.
    pub fn no_retries() -> Self {
        Self::new(0, Vec::new(), 0.0)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn backoff_schedule(&self) -> &[Duration] {
        &self.backoff_schedule
    }

    pub fn jitter_ratio(&self) -> f64 {
        self.jitter_ratio
    }

    /// Scheduled delay before retry `attempt`, without jitter.
    ///
    /// Attempts past the end of the schedule reuse its last entry. An empty
    /// schedule means no wait.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        match self.backoff_schedule.len() {
            0 => Duration::ZERO,
            len => {
                let index = (attempt as usize).min(len - 1);
                self.backoff_schedule[index]
            }
        }
    }

    /// Largest jitter that may be added on top of `base_delay(attempt)`.
    pub fn max_jitter(&self, attempt: u32) -> Duration {
        self.base_delay(attempt).mul_f64(self.jitter_ratio)
    }

    /// Delay to sleep before retry `attempt`, jitter included.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let base = self.base_delay(attempt);
        let max_jitter = self.max_jitter(attempt).as_secs_f64();
        if max_jitter <= 0.0 {
            return base;
        }
        let jitter = rand::thread_rng().gen_range(0.0..max_jitter);
        base + Duration::from_secs_f64(jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries(), 4);
        assert_eq!(policy.backoff_schedule().len(), 4);
    }

    #[test]
    fn test_base_delay_clamps_to_last_entry() {
        let policy = RetryPolicy::new(6, vec![ms(10), ms(20), ms(40)], 0.0);
        assert_eq!(policy.base_delay(0), ms(10));
        assert_eq!(policy.base_delay(2), ms(40));
        assert_eq!(policy.base_delay(5), ms(40));
    }

    #[test]
    fn test_empty_schedule_means_no_wait() {
        let policy = RetryPolicy::new(3, Vec::new(), 0.5);
        assert_eq!(policy.delay_for(0), Duration::ZERO);
        assert_eq!(policy.delay_for(7), Duration::ZERO);
    }

    #[test]
    fn test_delays_stay_within_jitter_bounds() {
        let policy = RetryPolicy::new(4, vec![ms(100), ms(500), ms(1000), ms(5000)], 0.1);
        for attempt in 0..6 {
            let base = policy.base_delay(attempt);
            let max = base + policy.max_jitter(attempt);
            for _ in 0..50 {
                let delay = policy.delay_for(attempt);
                assert!(delay >= base, "delay {:?} below base {:?}", delay, base);
                assert!(delay <= max, "delay {:?} above bound {:?}", delay, max);
            }
        }
    }

    #[test]
    fn test_delays_grow_with_schedule() {
        let policy = RetryPolicy::new(4, vec![ms(100), ms(500), ms(1000), ms(5000)], 0.1);
        // With a 10% jitter cap, each step's worst case stays below the next step's base.
        for attempt in 0..3 {
            let upper = policy.base_delay(attempt) + policy.max_jitter(attempt);
            assert!(upper <= policy.base_delay(attempt + 1));
            assert!(policy.delay_for(attempt) <= policy.delay_for(attempt + 1));
        }
    }

    #[test]
    fn test_jitter_ratio_is_clamped() {
        assert_eq!(RetryPolicy::new(1, vec![], 3.0).jitter_ratio(), 1.0);
        assert_eq!(RetryPolicy::new(1, vec![], -1.0).jitter_ratio(), 0.0);
        assert_eq!(RetryPolicy::new(1, vec![], f64::NAN).jitter_ratio(), 0.0);
    }
}
