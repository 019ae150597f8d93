use std::time::Duration;

use crate::error::{Rejected, RetryError};
use crate::judgment::DefaultJudgment;

const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// A fresh policy makes zero attempts; set an attempt limit before running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy<J = DefaultJudgment> {
    attempt_limit: u32,
    backoff: u32,
    time_unit: Duration,
    judgment: J,
}

impl Policy {
    pub fn new() -> Self {
        Self {
            attempt_limit: 0,
            backoff: 0,
            time_unit: DEFAULT_TIME_UNIT,
            judgment: DefaultJudgment,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl<J> Policy<J> {
    /// Total invocations including the first, `1..=u32::MAX`. A rejected
    /// value hands the policy back unchanged inside [`Rejected`].
    pub fn with_attempt_limit(self, attempt_limit: i64) -> Result<Self, Rejected<Self>> {
        match u32::try_from(attempt_limit) {
            Ok(attempt_limit) if attempt_limit >= 1 => Ok(Self {
                attempt_limit,
                ..self
            }),
            _ => Err(Rejected::new(self, RetryError::InvalidInput)),
        }
    }

    pub fn with_backoff(self, backoff: i64) -> Result<Self, Rejected<Self>> {
        match u32::try_from(backoff) {
            Ok(backoff) => Ok(Self { backoff, ..self }),
            Err(_) => Err(Rejected::new(self, RetryError::InvalidInput)),
        }
    }

    pub fn with_time_unit(self, time_unit: Duration) -> Self {
        Self { time_unit, ..self }
    }

    pub fn with_judgment<K>(self, judgment: K) -> Policy<K> {
        Policy {
            attempt_limit: self.attempt_limit,
            backoff: self.backoff,
            time_unit: self.time_unit,
            judgment,
        }
    }

    pub fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    pub fn backoff(&self) -> u32 {
        self.backoff
    }

    pub fn time_unit(&self) -> Duration {
        self.time_unit
    }

    pub fn judgment(&self) -> &J {
        &self.judgment
    }

    /// `time_unit * backoff * attempt_limit`, the same before every retry.
    pub fn delay(&self) -> Duration {
        let units = self.backoff.saturating_mul(self.attempt_limit);
        self.time_unit.saturating_mul(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_policy_is_zero_valued() {
        let policy = Policy::new();

        assert_eq!(policy.attempt_limit(), 0);
        assert_eq!(policy.backoff(), 0);
        assert_eq!(policy.time_unit(), Duration::from_secs(1));
        assert_eq!(policy.delay(), Duration::ZERO);
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn judgment_swap_keeps_limits() {
        let policy = Policy::new()
            .with_attempt_limit(4)
            .and_then(|p| p.with_backoff(2))
            .expect("valid input")
            .with_judgment(|outcome: &Result<(), ()>| outcome.is_err());

        assert_eq!(policy.attempt_limit(), 4);
        assert_eq!(policy.backoff(), 2);
        assert!((policy.judgment())(&Err(())));
    }
}
