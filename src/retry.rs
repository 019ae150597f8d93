use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{RetryError, RunError};
use crate::judgment::{DataJudgment, Judgment};
use crate::policy::Policy;

impl<J> Policy<J> {
    /// Exhaustion drops the last outcome; a judgment that needs the last
    /// error has to capture it itself.
    pub fn run<E, F>(&self, mut operation: F) -> Result<(), RunError<E>>
    where
        J: Judgment<E>,
        F: FnMut() -> Result<(), E>,
    {
        for attempt in 0..self.attempt_limit() {
            if attempt > 0 {
                self.pause();
            }
            self.log_attempt(attempt);

            let outcome = operation();
            if self.judgment().judge(&outcome) {
                debug!(attempt = attempt + 1, ok = outcome.is_ok(), "outcome accepted");
                return outcome.map_err(RunError::Operation);
            }
        }

        Err(self.exhausted())
    }

    /// Returns `D::default()` as data if no attempt ran.
    pub fn run_with_data<D, E, F>(&self, mut operation: F) -> (D, Result<(), RunError<E>>)
    where
        J: DataJudgment<D, E>,
        D: Default,
        F: FnMut() -> (D, Result<(), E>),
    {
        let mut data = D::default();

        for attempt in 0..self.attempt_limit() {
            if attempt > 0 {
                self.pause();
            }
            self.log_attempt(attempt);

            let (value, outcome) = operation();
            if self.judgment().judge(&value, &outcome) {
                debug!(attempt = attempt + 1, ok = outcome.is_ok(), "outcome accepted");
                return (value, outcome.map_err(RunError::Operation));
            }
            data = value;
        }

        (data, Err(self.exhausted()))
    }

    pub async fn run_async<E, F, Fut>(&self, mut operation: F) -> Result<(), RunError<E>>
    where
        J: Judgment<E>,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        for attempt in 0..self.attempt_limit() {
            if attempt > 0 {
                self.pause_async().await;
            }
            self.log_attempt(attempt);

            let outcome = operation().await;
            if self.judgment().judge(&outcome) {
                debug!(attempt = attempt + 1, ok = outcome.is_ok(), "outcome accepted");
                return outcome.map_err(RunError::Operation);
            }
        }

        Err(self.exhausted())
    }

    pub async fn run_with_data_async<D, E, F, Fut>(
        &self,
        mut operation: F,
    ) -> (D, Result<(), RunError<E>>)
    where
        J: DataJudgment<D, E>,
        D: Default,
        F: FnMut() -> Fut,
        Fut: Future<Output = (D, Result<(), E>)>,
    {
        let mut data = D::default();

        for attempt in 0..self.attempt_limit() {
            if attempt > 0 {
                self.pause_async().await;
            }
            self.log_attempt(attempt);

            let (value, outcome) = operation().await;
            if self.judgment().judge(&value, &outcome) {
                debug!(attempt = attempt + 1, ok = outcome.is_ok(), "outcome accepted");
                return (value, outcome.map_err(RunError::Operation));
            }
            data = value;
        }

        (data, Err(self.exhausted()))
    }

    fn log_attempt(&self, attempt: u32) {
        debug!(
            attempt = attempt + 1,
            attempt_limit = self.attempt_limit(),
            "starting attempt"
        );
    }

    fn pause(&self) {
        let delay = self.delay();
        if delay > Duration::ZERO {
            debug!(delay_ms = delay.as_millis(), "backing off");
            std::thread::sleep(delay);
        }
    }

    async fn pause_async(&self) {
        let delay = self.delay();
        if delay > Duration::ZERO {
            debug!(delay_ms = delay.as_millis(), "backing off");
            tokio::time::sleep(delay).await;
        }
    }

    fn exhausted<E>(&self) -> RunError<E> {
        warn!(
            attempts = self.attempt_limit(),
            "no attempt was accepted; giving up"
        );
        RetryError::MaxAttemptsExceeded.into()
    }
}
