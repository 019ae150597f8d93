use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RetryError {
    #[error("the input value is outside the legal range")]
    InvalidInput,
    #[error("failed after maximum number of attempts to retry")]
    MaxAttemptsExceeded,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError<E> {
    #[error("operation failed: {0:?}")]
    Operation(E),
    #[error(transparent)]
    Retry(#[from] RetryError),
}

impl<E> RunError<E> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Retry(RetryError::MaxAttemptsExceeded))
    }

    pub fn into_operation(self) -> Option<E> {
        match self {
            Self::Operation(err) => Some(err),
            Self::Retry(_) => None,
        }
    }
}

/// A setter refused its input; carries the policy as it was before the call.
#[derive(Error)]
#[error("{error}")]
pub struct Rejected<P> {
    policy: P,
    error: RetryError,
}

impl<P> Rejected<P> {
    pub(crate) fn new(policy: P, error: RetryError) -> Self {
        Self { policy, error }
    }

    pub fn error(&self) -> RetryError {
        self.error
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_policy(self) -> P {
        self.policy
    }
}

impl<P> fmt::Debug for Rejected<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<P> From<Rejected<P>> for RetryError {
    fn from(rejected: Rejected<P>) -> Self {
        rejected.error
    }
}

/// Panics on a rejected setter instead of returning the error.
pub trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T, P> OrPanic<T> for Result<T, Rejected<P>> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(rejected) => panic!("{rejected}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` out of range: got {actual}, expected {min}..={max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },
    #[error("no command given")]
    MissingCommand,
    #[error("invalid `{field}`: {reason}")]
    InvalidPolicy {
        field: &'static str,
        reason: RetryError,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("command exited with code {}", display_code(.code))]
    ExitCode { code: Option<i32> },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
}
