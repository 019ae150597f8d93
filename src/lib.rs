//! Retry a fallible operation under an attempt limit and a fixed backoff,
//! until a judgment accepts the outcome.
//!
//! ```
//! use reattempt::{OrPanic, Policy};
//!
//! let policy = Policy::new()
//!     .with_attempt_limit(5)
//!     .or_panic()
//!     .with_backoff(0)
//!     .or_panic();
//!
//! let mut calls = 0;
//! let result = policy.run(|| {
//!     calls += 1;
//!     if calls < 3 { Err("not yet") } else { Ok(()) }
//! });
//!
//! assert!(result.is_ok());
//! assert_eq!(calls, 3);
//! ```

pub mod cli;
pub mod command;
pub mod error;
pub mod judgment;
pub mod policy;
pub mod retry;

pub use error::{OrPanic, Rejected, RetryError, RunError};
pub use judgment::{DataJudgment, DefaultJudgment, Judgment};
pub use policy::Policy;
