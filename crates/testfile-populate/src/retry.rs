//! Bounded retry with a fixed delay between attempts.

use std::fmt;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Maximum number of attempts for a single write.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Pause between two attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How often and how patiently an action is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero is treated as one.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Retry without sleeping.
    pub const fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Every attempt failed.
#[derive(Error, Debug)]
#[error("gave up after {attempts} attempts: {last_error}")]
pub struct RetryError<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Run `action` until it succeeds or the policy's attempts are used up.
///
/// The closure receives the 1-based attempt number. Whether a final failure
/// is fatal is left to the caller.
pub fn retry<T, E, F>(policy: &RetryPolicy, mut action: F) -> Result<T, RetryError<E>>
where
    E: fmt::Display,
    F: FnMut(u32) -> Result<T, E>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match action(attempt) {
            Ok(value) => {
                if attempt > 1 {
                    debug!("Succeeded after {attempt} attempts");
                }
                return Ok(value);
            }
            Err(e) if attempt >= max_attempts => {
                return Err(RetryError {
                    attempts: attempt,
                    last_error: e,
                });
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} failed: {}, retrying in {:?}",
                    attempt, max_attempts, e, policy.delay
                );
                if !policy.delay.is_zero() {
                    thread::sleep(policy.delay);
                }
                attempt += 1;
            }
        }
    }
}
