use crate::grid::traits::StoreError;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by organizer operations.
///
/// Per-window move failures are not errors; they are reported in
/// [`crate::organizer::ApplyReport`].
#[derive(Debug, Error)]
pub enum OrganizerError {
    /// Layout persistence failed
    #[error("Layout store error: {0}")]
    Store(#[from] StoreError),
    /// A named layout was requested but is not in the store
    #[error("Layout '{0}' not found")]
    LayoutNotFound(String),
    /// Layout names must contain something other than whitespace
    #[error("Invalid layout name: {0:?}")]
    InvalidLayoutName(String),
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for organizer operations
pub type OrganizerResult<T> = Result<T, OrganizerError>;

/// Retry policy for whole-window move attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub backoff_multiplier: f32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 100,
            backoff_multiplier: 1.0,
        }
    }
}

impl RetryConfig {
    /// Pause after failed attempt number `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> std::time::Duration {
        let factor = self
            .backoff_multiplier
            .max(0.0)
            .powi(attempt.saturating_sub(1) as i32);
        std::time::Duration::from_millis((self.base_delay_ms as f32 * factor) as u64)
    }
}

/// How a retried operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOutcome {
    pub succeeded: bool,
    pub attempts: u32,
}

/// Value of the last attempt together with how the retries went.
#[derive(Debug, Clone, PartialEq)]
pub struct Retried<T> {
    pub value: T,
    pub outcome: RetryOutcome,
}

/// Runs `operation` until `done` accepts its value or the attempts run out.
///
/// At least one attempt is always made, and the value of the last attempt is
/// returned whether or not it was accepted.
pub fn retry_until<T, F, P>(
    mut operation: F,
    mut done: P,
    config: &RetryConfig,
    context: &str,
) -> Retried<T>
where
    F: FnMut(u32) -> T,
    P: FnMut(&T) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let value = operation(attempt);
        if done(&value) {
            return Retried {
                value,
                outcome: RetryOutcome {
                    succeeded: true,
                    attempts: attempt,
                },
            };
        }
        warn!(
            "Attempt {}/{} failed for {}",
            attempt, max_attempts, context
        );
        if attempt >= max_attempts {
            return Retried {
                value,
                outcome: RetryOutcome {
                    succeeded: false,
                    attempts: attempt,
                },
            };
        }

        let delay = config.delay_after(attempt);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        attempt += 1;
    }
}

/// Trims a layout name and rejects empty ones.
pub fn validate_layout_name(name: &str) -> OrganizerResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(OrganizerError::InvalidLayoutName(name.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}
