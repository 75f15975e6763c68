//! Retry settings for the request dispatcher.

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of attempts per request.
pub const DEFAULT_RETRY_COUNT: u32 = 5;

/// Default delay between attempts, in seconds. Matches `RetryPolicy::default`.
pub const DEFAULT_RETRY_DELAY: f64 = 1.0;

/// How many times a request is attempted and how long to wait in between.
///
/// Only connection failures, timeouts and 5xx responses are retried.
///
/// # Example
///
/// ```rust
/// use moysklad_api::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3, 0.5).unwrap();
/// assert_eq!(policy.attempts(), 3);
/// assert_eq!(policy.delay(), Duration::from_millis(500));
///
/// // A count of zero still sends the request once.
/// assert_eq!(RetryPolicy::new(0, 0.0).unwrap().attempts(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    count: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryDelay`] if `delay_secs` is negative,
    /// NaN, infinite or too large for a [`Duration`].
    pub fn new(count: u32, delay_secs: f64) -> Result<Self, ConfigError> {
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(ConfigError::InvalidRetryDelay { delay: delay_secs });
        }
        let delay = Duration::try_from_secs_f64(delay_secs)
            .map_err(|_| ConfigError::InvalidRetryDelay { delay: delay_secs })?;
        Ok(Self { count, delay })
    }

    /// Returns the configured retry count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Returns the number of attempts actually made (at least one).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.count.max(1)
    }

    /// Returns the delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            count: DEFAULT_RETRY_COUNT,
            delay: Duration::from_secs(1),
        }
    }
}
