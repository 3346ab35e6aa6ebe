//! Fixed-delay retry policy for generation requests.
//!
//! The remote service's transient failures (quota or generic server error)
//! share one remedy: wait and try again. The policy is deliberately uniform
//! and non-exponential, with a count bound rather than a time bound.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::provider::LlmError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (not "retries after failure").
    pub max_attempts: u32,
    /// Fixed wait between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }

    /// Zero-delay variant for tests.
    pub fn no_delay(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    /// Run `op` up to `max_attempts` times, sleeping `delay` between
    /// attempts. Retryable errors keep the loop going; terminal errors
    /// return immediately. Exhaustion surfaces the last raw response body.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, LlmError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LlmError>>,
    {
        let mut last_body = String::new();
        for attempt in 1..=self.max_attempts {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    last_body = err.response_body();
                    if err.is_rate_limited() {
                        warn!(
                            "quota exhausted (attempt {}/{}), retrying in {:?}",
                            attempt, self.max_attempts, self.delay
                        );
                    } else {
                        warn!(
                            "request failed (attempt {}/{}): {}, retrying in {:?}",
                            attempt, self.max_attempts, err, self.delay
                        );
                    }
                    // No delay after the final attempt; exhaustion is reported
                    // immediately.
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.delay).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Err(LlmError::RetriesExhausted {
            attempts: self.max_attempts,
            last_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    fn rate_limited() -> LlmError {
        LlmError::Api { status: 429, body: "quota exceeded".into() }
    }

    #[tokio::test(start_paused = true)]
    async fn four_failures_then_success_returns_fifth_payload() {
        let policy = RetryPolicy::new(5, Duration::from_secs(10));
        let attempts = Cell::new(0u32);
        let start = Instant::now();

        let result = policy
            .run(|| {
                attempts.set(attempts.get() + 1);
                let n = attempts.get();
                async move {
                    if n < 5 {
                        Err(rate_limited())
                    } else {
                        Ok("fifth".to_string())
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "fifth");
        assert_eq!(attempts.get(), 5);
        // Exactly 4 fixed delays under paused time.
        assert_eq!(start.elapsed(), Duration::from_secs(40));
    }

    #[tokio::test]
    async fn exhaustion_surfaces_last_body_and_stops() {
        let policy = RetryPolicy::no_delay(5);
        let attempts = Cell::new(0u32);

        let result: Result<String, _> = policy
            .run(|| {
                attempts.set(attempts.get() + 1);
                let n = attempts.get();
                async move {
                    Err(LlmError::Api {
                        status: 429,
                        body: format!("failure {}", n),
                    })
                }
            })
            .await;

        assert_eq!(attempts.get(), 5, "no sixth attempt");
        match result {
            Err(LlmError::RetriesExhausted { attempts, last_body }) => {
                assert_eq!(attempts, 5);
                assert_eq!(last_body, "failure 5");
            }
            other => panic!("expected RetriesExhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn terminal_error_is_not_retried() {
        let policy = RetryPolicy::no_delay(5);
        let attempts = Cell::new(0u32);

        let result: Result<String, _> = policy
            .run(|| {
                attempts.set(attempts.get() + 1);
                async { Err(LlmError::MalformedResponse("missing candidate".into())) }
            })
            .await;

        assert_eq!(attempts.get(), 1);
        assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn first_attempt_success_needs_no_delay() {
        let policy = RetryPolicy::new(5, Duration::from_secs(10));
        let result = policy.run(|| async { Ok("immediate".to_string()) }).await;
        assert_eq!(result.unwrap(), "immediate");
    }
}
