use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Spaces requests at least `delay` apart, including concurrent callers
pub struct RateLimiter {
    delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            self.apply_delay(previous).await;
        }

        *last = Some(Instant::now());
    }

    async fn apply_delay(&self, previous: Instant) {
        sleep_until(previous + self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_not_delayed() {
        let limiter = RateLimiter::new(200);
        let start = std::time::Instant::now();

        limiter.wait().await;

        assert!(start.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_requests_are_spaced() {
        let limiter = RateLimiter::new(30);
        let start = std::time::Instant::now();

        for _ in 0..3 {
            limiter.wait().await;
        }

        assert!(start.elapsed() >= Duration::from_millis(60));
    }
}
