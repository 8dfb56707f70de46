use crate::errors::fetch_context;
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client with built-in rate limiting; shareable across concurrent requests
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.send_get_request(url).await
    }

    /// GET a page body; `None` when the server answers with a non-success status
    pub async fn get_text(&self, url: &str) -> Result<Option<String>> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            log::debug!("{} answered {}", url, response.status());
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .with_context(|| fetch_context(url))?;
        Ok(Some(text))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }
}
