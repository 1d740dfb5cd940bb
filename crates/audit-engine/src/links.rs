//! Affiliate link validation
//!
//! Link checking sits behind the `LinkChecker` trait so the audit pipeline
//! stays deterministic by default: `OfflineLinkChecker` reports every link
//! valid without touching the network, while `HttpLinkChecker` resolves each
//! URL with rate limiting, retries, and manual redirect counting.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::retry::RetryPolicy;
use async_trait::async_trait;
use audit_core::{AspLink, LinkStatus, LinkValidationResult};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use reqwest::redirect::Policy;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// Response time reported for links that are not actually fetched
const OFFLINE_RESPONSE_TIME_MS: u64 = 250;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Trait for affiliate link validation
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// Check a single link
    ///
    /// Link checking never fails the audit: an unreachable link is reported
    /// as broken, not as an error.
    async fn check(&self, link: &AspLink) -> LinkValidationResult;

    /// Get the checker name
    fn name(&self) -> &str;

    /// Check all links concurrently, preserving input order
    async fn check_all(&self, links: &[AspLink]) -> Vec<LinkValidationResult> {
        futures::future::join_all(links.iter().map(|link| self.check(link))).await
    }
}

/// Link checker that performs no I/O
///
/// Every link is reported valid with fixed timing, keeping audits
/// reproducible and offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLinkChecker;

#[async_trait]
impl LinkChecker for OfflineLinkChecker {
    async fn check(&self, link: &AspLink) -> LinkValidationResult {
        LinkValidationResult {
            original_url: link.url.clone(),
            status: LinkStatus::Valid,
            redirect_count: 0,
            response_time_ms: OFFLINE_RESPONSE_TIME_MS,
        }
    }

    fn name(&self) -> &str {
        "offline"
    }
}

/// Link checker that resolves URLs over HTTP
///
/// Redirects are followed manually so the redirect count can be reported.
/// Requests are rate limited and transient failures retried.
#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
    rate_limiter: SharedRateLimiter,
    retry: RetryPolicy,
    max_redirects: u32,
}

impl HttpLinkChecker {
    /// Create a checker from the engine configuration
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(Policy::none())
            .build()?;

        let quota = Quota::per_minute(
            NonZeroU32::new(config.link_rate_limit).unwrap_or(NonZeroU32::MIN),
        );

        Ok(Self {
            client,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            retry: config.retry_policy(),
            max_redirects: config.max_redirects,
        })
    }

    async fn fetch(&self, url: &str) -> Result<reqwest::Response> {
        let client = self.client.clone();
        let url = url.to_string();

        self.retry
            .execute("link_check", move || {
                let client = client.clone();
                let url = url.clone();
                async move {
                    let response = client.get(&url).send().await?;
                    if response.status().as_u16() == 429 {
                        return Err(EngineError::RateLimitExceeded {
                            provider: "link-target".to_string(),
                        });
                    }
                    Ok(response)
                }
            })
            .await
    }
}

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn check(&self, link: &AspLink) -> LinkValidationResult {
        self.rate_limiter.until_ready().await;

        let started = Instant::now();
        let mut current_url = link.url.clone();
        let mut redirects = 0u32;

        let status = loop {
            match self.fetch(&current_url).await {
                Ok(response) if response.status().is_redirection() => {
                    redirects += 1;
                    if redirects > self.max_redirects {
                        break LinkStatus::Redirected;
                    }
                    match next_location(&current_url, &response) {
                        Some(next) => {
                            debug!(from = %current_url, to = %next, "Following redirect");
                            current_url = next;
                        }
                        None => break LinkStatus::Broken,
                    }
                }
                Ok(response) if response.status().is_success() => {
                    break if redirects > 0 {
                        LinkStatus::Redirected
                    } else {
                        LinkStatus::Valid
                    };
                }
                Ok(_) => break LinkStatus::Broken,
                Err(EngineError::Network(e)) if e.is_timeout() => break LinkStatus::Timeout,
                Err(_) => break LinkStatus::Broken,
            }
        };

        LinkValidationResult {
            original_url: link.url.clone(),
            status,
            redirect_count: redirects,
            response_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Resolve a Location header against the current URL
fn next_location(current: &str, response: &reqwest::Response) -> Option<String> {
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)?
        .to_str()
        .ok()?;

    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(Into::into)
}
