//! Blocking HTTP fetching with retries.
use std::fmt;
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use url::Url;

use crate::error::Error;

/// Upper bound of a single backoff delay.
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Bounded retry policy with exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each following one.
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 8,
            backoff_factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (starting at 1).
    pub fn delay(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1).min(31);
        let secs = self.backoff_factor * f64::from(1u32 << exp);
        // from_secs_f64 panics on overflow, NaN or infinity
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(secs.min(MAX_BACKOFF.as_secs_f64()))
    }

    /// Retried statuses. Other statuses are returned to the caller as they are.
    fn should_retry(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }
}

#[derive(Debug)]
pub enum FetchErrorKind {
    Http(reqwest::Error),
    Status(StatusCode),
}

/// A page that could not be fetched after every retry.
#[derive(Debug)]
pub struct FetchError {
    pub url: Url,
    pub attempts: u32,
    pub kind: FetchErrorKind,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FetchErrorKind::Http(e) => write!(
                f,
                "could not fetch {} after {} attempts: {}",
                self.url, self.attempts, e
            ),
            FetchErrorKind::Status(s) => write!(
                f,
                "could not fetch {} after {} attempts: status {}",
                self.url, self.attempts, s
            ),
        }
    }
}

impl std::error::Error for FetchError {}

/// A fetched page.
#[derive(Debug)]
pub struct Page {
    pub url: Url,
    pub status: StatusCode,
    pub body: String,
}

/// holds the http client that will make the requests.
pub struct Fetcher {
    client: reqwest::blocking::Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(timeout: Duration, policy: RetryPolicy) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client, policy })
    }

    fn attempt(&self, url: &Url) -> Result<(StatusCode, Vec<u8>), reqwest::Error> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let body = response.bytes()?;
        Ok((status, body.to_vec()))
    }

    /// Fetch `url`, retrying on network errors and on 429/5xx statuses.
    ///
    /// Pages with other non-success statuses (404...) are returned, the caller decides what to do with them.
    pub fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        let mut retry = 0;
        loop {
            debug!("fetching {} (attempt {})", url, retry + 1);
            let kind = match self.attempt(url) {
                Ok((status, body)) if !RetryPolicy::should_retry(status) => {
                    if !status.is_success() {
                        warn!("{} answered with status {}", url, status);
                    }
                    return Ok(Page {
                        url: url.clone(),
                        status,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    });
                }
                Ok((status, _)) => FetchErrorKind::Status(status),
                Err(e) => FetchErrorKind::Http(e),
            };

            if retry >= self.policy.max_retries {
                return Err(FetchError {
                    url: url.clone(),
                    attempts: retry + 1,
                    kind,
                });
            }

            retry += 1;
            let delay = self.policy.delay(retry);
            warn!("fetching {} failed ({:?}), retrying in {:?}", url, kind, delay);
            thread::sleep(delay);
        }
    }
}
