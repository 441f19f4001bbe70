// Transport: reqwest client construction and bounded retry.
//
// Builds the `reqwest::Client` (TLS mode, timeout, cookie jar) and wraps
// it with an exponential-backoff retry loop that only fires on
// connection failures and timeouts. Status codes are never retried here;
// classifying them is the request engine's job.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use tracing::{trace, warn};

use crate::error::{Error, is_retryable_transport};

const USER_AGENT: &str = concat!("unifi-network/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed controllers).
    DangerAcceptInvalid,
}

/// Bounded exponential backoff applied to transport-level failures.
///
/// `max_retries` counts retries after the first attempt, so the default
/// policy makes at most six attempts. The wait before retry `n` (0-based)
/// is `wait_min * 2^n`, capped at `wait_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub wait_min: Duration,
    pub wait_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            wait_min: Duration::from_secs(1),
            wait_max: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before the retry following failed attempt `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1_u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.wait_min.saturating_mul(factor).min(self.wait_max)
    }
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    /// Toggle certificate validation bypass.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        if insecure {
            self.tls = TlsMode::DangerAcceptInvalid;
        }
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Create a config with a fresh cookie jar (for session auth).
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }

    /// Build a [`Transport`] from this config.
    pub fn build(&self) -> Result<Transport, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        if let Some(ref jar) = self.cookie_jar {
            builder = builder.cookie_provider(Arc::clone(jar));
        }

        let http = builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))?;

        Ok(Transport {
            http,
            retry: self.retry,
        })
    }
}

/// HTTP transport with connection reuse and bounded retry.
///
/// Cheap to clone; the inner `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl Transport {
    /// The underlying HTTP client (for building requests).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Execute a request, retrying connection failures and timeouts.
    ///
    /// Each attempt sends a fresh clone of `request`. Dropping the returned
    /// future cancels the in-flight attempt and every remaining one.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        let mut attempt: u32 = 0;
        loop {
            let Some(cloned) = request.try_clone() else {
                // Streaming bodies cannot be replayed.
                return self.execute_once(request).await;
            };

            match self.http.execute(cloned).await {
                Ok(resp) => {
                    trace!(attempt, status = %resp.status(), "transport attempt completed");
                    return Ok(resp);
                }
                Err(e) if attempt < self.retry.max_retries && is_retryable_transport(&e) => {
                    let delay = self.retry.backoff(attempt);
                    attempt += 1;
                    warn!(
                        attempt,
                        max_retries = self.retry.max_retries,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "transport failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(Error::Transport(e)),
            }
        }
    }

    /// Execute a request exactly once, without retry.
    pub async fn execute_once(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        self.http.execute(request).await.map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_controller_tuning() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.wait_min, Duration::from_secs(1));
        assert_eq!(policy.wait_max, Duration::from_secs(30));
    }

    #[test]
    fn backoff_doubles_until_ceiling() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = (0..7).map(|n| policy.backoff(n).as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 16, 30, 30]);
    }

    #[test]
    fn backoff_survives_huge_attempt_counts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(64), Duration::from_secs(30));
    }

    #[test]
    fn insecure_flag_selects_danger_mode() {
        let cfg = TransportConfig::default().with_insecure(true);
        assert!(matches!(cfg.tls, TlsMode::DangerAcceptInvalid));

        let cfg = TransportConfig::default().with_insecure(false);
        assert!(matches!(cfg.tls, TlsMode::System));
    }
}
