use thiserror::Error;

/// Top-level error type for the `unifi-network-api` crate.
///
/// Covers every failure mode of the client layer: login, transport,
/// application status codes, empty array responses, and JSON decoding.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected by the controller (wrong credentials, locked account).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    /// Surfaced after the retry budget is exhausted.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A header value could not be encoded (e.g. API key with control bytes).
    #[error("Invalid {name} header: {message}")]
    InvalidHeader { name: &'static str, message: String },

    // ── Application ─────────────────────────────────────────────────
    /// HTTP status >= 400. Never retried; carries the full body for diagnostics.
    #[error("UniFi API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// A create call returned an empty array.
    #[error("Empty response from controller for {endpoint}")]
    EmptyResponse { endpoint: String },

    /// A get call returned an empty array (or a v2 scan found nothing).
    #[error("Resource {endpoint}/{id} not found")]
    NotFound { endpoint: String, id: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// Returns `true` if this is a transport-level failure worth retrying.
    ///
    /// Application responses (any HTTP status) are never transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => is_retryable_transport(e),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error, either an empty
    /// array from a get or an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Api { status: 404, .. }
        )
    }

    /// The HTTP status code, when the controller answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Connection failures and timeouts are retried; everything else is final.
pub(crate) fn is_retryable_transport(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}
