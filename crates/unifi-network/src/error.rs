//! CLI error types with miette diagnostics.
//!
//! Maps client and config errors into user-facing errors with help text
//! and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use unifi_network_api::Error as ApiError;
use unifi_network_config::ConfigError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the controller")]
    #[diagnostic(
        code(unifi_network::connection_failed),
        help(
            "Check that --host points at a running controller.\n\
             Self-signed certificate? Try --insecure (-k).\n\
             Standalone Network Application? Try --standalone."
        )
    )]
    ConnectionFailed {
        #[source]
        source: ApiError,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(unifi_network::timeout),
        help("Raise timeout_secs in the config file or check controller responsiveness.")
    )]
    Timeout {
        #[source]
        source: ApiError,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(unifi_network::auth_failed),
        help("Verify the API key, or the username and password.")
    )]
    AuthFailed { message: String },

    #[error("No credentials configured")]
    #[diagnostic(
        code(unifi_network::no_credentials),
        help(
            "Pass --api-key, or --username and --password.\n\
             Or set UNIFI_API_KEY, or UNIFI_USERNAME and UNIFI_PASSWORD."
        )
    )]
    NoCredentials,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{kind} '{id}' not found")]
    #[diagnostic(
        code(unifi_network::not_found),
        help("Run: unifi-network list {kind}")
    )]
    NotFound { kind: String, id: String },

    #[error("Controller returned no record for {endpoint}")]
    #[diagnostic(code(unifi_network::empty_response))]
    EmptyResponse { endpoint: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {body}")]
    #[diagnostic(code(unifi_network::api_error))]
    Api { status: u16, body: String },

    #[error("Unexpected response from controller: {message}")]
    #[diagnostic(code(unifi_network::decode))]
    Decode { message: String },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifi_network::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(unifi_network::config),
        help("Check the config file and UNIFI_* environment variables.")
    )]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Could not read {path}")]
    #[diagnostic(code(unifi_network::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(unifi_network::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::NotFound { .. } | Self::Api { status: 404, .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials => Self::NoCredentials,
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other @ ConfigError::Figment(_) => Self::Config(Box::new(other)),
        }
    }
}

// ── ApiError → CliError ──────────────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Authentication { message } => Self::AuthFailed { message },
            ApiError::Api {
                status: status @ (401 | 403),
                body,
            } => Self::AuthFailed {
                message: format!("HTTP {status}: {body}"),
            },
            ApiError::Api { status, body } => Self::Api { status, body },
            ApiError::NotFound { endpoint, id } => Self::NotFound { kind: endpoint, id },
            ApiError::EmptyResponse { endpoint } => Self::EmptyResponse { endpoint },
            ApiError::Deserialization { message, .. } => Self::Decode { message },
            ApiError::Serialization(e) => Self::Json(e),
            ApiError::InvalidHeader { name, message } => Self::Validation {
                field: name.to_owned(),
                reason: message,
            },
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "host".into(),
                reason: e.to_string(),
            },
            ApiError::Transport(ref e) if e.is_timeout() => Self::Timeout { source: err },
            source => Self::ConnectionFailed { source },
        }
    }
}
