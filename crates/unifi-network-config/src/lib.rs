//! Settings for connecting to a UniFi Network controller.
//!
//! Values are layered: built-in defaults, then a TOML file, then
//! `UNIFI_*` environment variables. [`Settings::to_client_config`] turns
//! the result into a `unifi_network_api::ClientConfig`, which is the
//! point where plain strings become secrets and URLs get validated.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use unifi_network_api::{ClientConfig, Credentials, RetryPolicy, Topology, TransportConfig};

pub const ENV_PREFIX: &str = "UNIFI_";
pub const DEFAULT_HOST: &str = "https://localhost:8443";
pub const DEFAULT_SITE: &str = "default";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(
        "no credentials configured: set an API key, or a username and password \
         (UNIFI_API_KEY / UNIFI_USERNAME + UNIFI_PASSWORD)"
    )]
    NoCredentials,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Connection settings. Every field has a default, so an empty file and
/// an empty environment still extract.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Controller base URL.
    pub host: String,
    pub site: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub api_key: Option<SecretString>,
    /// Skip TLS certificate verification (self-signed controllers).
    pub allow_insecure: bool,
    /// Standalone Network Application: no `/proxy/network` prefix.
    pub is_standalone: bool,
    pub timeout_secs: u64,
    pub retry_max: u32,
    pub retry_wait_min_ms: u64,
    pub retry_wait_max_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            host: DEFAULT_HOST.into(),
            site: DEFAULT_SITE.into(),
            username: None,
            password: None,
            api_key: None,
            allow_insecure: false,
            is_standalone: false,
            timeout_secs: 30,
            retry_max: retry.max_retries,
            retry_wait_min_ms: 1000,
            retry_wait_max_ms: 30_000,
        }
    }
}

impl Settings {
    /// Load from the platform config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load from `path` (or the platform config file when `None`) and the
    /// environment. A missing file is not an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(path).extract()?)
    }

    /// The provider stack, exposed so callers can merge their own layer
    /// (command-line flags) on top.
    pub fn figment(path: Option<&Path>) -> Figment {
        let path = path.map_or_else(config_path, Path::to_path_buf);
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(RawCredentials::KEYS))
            .merge(Serialized::defaults(RawCredentials::from_env()))
    }

    /// Credentials in priority order: a non-empty API key, then a
    /// non-empty username with a password.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if let Some(key) = non_empty_secret(self.api_key.as_ref()) {
            return Ok(Credentials::api_key(key));
        }

        let username = self.username.as_deref().filter(|u| !u.is_empty());
        let password = non_empty_secret(self.password.as_ref());
        match (username, password) {
            (Some(username), Some(password)) => Ok(Credentials::password(username, password)),
            _ => Err(ConfigError::NoCredentials),
        }
    }

    /// Validate and convert into the client's construction parameters.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let host = if self.host.is_empty() {
            DEFAULT_HOST
        } else {
            self.host.as_str()
        };
        let base_url = Url::parse(host).map_err(|e| ConfigError::Validation {
            field: "host".into(),
            reason: format!("'{host}' is not a valid URL: {e}"),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "host".into(),
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        if self.retry_wait_min_ms > self.retry_wait_max_ms {
            return Err(ConfigError::Validation {
                field: "retry_wait_min_ms".into(),
                reason: format!(
                    "{} exceeds retry_wait_max_ms ({})",
                    self.retry_wait_min_ms, self.retry_wait_max_ms
                ),
            });
        }

        let credentials = self.credentials()?;

        let transport = TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..TransportConfig::default()
        }
        .with_insecure(self.allow_insecure)
        .with_retry(RetryPolicy {
            max_retries: self.retry_max,
            wait_min: Duration::from_millis(self.retry_wait_min_ms),
            wait_max: Duration::from_millis(self.retry_wait_max_ms),
        });

        Ok(ClientConfig::new(base_url, credentials)
            .with_site(self.site.as_str())
            .with_topology(Topology::from_standalone(self.is_standalone))
            .with_transport(transport))
    }
}

// `Env` parses values as TOML scalars, which would turn a password of
// `0123` into the integer 123. Credentials are read verbatim instead.
#[derive(Serialize)]
struct RawCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl RawCredentials {
    const KEYS: &'static [&'static str] = &["username", "password", "api_key"];

    fn from_env() -> Self {
        let var = |key: &str| std::env::var(format!("{ENV_PREFIX}{}", key.to_uppercase())).ok();
        Self {
            username: var("username"),
            password: var("password"),
            api_key: var("api_key"),
        }
    }
}

fn non_empty_secret(secret: Option<&SecretString>) -> Option<&str> {
    secret.map(ExposeSecret::expose_secret).filter(|s| !s.is_empty())
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unifi-network", "unifi-network").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("unifi-network");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}
