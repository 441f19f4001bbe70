// Session and credential state
//
// Owns the credential material and the only shared mutable state in the
// client: the cached CSRF token and the authenticated flag. Both live
// behind one `RwLock` so header construction can read concurrently while
// login/logout take the exclusive side. The lock is never held across
// an `.await`.

use std::sync::{PoisonError, RwLock};

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::Error;

/// Header carrying a static API key (all methods).
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Header carrying the anti-forgery token (mutating methods, password mode).
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");

/// Credentials for authenticating with a UniFi controller.
///
/// Each variant carries the secret material needed for its auth flow.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Static API key sent as `X-API-KEY`. Bypasses interactive login.
    /// Generated at: Network > Settings > Control Plane > Integrations.
    ApiKey { key: SecretString },

    /// Username/password login with a cookie session and CSRF token.
    Password {
        username: String,
        password: SecretString,
    },
}

impl Credentials {
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: SecretString::from(key.into()),
        }
    }

    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    csrf_token: Option<HeaderValue>,
    authenticated: bool,
}

/// Authentication state shared by every request on a client.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    /// Pre-encoded `X-API-KEY` value; `Some` iff in API-key mode.
    api_key: Option<HeaderValue>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Create a session. API keys are validated as header values up front.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        let api_key = match &credentials {
            Credentials::ApiKey { key } => {
                let mut value = HeaderValue::from_str(key.expose_secret()).map_err(|e| {
                    Error::InvalidHeader {
                        name: "X-API-KEY",
                        message: e.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Some(value)
            }
            Credentials::Password { .. } => None,
        };

        Ok(Self {
            credentials,
            api_key,
            state: RwLock::new(SessionState::default()),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// `true` when a static API key is in use.
    pub fn is_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// API-key sessions are always authenticated; password sessions after
    /// a successful login.
    pub fn is_authenticated(&self) -> bool {
        self.is_api_key() || self.read(|s| s.authenticated)
    }

    /// The cached CSRF token, if one was harvested.
    pub fn csrf_token(&self) -> Option<String> {
        self.read(|s| {
            s.csrf_token
                .as_ref()
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        })
    }

    /// Mark the session authenticated and store the harvested token.
    /// An empty token is stored as absent.
    pub(crate) fn establish(&self, token: Option<HeaderValue>) {
        let token = token.filter(|v| !v.is_empty()).map(|mut v| {
            v.set_sensitive(true);
            v
        });
        debug!(has_csrf = token.is_some(), "session established");
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.csrf_token = token;
        state.authenticated = true;
    }

    /// Forget the token and the authenticated flag.
    pub(crate) fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = SessionState::default();
    }

    /// Auth headers for a request with the given method.
    ///
    /// API-key mode always yields the key header and never a CSRF header.
    /// Password mode yields the CSRF header only for POST/PUT/DELETE and
    /// only when a token is cached. Missing tokens are not an error here;
    /// the controller rejects the mutation and that surfaces normally.
    pub fn headers_for(&self, method: &Method) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(key) = &self.api_key {
            headers.insert(API_KEY_HEADER, key.clone());
            return headers;
        }

        if requires_csrf(method) {
            if let Some(token) = self.read(|s| s.csrf_token.clone()) {
                headers.insert(CSRF_HEADER, token);
            }
        }

        headers
    }

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

/// Methods the controller protects with the CSRF token.
pub fn requires_csrf(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::DELETE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn password_session() -> Session {
        Session::new(Credentials::password("admin", "hunter2")).unwrap()
    }

    #[test]
    fn api_key_mode_never_emits_csrf() {
        let session = Session::new(Credentials::api_key("k-123")).unwrap();
        session.establish(Some(HeaderValue::from_static("tok")));

        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let headers = session.headers_for(&method);
            assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "k-123");
            assert!(headers.get(CSRF_HEADER).is_none(), "{method} got a CSRF header");
        }
    }

    #[test]
    fn password_mode_csrf_only_on_mutations() {
        let session = password_session();
        session.establish(Some(HeaderValue::from_static("tok")));

        assert!(session.headers_for(&Method::GET).is_empty());
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let headers = session.headers_for(&method);
            assert_eq!(headers.get(CSRF_HEADER).unwrap(), "tok");
            assert!(headers.get(API_KEY_HEADER).is_none());
        }
    }

    #[test]
    fn password_mode_without_token_sends_nothing() {
        let session = password_session();
        assert!(session.headers_for(&Method::POST).is_empty());

        session.establish(Some(HeaderValue::from_static("")));
        assert!(session.headers_for(&Method::POST).is_empty());
        assert!(session.is_authenticated());
        assert_eq!(session.csrf_token(), None);
    }

    #[test]
    fn authenticated_flag_follows_login_and_logout() {
        let session = password_session();
        assert!(!session.is_authenticated());

        session.establish(Some(HeaderValue::from_static("tok")));
        assert!(session.is_authenticated());
        assert_eq!(session.csrf_token().as_deref(), Some("tok"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.csrf_token(), None);
    }

    #[test]
    fn api_key_with_control_bytes_is_rejected() {
        let err = Session::new(Credentials::api_key("bad\nkey")).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { name: "X-API-KEY", .. }));
    }
}
