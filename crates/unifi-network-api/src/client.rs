// Request/response engine
//
// `NetworkClient` ties the pieces together: the router turns a
// `RequestDescriptor` into a path, the session contributes auth headers,
// the transport executes with retry, and the status is classified before
// the body is unwrapped into the caller's type.

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::auth::{CSRF_HEADER, Credentials, Session};
use crate::envelope;
use crate::error::Error;
use crate::request::RequestDescriptor;
use crate::route::{Router, Topology};
use crate::transport::{Transport, TransportConfig};

const APPLICATION_JSON: &str = "application/json";

/// Everything the client needs at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Controller root, e.g. `https://192.168.1.1` or `https://controller:8443`.
    pub base_url: Url,
    pub site: String,
    pub topology: Topology,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Config for the `default` site behind the UniFi OS proxy.
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            site: "default".into(),
            topology: Topology::default(),
            credentials,
            transport: TransportConfig::default(),
        }
    }

    /// Select a site. An empty string keeps `default`.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        let site = site.into();
        if !site.is_empty() {
            self.site = site;
        }
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

/// Async client for one site of a UniFi Network controller.
///
/// Safe to share across tasks (`Arc<NetworkClient>`); the only mutable
/// state is the session token, guarded inside [`Session`].
#[derive(Debug)]
pub struct NetworkClient {
    transport: Transport,
    base_url: Url,
    router: Router,
    session: Session,
}

impl NetworkClient {
    /// Build the client and authenticate.
    ///
    /// In API-key mode no network call is made. In password mode a login
    /// is performed and a rejected login fails construction with
    /// [`Error::Authentication`].
    pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
        let client = Self::new(config)?;
        client.login().await?;
        Ok(client)
    }

    fn new(config: ClientConfig) -> Result<Self, Error> {
        // Session cookies from login must ride along on later requests.
        let transport_config = if config.transport.cookie_jar.is_some() {
            config.transport
        } else {
            config.transport.with_cookie_jar()
        };

        Ok(Self {
            transport: transport_config.build()?,
            base_url: config.base_url,
            router: Router::new(config.site, config.topology),
            session: Session::new(config.credentials)?,
        })
    }

    pub fn site(&self) -> &str {
        self.router.site()
    }

    pub fn topology(&self) -> Topology {
        self.router.topology()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Log in with username/password and harvest the CSRF token.
    ///
    /// `POST /api/auth/login`, then `GET {prefix}/api/s/{site}/self` purely
    /// for its `X-Csrf-Token` response header. A failed token fetch is not
    /// fatal: the session is still marked authenticated, without a token.
    /// Any login status other than 200 is rejected. No-op in API-key mode.
    pub async fn login(&self) -> Result<(), Error> {
        let Credentials::Password { username, password } = self.session.credentials() else {
            return Ok(());
        };

        let url = self.url(Router::login_path())?;
        debug!("logging in at {url}");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });
        let request = self.transport.http().post(url).json(&body).build()?;
        let resp = self.transport.execute(request).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let token = self.fetch_csrf_token().await;
        self.session.establish(token);

        debug!("login successful");
        Ok(())
    }

    /// End the session. `POST /api/auth/logout`; the cached token and the
    /// authenticated flag are cleared even if the controller errors.
    /// No-op in API-key mode.
    pub async fn logout(&self) -> Result<(), Error> {
        if self.session.is_api_key() {
            return Ok(());
        }

        let url = self.url(Router::logout_path())?;
        debug!("logging out at {url}");

        let request = self
            .transport
            .http()
            .post(url)
            .headers(self.session.headers_for(&Method::POST))
            .build()?;
        let result = self.transport.execute_once(request).await;
        self.session.clear();

        let resp = result?;
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("logout complete");
        Ok(())
    }

    async fn fetch_csrf_token(&self) -> Option<HeaderValue> {
        let url = self.url(&self.router.session_path()).ok()?;
        let request = self.transport.http().get(url).build().ok()?;

        match self.transport.execute_once(request).await {
            Ok(resp) => resp.headers().get(CSRF_HEADER).cloned(),
            Err(e) => {
                debug!(error = %e, "CSRF token fetch failed, continuing without a token");
                None
            }
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── Request execution ────────────────────────────────────────────

    /// Route, authenticate, send and classify a request.
    ///
    /// Any status >= 400 becomes [`Error::Api`] with the response body.
    async fn send(&self, req: RequestDescriptor) -> Result<reqwest::Response, Error> {
        let path = self.router.route(req.dialect(), req.endpoint());
        let url = self.url(&path)?;
        let method = req.method().clone();
        debug!("{method} {url}");

        let mut builder = self
            .transport
            .http()
            .request(method.clone(), url)
            .header(ACCEPT, APPLICATION_JSON)
            .headers(self.session.headers_for(&method));

        if let Some(body) = req.into_body() {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let resp = self.transport.execute(builder.build()?).await?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, "controller rejected request");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    /// Execute a request and return the raw success body.
    pub async fn execute(&self, req: RequestDescriptor) -> Result<Bytes, Error> {
        let resp = self.send(req).await?;
        Ok(resp.bytes().await?)
    }

    /// Execute a request and decode the body (envelope-first) into `T`.
    pub async fn request<T: DeserializeOwned>(&self, req: RequestDescriptor) -> Result<T, Error> {
        let body = self.execute(req).await?;
        envelope::decode(&body)
    }

    /// Execute a request and decode an array body, treating an empty body,
    /// `null`, or a missing `data` field as no elements.
    pub async fn request_list<T: DeserializeOwned>(
        &self,
        req: RequestDescriptor,
    ) -> Result<Vec<T>, Error> {
        let body = self.execute(req).await?;
        envelope::decode_list(&body)
    }

    /// Execute a request without processing the response body.
    pub async fn request_discard(&self, req: RequestDescriptor) -> Result<(), Error> {
        self.send(req).await.map(drop)
    }
}
