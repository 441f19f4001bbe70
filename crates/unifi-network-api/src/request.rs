use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

use crate::error::Error;
use crate::route::Dialect;

/// One HTTP call against the controller, built fresh per operation.
///
/// The body is serialized at construction so serialization failures
/// surface before anything touches the network, and so the bytes can be
/// replayed across transport retries.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    dialect: Dialect,
    endpoint: String,
    body: Option<Bytes>,
}

impl RequestDescriptor {
    pub fn new(method: Method, dialect: Dialect, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            dialect,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    pub fn get(dialect: Dialect, endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, dialect, endpoint)
    }

    pub fn delete(dialect: Dialect, endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, dialect, endpoint)
    }

    /// Attach a JSON body.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(body).map_err(Error::Serialization)?;
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub(crate) fn into_body(self) -> Option<Bytes> {
        self.body
    }
}
