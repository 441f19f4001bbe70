// unifi-network-api: Async client for the UniFi Network controller (legacy REST + v2)

pub mod auth;
pub mod client;
pub mod crud;
pub mod envelope;
pub mod error;
pub mod models;
pub mod request;
pub mod route;
pub mod transport;

pub use auth::{Credentials, Session};
pub use client::{ClientConfig, NetworkClient};
pub use crud::Resource;
pub use error::Error;
pub use request::RequestDescriptor;
pub use route::{Dialect, Router, Topology};
pub use transport::{RetryPolicy, TlsMode, TransportConfig};
