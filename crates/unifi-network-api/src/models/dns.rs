// Static DNS records (`static-dns`, v2).

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::skip_serializing_none;

use crate::crud::Resource;
use crate::error::Error;
use crate::route::Dialect;

const DEFAULT_RECORD_TYPE: &str = "A";

/// A static DNS entry served by the gateway's resolver.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticDns {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// The hostname being answered for.
    pub key: Option<String>,
    /// The answer (address, target host, text).
    pub value: Option<String>,
    pub record_type: Option<String>,
    pub enabled: Option<bool>,
    pub ttl: Option<u32>,
    pub port: Option<u16>,
    pub priority: Option<u32>,
    pub weight: Option<u32>,
}

impl StaticDns {
    /// Whether the record type carries port/priority/weight.
    fn has_service_fields(&self) -> bool {
        matches!(self.record_type.as_deref(), Some("SRV" | "MX"))
    }
}

impl Resource for StaticDns {
    const ENDPOINT: &'static str = "static-dns";
    const DIALECT: Dialect = Dialect::V2;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The v2 endpoint expects every numeric field present. Unset values
    /// go out as `0`, and the SRV/MX fields are zeroed for other types.
    fn request_body(&self, id: Option<&str>) -> Result<serde_json::Value, Error> {
        let record_type = self
            .record_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_RECORD_TYPE);
        let service = self.has_service_fields();

        let mut body = json!({
            "key": self.key.as_deref().unwrap_or_default(),
            "value": self.value.as_deref().unwrap_or_default(),
            "record_type": record_type,
            "enabled": self.enabled.unwrap_or(true),
            "ttl": self.ttl.filter(|ttl| *ttl > 0).unwrap_or(0),
            "port": self.port.filter(|_| service).unwrap_or(0),
            "priority": self.priority.filter(|_| service).unwrap_or(0),
            "weight": self.weight.filter(|_| service).unwrap_or(0),
        });
        if let Some(id) = id {
            body["_id"] = id.into();
        }
        Ok(body)
    }
}
