// Static routes (`routing`, legacy REST).

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::skip_serializing_none;

use crate::crud::Resource;
use crate::error::Error;

const ROUTE_TYPE: &str = "static-route";
const NEXTHOP_ROUTE: &str = "nexthop-route";
const DEFAULT_DISTANCE: u32 = 1;

/// A static next-hop route.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub enabled: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub gateway_type: Option<String>,
    pub gateway_device: Option<String>,
    #[serde(rename = "static-route_network")]
    pub network: Option<String>,
    #[serde(rename = "static-route_nexthop")]
    pub nexthop: Option<String>,
    #[serde(rename = "static-route_distance")]
    pub distance: Option<u32>,
    #[serde(rename = "static-route_interface")]
    pub interface: Option<String>,
    #[serde(rename = "static-route_type")]
    pub route_type: Option<String>,
}

impl Resource for StaticRoute {
    const ENDPOINT: &'static str = "routing";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    /// Only next-hop static routes are managed. The controller rejects
    /// the record unless both type fields are set, so they are forced.
    fn request_body(&self, id: Option<&str>) -> Result<serde_json::Value, Error> {
        let mut body = json!({
            "name": self.name,
            "type": ROUTE_TYPE,
            "enabled": self.enabled.unwrap_or(true),
            "static-route_network": self.network.as_deref().unwrap_or_default(),
            "static-route_nexthop": self.nexthop.as_deref().unwrap_or_default(),
            "static-route_type": NEXTHOP_ROUTE,
            "static-route_distance": self.distance.unwrap_or(DEFAULT_DISTANCE),
        });
        if let Some(id) = id {
            body["_id"] = id.into();
        }
        Ok(body)
    }
}
