// Traffic management rules (`trafficrules`, v2).

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::skip_serializing_none;

use crate::crud::Resource;
use crate::error::Error;
use crate::route::Dialect;

/// Target type meaning "every client on the site".
pub const ALL_CLIENTS: &str = "ALL_CLIENTS";

/// A traffic rule: block, allow, or rate-limit matched traffic.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficRule {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub enabled: Option<bool>,
    /// `BLOCK`, `ALLOW`, `SPEED_LIMIT`, ...
    pub action: Option<String>,
    /// `INTERNET`, `DOMAIN`, `APP`, `IP`, `REGION`, ...
    pub matching_target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_devices: Vec<TrafficRuleTarget>,
    pub schedule: Option<PolicySchedule>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub app_category_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub app_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<TrafficDomain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    pub network_id: Option<String>,
    pub bandwidth_limit: Option<TrafficBandwidth>,
}

impl Resource for TrafficRule {
    const ENDPOINT: &'static str = "trafficrules";
    const DIALECT: Dialect = Dialect::V2;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    /// A rule without targets is rejected, so an empty list means all clients.
    fn request_body(&self, _id: Option<&str>) -> Result<serde_json::Value, Error> {
        let mut body = serde_json::to_value(self).map_err(Error::Serialization)?;
        body["enabled"] = self.enabled.unwrap_or(true).into();
        if self.target_devices.is_empty() {
            body["target_devices"] = json!([{ "type": ALL_CLIENTS }]);
        }
        Ok(body)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficRuleTarget {
    pub client_mac: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub network_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficBandwidth {
    pub download_limit_kbps: Option<u32>,
    pub upload_limit_kbps: Option<u32>,
    pub enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficDomain {
    #[serde(default)]
    pub domain: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
}

/// When a rule is active.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySchedule {
    /// `ALWAYS`, `EVERY_DAY`, `EVERY_WEEK`, `CUSTOM`.
    pub mode: Option<String>,
    pub time_range_start: Option<String>,
    pub time_range_end: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<String>,
}
