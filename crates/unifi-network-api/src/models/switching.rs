// Switch port profiles (`portconf`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::crud::Resource;

/// Quality of Service settings attached to a port profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QosProfile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qos_policies: Vec<serde_json::Value>,
    pub qos_profile_mode: Option<String>,
}

/// A switch port profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortProfile {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// `all`, `native`, `customize` or `disabled`.
    pub forward: Option<String>,
    pub native_networkconf_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tagged_networkconf_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_networkconf_ids: Vec<String>,
    pub voice_networkconf_id: Option<String>,
    pub autoneg: Option<bool>,
    pub dot1x_ctrl: Option<String>,
    pub dot1x_idle_timeout: Option<u32>,
    pub egress_rate_limit_kbps: Option<u32>,
    #[serde(rename = "egress_rate_limit_kbps_enabled")]
    pub egress_rate_limit_enabled: Option<bool>,
    pub full_duplex: Option<bool>,
    pub isolation: Option<bool>,
    pub lldpmed_enabled: Option<bool>,
    pub lldpmed_notify_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multicast_router_networkconf_ids: Vec<String>,
    pub op_mode: Option<String>,
    pub poe_mode: Option<String>,
    pub port_keepalive_enabled: Option<bool>,
    pub port_security_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub port_security_mac_address: Vec<String>,
    pub qos_profile: Option<QosProfile>,
    pub setting_preference: Option<String>,
    pub speed: Option<u32>,
    pub stormctrl_bcast_enabled: Option<bool>,
    pub stormctrl_bcast_rate: Option<u32>,
    pub stormctrl_mcast_enabled: Option<bool>,
    pub stormctrl_mcast_rate: Option<u32>,
    pub stormctrl_ucast_enabled: Option<bool>,
    pub stormctrl_ucast_rate: Option<u32>,
    pub stp_port_mode: Option<bool>,
    pub tagged_vlan_mgmt: Option<String>,
}

impl Resource for PortProfile {
    const ENDPOINT: &'static str = "portconf";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
