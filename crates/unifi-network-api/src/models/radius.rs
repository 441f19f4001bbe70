use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::crud::Resource;

/// A RADIUS profile referenced by WPA-Enterprise WLANs and 802.1X ports.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiusProfile {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub use_usg_acct_server: Option<bool>,
    pub use_usg_auth_server: Option<bool>,
    pub vlan_enabled: Option<bool>,
    pub vlan_wlan_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acct_servers: Vec<RadiusServer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_servers: Vec<RadiusServer>,
    pub interim_update_enabled: Option<bool>,
    /// Seconds.
    pub interim_update_interval: Option<u32>,
    pub attr_hidden_id: Option<String>,
    pub attr_no_delete: Option<bool>,
    pub attr_no_edit: Option<bool>,
}

impl Resource for RadiusProfile {
    const ENDPOINT: &'static str = "radiusprofile";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiusServer {
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub x_secret: Option<String>,
}
