// Firewall rules, firewall groups and port forwards (legacy REST).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::crud::Resource;

/// A legacy firewall rule (`firewallrule`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub enabled: Option<bool>,
    pub rule_index: Option<u32>,
    /// `WAN_IN`, `WAN_OUT`, `LAN_IN`, `GUEST_IN`, ...
    pub ruleset: Option<String>,
    /// `accept`, `drop` or `reject`.
    pub action: Option<String>,
    pub protocol: Option<String>,
    pub protocol_match_excepted: Option<bool>,
    pub protocol_v6: Option<String>,
    pub icmp_typename: Option<String>,
    pub icmp_v6_typename: Option<String>,
    pub logging: Option<bool>,
    pub state_established: Option<bool>,
    pub state_invalid: Option<bool>,
    pub state_new: Option<bool>,
    pub state_related: Option<bool>,
    pub ipsec: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub src_firewallgroup_ids: Vec<String>,
    pub src_mac_address: Option<String>,
    pub src_address: Option<String>,
    pub src_networkconf_id: Option<String>,
    pub src_networkconf_type: Option<String>,
    pub src_port: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dst_firewallgroup_ids: Vec<String>,
    pub dst_address: Option<String>,
    pub dst_networkconf_id: Option<String>,
    pub dst_networkconf_type: Option<String>,
    pub dst_port: Option<String>,
}

impl Resource for FirewallRule {
    const ENDPOINT: &'static str = "firewallrule";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// An address, IPv6 address or port group (`firewallgroup`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallGroup {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// `address-group`, `ipv6-address-group` or `port-group`.
    pub group_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_members: Vec<String>,
}

impl Resource for FirewallGroup {
    const ENDPOINT: &'static str = "firewallgroup";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A port forwarding rule (`portforward`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortForward {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub enabled: Option<bool>,
    pub pfwd_interface: Option<String>,
    pub proto: Option<String>,
    pub src: Option<String>,
    pub dst_port: Option<String>,
    pub fwd: Option<String>,
    pub fwd_port: Option<String>,
    pub log: Option<bool>,
    pub destination_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_ips: Vec<String>,
    pub src_limiting_enabled: Option<bool>,
}

impl Resource for PortForward {
    const ENDPOINT: &'static str = "portforward";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
