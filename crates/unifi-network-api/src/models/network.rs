// Network (`networkconf`) records.
//
// The controller returns one flat object per network; the field groups
// below are flattened back into it on the wire.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::crud::Resource;

/// A UniFi network / VLAN configuration.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// `corporate`, `guest`, `wan`, `vlan-only`, `remote-user-vpn`, ...
    pub purpose: Option<String>,
    pub enabled: Option<bool>,
    pub setting_preference: Option<String>,
    pub gateway_type: Option<String>,
    pub gateway_device: Option<String>,
    pub auto_scale_enabled: Option<bool>,
    pub attr_hidden_id: Option<String>,
    pub attr_no_delete: Option<bool>,
    #[serde(flatten)]
    pub vlan: NetworkVlan,
    #[serde(flatten)]
    pub dhcp: NetworkDhcp,
    #[serde(flatten)]
    pub wan: NetworkWan,
    #[serde(flatten)]
    pub ipv6: NetworkIpv6,
    #[serde(flatten)]
    pub multicast: NetworkMulticast,
    #[serde(flatten)]
    pub access: NetworkAccess,
    #[serde(flatten)]
    pub routing: NetworkRouting,
}

impl Resource for Network {
    const ENDPOINT: &'static str = "networkconf";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkVlan {
    pub vlan: Option<u16>,
    pub vlan_enabled: Option<bool>,
    pub ip_subnet: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDhcp {
    pub dhcpd_enabled: Option<bool>,
    pub dhcpd_start: Option<String>,
    pub dhcpd_stop: Option<String>,
    pub dhcpd_leasetime: Option<u32>,
    pub dhcp_relay_enabled: Option<bool>,
    pub dhcpd_time_offset_enabled: Option<bool>,
    pub dhcpd_unifi_controller: Option<String>,
    pub dhcpd_wpad_url: Option<String>,
    #[serde(rename = "dhcpguard_enabled")]
    pub dhcp_guarding_enabled: Option<bool>,
    pub dhcpd_gateway_enabled: Option<bool>,
    pub dhcpd_gateway: Option<String>,
    pub dhcpd_dns_enabled: Option<bool>,
    pub dhcpd_dns_1: Option<String>,
    pub dhcpd_dns_2: Option<String>,
    pub dhcpd_dns_3: Option<String>,
    pub dhcpd_dns_4: Option<String>,
    pub dhcpd_boot_enabled: Option<bool>,
    pub dhcpd_boot_server: Option<String>,
    pub dhcpd_boot_filename: Option<String>,
    pub dhcpd_tftp_server: Option<String>,
    pub dhcpd_ntp_enabled: Option<bool>,
    pub dhcpd_ntp_1: Option<String>,
    pub dhcpd_ntp_2: Option<String>,
}

/// ISP bandwidth capabilities for a WAN network.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WanProviderCapabilities {
    pub download_kilobits_per_second: Option<u32>,
    pub upload_kilobits_per_second: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkWan {
    pub wan: Option<String>,
    pub wan_type: Option<String>,
    pub wan_ip: Option<String>,
    pub wan_netmask: Option<String>,
    pub wan_gateway: Option<String>,
    pub wan_networkgroup: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wan_ip_aliases: Vec<String>,
    pub wan_dns_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wan_dhcp_options: Vec<serde_json::Value>,
    pub wan_dslite_remote_host: Option<String>,
    pub wan_dslite_remote_host_auto: Option<bool>,
    pub wan_provider_capabilities: Option<WanProviderCapabilities>,
    pub report_wan_event: Option<bool>,
    pub wan_type_v6: Option<String>,
    pub wan_ipv6_dns1: Option<String>,
    pub wan_ipv6_dns2: Option<String>,
    pub wan_ipv6_dns_preference: Option<String>,
    pub wan_dhcpv6_cos: Option<u8>,
    pub wan_dhcpv6_pd_size_auto: Option<bool>,
    pub wan_smartq_enabled: Option<bool>,
    pub wan_egress_qos: Option<String>,
    pub wan_dhcp_cos: Option<u8>,
    pub wan_failover_priority: Option<u32>,
    pub wan_load_balance_type: Option<String>,
    pub wan_load_balance_weight: Option<u32>,
    pub wan_vlan_enabled: Option<bool>,
    pub wan_vlan: Option<u16>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkIpv6 {
    pub ipv6_setting_preference: Option<String>,
    pub ipv6_wan_delegation_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMulticast {
    pub igmp_snooping: Option<bool>,
    pub igmp_proxy_upstream: Option<bool>,
    pub igmp_proxy_for: Option<String>,
    pub domain_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAccess {
    pub internet_access_enabled: Option<bool>,
    pub intra_network_access_enabled: Option<bool>,
    pub is_nat: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nat_outbound_ip_addresses: Vec<String>,
    pub mac_override_enabled: Option<bool>,
    pub mdns_enabled: Option<bool>,
    pub lte_lan_enabled: Option<bool>,
    pub upnp_lan_enabled: Option<bool>,
    pub pptpc_server_enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkRouting {
    pub networkgroup: Option<String>,
    pub routing_table_id: Option<u32>,
    pub single_network_lan: Option<String>,
    pub firewall_zone_id: Option<String>,
}
