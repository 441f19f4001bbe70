// Wireless networks (`wlanconf`, legacy REST) and AP groups (`apgroups`, v2).

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::skip_serializing_none;

use crate::crud::Resource;
use crate::error::Error;
use crate::route::Dialect;

/// A wireless network (SSID).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wlan {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub enabled: Option<bool>,
    /// `open`, `wpapsk`, `wpaeap`, ...
    pub security: Option<String>,
    pub wpa_mode: Option<String>,
    pub wpa_enc: Option<String>,
    pub wpa3_support: Option<bool>,
    pub wpa3_transition: Option<bool>,
    pub wpa3_enhanced_192: Option<bool>,
    pub wpa3_fast_roaming: Option<bool>,
    pub x_passphrase: Option<String>,
    pub x_iapp_key: Option<String>,
    pub passphrase_autogenerated: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_preshared_keys: Vec<serde_json::Value>,
    pub private_preshared_keys_enabled: Option<bool>,
    pub networkconf_id: Option<String>,
    pub usergroup_id: Option<String>,
    pub is_guest: Option<bool>,
    pub hide_ssid: Option<bool>,
    pub wlan_band: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wlan_bands: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ap_group_ids: Vec<String>,
    pub ap_group_mode: Option<String>,
    pub vlan: Option<u16>,
    pub vlan_enabled: Option<bool>,
    pub mac_filter_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mac_filter_list: Vec<String>,
    pub mac_filter_policy: Option<String>,
    #[serde(rename = "radiusprofile_id")]
    pub radius_profile_id: Option<String>,
    pub radius_das_enabled: Option<bool>,
    pub radius_mac_auth_enabled: Option<bool>,
    pub radius_macacl_format: Option<String>,
    pub schedule_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule_with_duration: Vec<serde_json::Value>,
    pub setting_preference: Option<String>,
    pub minrate_ng_enabled: Option<bool>,
    pub minrate_ng_data_rate_kbps: Option<u32>,
    pub minrate_ng_advertising_rates: Option<bool>,
    pub minrate_na_enabled: Option<bool>,
    pub minrate_na_data_rate_kbps: Option<u32>,
    pub minrate_na_advertising_rates: Option<bool>,
    pub minrate_setting_preference: Option<String>,
    pub no2ghz_oui: Option<bool>,
    pub no_ipv6_ndp: Option<bool>,
    #[serde(rename = "optimize_iot_wifi_connectivity")]
    pub optimize_iot_wifi_conn: Option<bool>,
    pub pmf_mode: Option<String>,
    #[serde(rename = "bcastenhance_enabled")]
    pub bcast_enhance_enabled: Option<bool>,
    #[serde(rename = "mcastenhance_enabled")]
    pub mcast_enhance_enabled: Option<bool>,
    pub group_rekey: Option<u32>,
    pub dtim_mode: Option<String>,
    pub dtim_na: Option<u32>,
    pub dtim_ng: Option<u32>,
    pub dtim_6e: Option<u32>,
    pub uapsd_enabled: Option<bool>,
    pub fast_roaming_enabled: Option<bool>,
    pub proxy_arp: Option<bool>,
    pub bss_transition: Option<bool>,
    pub l2_isolation: Option<bool>,
    pub iapp_enabled: Option<bool>,
}

impl Resource for Wlan {
    const ENDPOINT: &'static str = "wlanconf";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A group of access points that WLANs can be pinned to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApGroup {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub attr_hidden_id: Option<String>,
    pub attr_no_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_macs: Vec<String>,
    #[serde(rename = "for_wlanconf")]
    pub for_wlan_conf: Option<bool>,
}

impl Resource for ApGroup {
    const ENDPOINT: &'static str = "apgroups";
    const DIALECT: Dialect = Dialect::V2;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    /// The v2 endpoint accepts exactly these three fields and requires
    /// `device_macs` to be present, even when empty.
    fn request_body(&self, _id: Option<&str>) -> Result<serde_json::Value, Error> {
        Ok(json!({
            "name": self.name,
            "device_macs": self.device_macs,
            "for_wlanconf": self.for_wlan_conf.unwrap_or(false),
        }))
    }
}
