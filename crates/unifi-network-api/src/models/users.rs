// Client records (`user`) and bandwidth groups (`usergroup`).

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::skip_serializing_none;

use crate::crud::Resource;
use crate::error::Error;
use crate::request::RequestDescriptor;
use crate::route::Dialect;

/// A known client device (legacy REST `user`).
///
/// Deleting a client is not a REST DELETE: the controller "forgets" it
/// through the station manager, keyed by MAC address.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub mac: String,
    pub name: Option<String>,
    pub note: Option<String>,
    pub noted: Option<bool>,
    #[serde(rename = "use_fixedip")]
    pub use_fixed_ip: Option<bool>,
    pub fixed_ip: Option<String>,
    pub network_id: Option<String>,
    pub usergroup_id: Option<String>,
    pub blocked: Option<bool>,
    pub is_wired: Option<bool>,
    pub is_guest: Option<bool>,
    pub oui: Option<String>,
    pub first_seen: Option<i64>,
    pub last_seen: Option<i64>,
}

impl Resource for User {
    const ENDPOINT: &'static str = "user";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `POST cmd/stamgr {"cmd": "forget-sta", "macs": [mac]}`.
    /// The identifier here is the client's MAC address.
    fn delete_request(mac: &str) -> Result<RequestDescriptor, Error> {
        RequestDescriptor::new(Method::POST, Dialect::Command, "stamgr").with_json(&json!({
            "cmd": "forget-sta",
            "macs": [mac],
        }))
    }
}

/// A bandwidth-limit group clients can be assigned to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub site_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Kbps; `-1` means unlimited.
    pub qos_rate_max_down: Option<i32>,
    /// Kbps; `-1` means unlimited.
    pub qos_rate_max_up: Option<i32>,
    pub attr_hidden_id: Option<String>,
    pub attr_no_delete: Option<bool>,
}

impl Resource for UserGroup {
    const ENDPOINT: &'static str = "usergroup";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn forgetting_a_client_goes_through_stamgr() {
        let req = User::delete_request("aa:bb:cc:dd:ee:ff").unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.dialect(), Dialect::Command);
        assert_eq!(req.endpoint(), "stamgr");

        let body: serde_json::Value = serde_json::from_slice(req.body().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "cmd": "forget-sta", "macs": ["aa:bb:cc:dd:ee:ff"] })
        );
    }

    #[test]
    fn user_groups_use_the_default_rest_delete() {
        let req = UserGroup::delete_request("g1").unwrap();
        assert_eq!(req.method(), &Method::DELETE);
        assert_eq!(req.dialect(), Dialect::Rest);
        assert_eq!(req.endpoint(), "usergroup/g1");
        assert!(req.body().is_none());
    }
}
