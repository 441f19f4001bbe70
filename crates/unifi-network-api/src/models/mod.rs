// Controller configuration records
//
// One file per feature area. Every record implements `Resource`; the ones
// whose endpoints need a hand-shaped body override `request_body`.

mod dns;
mod firewall;
mod network;
mod radius;
mod routing;
mod switching;
mod traffic;
mod users;
mod wifi;

pub use dns::StaticDns;
pub use firewall::{FirewallGroup, FirewallRule, PortForward};
pub use network::{
    Network, NetworkAccess, NetworkDhcp, NetworkIpv6, NetworkMulticast, NetworkRouting,
    NetworkVlan, NetworkWan, WanProviderCapabilities,
};
pub use radius::{RadiusProfile, RadiusServer};
pub use routing::StaticRoute;
pub use switching::{PortProfile, QosProfile};
pub use traffic::{
    ALL_CLIENTS, PolicySchedule, TrafficBandwidth, TrafficDomain, TrafficRule, TrafficRuleTarget,
};
pub use users::{User, UserGroup};
pub use wifi::{ApGroup, Wlan};
