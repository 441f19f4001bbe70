// Path routing for the controller's URL conventions.
//
// Pure functions of (dialect, site, topology, endpoint). Nothing here
// touches the network or the session.

use std::borrow::Cow;

/// How the controller is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Behind the UniFi OS management proxy (UDM, UCG, Cloud Key Gen2+).
    /// Every routed path gains a `/proxy/network` prefix.
    #[default]
    Proxied,
    /// Standalone Network Application, no prefix.
    Standalone,
}

impl Topology {
    pub fn from_standalone(standalone: bool) -> Self {
        if standalone {
            Self::Standalone
        } else {
            Self::Proxied
        }
    }

    /// The path prefix applied to every routed path.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Proxied => "/proxy/network",
            Self::Standalone => "",
        }
    }
}

/// URL and response convention of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Legacy REST CRUD: `/api/s/{site}/rest/{endpoint}`, array-wrapped
    /// responses inside the `{meta, data}` envelope.
    Rest,
    /// v2 API: `/v2/api/site/{site}/{endpoint}`, bare single objects.
    V2,
    /// Legacy command managers: `/api/s/{site}/cmd/{endpoint}` (e.g. `stamgr`).
    Command,
}

/// Builds request paths for a single site and topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    site: String,
    topology: Topology,
}

impl Router {
    pub fn new(site: impl Into<String>, topology: Topology) -> Self {
        Self {
            site: site.into(),
            topology,
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    fn escaped_site(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.site)
    }

    /// Route a logical endpoint in the given dialect.
    ///
    /// ```
    /// use unifi_network_api::{Dialect, Router, Topology};
    ///
    /// let router = Router::new("default", Topology::Proxied);
    /// assert_eq!(
    ///     router.route(Dialect::Rest, "networkconf"),
    ///     "/proxy/network/api/s/default/rest/networkconf"
    /// );
    /// ```
    pub fn route(&self, dialect: Dialect, endpoint: &str) -> String {
        let prefix = self.topology.prefix();
        let site = self.escaped_site();
        match dialect {
            Dialect::Rest => format!("{prefix}/api/s/{site}/rest/{endpoint}"),
            Dialect::V2 => format!("{prefix}/v2/api/site/{site}/{endpoint}"),
            Dialect::Command => format!("{prefix}/api/s/{site}/cmd/{endpoint}"),
        }
    }

    /// `GET /api/s/{site}/self`, used only to harvest the CSRF token.
    pub fn session_path(&self) -> String {
        let prefix = self.topology.prefix();
        format!("{prefix}/api/s/{}/self", self.escaped_site())
    }

    /// The UniFi OS login endpoint. Served by the OS itself, never prefixed.
    pub fn login_path() -> &'static str {
        "/api/auth/login"
    }

    /// The UniFi OS logout endpoint. Never prefixed.
    pub fn logout_path() -> &'static str {
        "/api/auth/logout"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DIALECTS: [Dialect; 3] = [Dialect::Rest, Dialect::V2, Dialect::Command];

    #[test]
    fn proxied_prefix_applies_to_every_dialect() {
        let router = Router::new("default", Topology::Proxied);
        assert_eq!(
            router.route(Dialect::Rest, "networkconf"),
            "/proxy/network/api/s/default/rest/networkconf"
        );
        assert_eq!(
            router.route(Dialect::V2, "apgroups"),
            "/proxy/network/v2/api/site/default/apgroups"
        );
        assert_eq!(
            router.route(Dialect::Command, "stamgr"),
            "/proxy/network/api/s/default/cmd/stamgr"
        );
        assert_eq!(router.session_path(), "/proxy/network/api/s/default/self");
    }

    #[test]
    fn standalone_paths_have_no_prefix() {
        let router = Router::new("default", Topology::Standalone);
        assert_eq!(
            router.route(Dialect::Rest, "wlanconf/abc"),
            "/api/s/default/rest/wlanconf/abc"
        );
        assert_eq!(
            router.route(Dialect::V2, "static-dns"),
            "/v2/api/site/default/static-dns"
        );
        assert_eq!(router.session_path(), "/api/s/default/self");
    }

    #[test]
    fn prefix_present_iff_proxied() {
        for topology in [Topology::Proxied, Topology::Standalone] {
            let router = Router::new("default", topology);
            for dialect in DIALECTS {
                let path = router.route(dialect, "x");
                assert_eq!(
                    path.starts_with("/proxy/network/"),
                    topology == Topology::Proxied,
                    "{dialect:?} under {topology:?} produced {path}"
                );
                assert_eq!(path, router.route(dialect, "x"), "routing is not stable");
            }
        }
    }

    #[test]
    fn site_is_percent_escaped() {
        let router = Router::new("my site/1", Topology::Standalone);
        assert_eq!(
            router.route(Dialect::Rest, "usergroup"),
            "/api/s/my%20site%2F1/rest/usergroup"
        );
        assert_eq!(
            router.route(Dialect::V2, "trafficrules"),
            "/v2/api/site/my%20site%2F1/trafficrules"
        );
    }

    #[test]
    fn auth_paths_ignore_topology() {
        assert_eq!(Router::login_path(), "/api/auth/login");
        assert_eq!(Router::logout_path(), "/api/auth/logout");
    }

    #[test]
    fn standalone_flag_maps_to_topology() {
        assert_eq!(Topology::from_standalone(true), Topology::Standalone);
        assert_eq!(Topology::from_standalone(false), Topology::Proxied);
        assert_eq!(Topology::default(), Topology::Proxied);
    }
}
