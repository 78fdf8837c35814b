use serde::{Deserialize, Serialize};

/// Cluster host as returned by the ListHosts RPC
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Host {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub cluster_id: String,
    #[prost(string, tag = "3")]
    pub zone_id: String,
    #[prost(enumeration = "Role", tag = "4")]
    pub role: i32,
    #[prost(enumeration = "Health", tag = "5")]
    pub health: i32,
    #[prost(string, tag = "6")]
    pub subnet_id: String,
    #[prost(bool, tag = "7")]
    pub assign_public_ip: bool,
    #[prost(string, tag = "8")]
    pub replication_source: String,
    #[prost(int64, tag = "9")]
    pub priority: i64,
}

impl Host {
    pub fn new(name: &str, cluster_id: &str) -> Self {
        Self {
            name: name.to_string(),
            cluster_id: cluster_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.set_role(role);
        self
    }

    pub fn with_health(mut self, health: Health) -> Self {
        self.set_health(health);
        self
    }
}

/// Role of the host in the cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Role {
    RoleUnknown = 0,
    Master = 1,
    Replica = 2,
}

/// Aggregated health of the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Health {
    HealthUnknown = 0,
    Alive = 1,
    Dead = 2,
    Degraded = 3,
    Readonly = 4,
}

// --- RPC Messages ---

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListClusterHostsRequest {
    /// Cluster to list hosts for; empty lists every host the service knows
    #[prost(string, tag = "1")]
    pub cluster_id: String,
    /// Maximum number of hosts in one page, 0 lets the server decide
    #[prost(int64, tag = "2")]
    pub page_size: i64,
    /// Continuation token from the previous response, empty for the first page
    #[prost(string, tag = "3")]
    pub page_token: String,
}

impl ListClusterHostsRequest {
    pub fn new(cluster_id: &str) -> Self {
        Self {
            cluster_id: cluster_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListClusterHostsResponse {
    #[prost(message, repeated, tag = "1")]
    pub hosts: Vec<Host>,
    /// Empty when there are no further pages
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

impl ListClusterHostsResponse {
    pub fn page(hosts: Vec<Host>, next_page_token: &str) -> Self {
        Self {
            hosts,
            next_page_token: next_page_token.to_string(),
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_json_fixture() {
        let json = r#"{"name": "rc1a-1.db", "clusterId": "c1", "role": 1, "health": 1}"#;

        let host: Host = serde_json::from_str(json).unwrap();

        assert_eq!(host.name, "rc1a-1.db");
        assert_eq!(host.cluster_id, "c1");
        assert_eq!(host.role(), Role::Master);
        assert_eq!(host.health(), Health::Alive);
        assert!(host.zone_id.is_empty());
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_default() {
        let host = Host {
            role: 42,
            ..Host::new("h", "c")
        };

        assert_eq!(host.role(), Role::RoleUnknown);
    }

    #[test]
    fn test_last_page_detection() {
        assert!(ListClusterHostsResponse::page(vec![], "").is_last_page());
        assert!(!ListClusterHostsResponse::page(vec![], "2").is_last_page());
    }
}
