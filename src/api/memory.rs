use anyhow::{bail, Context, Result};
use log::info;
use std::cell::Cell;
use std::fs;
use std::path::Path;

use super::ListHosts;
use crate::domain::{Host, ListClusterHostsRequest, ListClusterHostsResponse};
use crate::errors::load_context;

const SERVER_DEFAULT_PAGE_SIZE: i64 = 100;
const SERVER_MAX_PAGE_SIZE: i64 = 1000;

/// Cluster service backed by a fixed list of hosts.
///
/// Page tokens are decimal offsets into the (filtered) host list.
pub struct InMemoryClusterService {
    hosts: Vec<Host>,
    calls: Cell<usize>,
}

impl InMemoryClusterService {
    pub fn new(hosts: Vec<Host>) -> Self {
        Self {
            hosts,
            calls: Cell::new(0),
        }
    }

    /// Load hosts from a JSON array file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).with_context(|| load_context(path))?;
        let hosts: Vec<Host> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse hosts JSON from {:?}", path))?;

        info!("Loaded {} hosts from {}", hosts.len(), path.display());
        Ok(Self::new(hosts))
    }

    /// Number of ListHosts calls served so far
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    // --- Helper Methods ---

    fn matching_hosts(&self, cluster_id: &str) -> Result<Vec<&Host>> {
        if cluster_id.is_empty() {
            return Ok(self.hosts.iter().collect());
        }

        let hosts: Vec<&Host> = self.hosts.iter().filter(|h| h.cluster_id == cluster_id).collect();
        if hosts.is_empty() {
            bail!("Cluster {:?} not found", cluster_id);
        }
        Ok(hosts)
    }

    fn parse_offset(token: &str, total: usize) -> Result<usize> {
        if token.is_empty() {
            return Ok(0);
        }

        let offset: usize = token
            .parse()
            .with_context(|| format!("Invalid page token: {:?}", token))?;
        if offset > total {
            bail!("Page token {:?} is out of range", token);
        }
        Ok(offset)
    }

    fn effective_page_size(requested: i64) -> usize {
        let size = if requested <= 0 {
            SERVER_DEFAULT_PAGE_SIZE
        } else {
            requested.min(SERVER_MAX_PAGE_SIZE)
        };
        // bounded by SERVER_MAX_PAGE_SIZE, always fits
        size as usize
    }
}

impl ListHosts for InMemoryClusterService {
    fn list_hosts(&self, request: &ListClusterHostsRequest) -> Result<ListClusterHostsResponse> {
        self.calls.set(self.calls.get() + 1);

        let hosts = self.matching_hosts(&request.cluster_id)?;
        let offset = Self::parse_offset(&request.page_token, hosts.len())?;
        let end = (offset + Self::effective_page_size(request.page_size)).min(hosts.len());

        let next_page_token = if end < hosts.len() {
            end.to_string()
        } else {
            String::new()
        };

        Ok(ListClusterHostsResponse {
            hosts: hosts[offset..end].iter().map(|h| (*h).clone()).collect(),
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> InMemoryClusterService {
        let mut hosts = Vec::new();
        for i in 1..=5 {
            hosts.push(Host::new(&format!("a{}", i), "alpha"));
        }
        for i in 1..=3 {
            hosts.push(Host::new(&format!("b{}", i), "beta"));
        }
        InMemoryClusterService::new(hosts)
    }

    fn list(service: &InMemoryClusterService, cluster: &str, size: i64, token: &str) -> ListClusterHostsResponse {
        let request = ListClusterHostsRequest {
            cluster_id: cluster.to_string(),
            page_size: size,
            page_token: token.to_string(),
        };
        service.list_hosts(&request).unwrap()
    }

    #[test]
    fn test_pages_by_offset_token() {
        let service = service();

        let first = list(&service, "alpha", 2, "");
        assert_eq!(first.hosts.len(), 2);
        assert_eq!(first.next_page_token, "2");

        let last = list(&service, "alpha", 2, "4");
        assert_eq!(last.hosts[0].name, "a5");
        assert!(last.is_last_page());
        assert_eq!(service.call_count(), 2);
    }

    #[test]
    fn test_filters_by_cluster() {
        let service = service();

        let all = list(&service, "", 0, "");
        let beta = list(&service, "beta", 0, "");

        assert_eq!(all.hosts.len(), 8);
        assert!(beta.hosts.iter().all(|h| h.cluster_id == "beta"));
        assert_eq!(beta.hosts.len(), 3);
    }

    #[test]
    fn test_unknown_cluster_is_an_error() {
        let service = service();
        let request = ListClusterHostsRequest::new("gamma");

        let err = service.list_hosts(&request).unwrap_err();

        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_bad_tokens_are_rejected() {
        let service = service();
        let mut request = ListClusterHostsRequest::new("alpha");

        request.page_token = "not-a-number".to_string();
        assert!(service.list_hosts(&request).is_err());

        request.page_token = "6".to_string();
        assert!(service.list_hosts(&request).is_err());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let hosts = (0..1500).map(|i| Host::new(&format!("h{}", i), "big")).collect();
        let service = InMemoryClusterService::new(hosts);

        let page = list(&service, "big", 5000, "");
        let default_page = list(&service, "big", 0, "");

        assert_eq!(page.hosts.len(), 1000);
        assert_eq!(page.next_page_token, "1000");
        assert_eq!(default_page.hosts.len(), 100);
    }

    #[test]
    fn test_iterates_whole_cluster() {
        let service = service();
        let mut it = service.hosts_iterator(ListClusterHostsRequest::new("alpha").with_page_size(2));

        let hosts = it.take_all().unwrap();

        let names: Vec<&str> = hosts.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["a1", "a2", "a3", "a4", "a5"]);
        assert_eq!(service.call_count(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("cluster_hosts_memory_test.json");
        fs::write(&path, r#"[{"name": "h1", "clusterId": "c1"}, {"name": "h2", "clusterId": "c1"}]"#).unwrap();

        let service = InMemoryClusterService::from_file(&path).unwrap();
        let response = list(&service, "c1", 0, "");

        assert_eq!(response.hosts.len(), 2);

        // Cleanup
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = InMemoryClusterService::from_file("/nonexistent/hosts.json");

        assert!(result.is_err());
    }
}
