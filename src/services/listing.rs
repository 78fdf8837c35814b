use anyhow::Result;
use colored::{ColoredString, Colorize};
use log::info;

use crate::api::{InMemoryClusterService, ListHosts};
use crate::config::settings::AppConfig;
use crate::domain::{Health, Host, ListClusterHostsRequest, Role};

pub struct ListingService {
    config: AppConfig,
}

impl ListingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Print up to `limit` hosts of a cluster, 0 meaning all of them
    pub fn run_list(&self, cluster_id: &str, limit: usize) -> Result<()> {
        let service = self.open_service()?;
        let hosts = self.collect_hosts(&service, cluster_id, limit)?;

        for host in &hosts {
            println!("{}", format_host(host));
        }

        info!("Listed {} hosts using {} page fetches", hosts.len(), service.call_count());
        Ok(())
    }

    /// Print the number of hosts in a cluster
    pub fn run_count(&self, cluster_id: &str) -> Result<()> {
        let service = self.open_service()?;
        let count = self.count_hosts(&service, cluster_id)?;

        println!("{}", count);

        info!("Counted {} hosts using {} page fetches", count, service.call_count());
        Ok(())
    }

    pub fn collect_hosts<L: ListHosts>(&self, lister: &L, cluster_id: &str, limit: usize) -> Result<Vec<Host>> {
        let mut hosts = lister.hosts_iterator(self.build_request(cluster_id));
        Ok(hosts.take(limit)?)
    }

    pub fn count_hosts<L: ListHosts>(&self, lister: &L, cluster_id: &str) -> Result<usize> {
        let mut hosts = lister.hosts_iterator(self.build_request(cluster_id));

        let mut count = 0;
        while hosts.next() {
            count += 1;
        }

        match hosts.error() {
            Some(err) => Err(err.clone().into()),
            None => Ok(count),
        }
    }

    // --- Helper Methods ---

    fn open_service(&self) -> Result<InMemoryClusterService> {
        InMemoryClusterService::from_file(&self.config.source.hosts_path)
    }

    fn build_request(&self, cluster_id: &str) -> ListClusterHostsRequest {
        ListClusterHostsRequest::new(cluster_id).with_page_size(self.config.pagination.page_size)
    }
}

/// One output line per host: name, cluster, zone, role, health
pub fn format_host(host: &Host) -> String {
    format!(
        "{:<32} {:<24} {:<14} {:<8} {}",
        host.name,
        host.cluster_id,
        host.zone_id,
        role_label(host.role()),
        health_label(host.health())
    )
}

fn role_label(role: Role) -> ColoredString {
    match role {
        Role::Master => "MASTER".green().bold(),
        Role::Replica => "REPLICA".cyan(),
        Role::RoleUnknown => "UNKNOWN".dimmed(),
    }
}

fn health_label(health: Health) -> ColoredString {
    match health {
        Health::Alive => "ALIVE".green(),
        Health::Dead => "DEAD".red().bold(),
        Health::Degraded => "DEGRADED".yellow(),
        Health::Readonly => "READONLY".yellow(),
        Health::HealthUnknown => "UNKNOWN".dimmed(),
    }
}
