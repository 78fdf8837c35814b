pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::ListingService;

pub use api::{InMemoryClusterService, ListHosts};
pub use domain::{Host, ListClusterHostsRequest, ListClusterHostsResponse};
pub use errors::FetchError;
pub use pagination::ClusterHostsIterator;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_list(cluster: &str, page_size: Option<i64>, limit: usize, file: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_page_size(page_size).with_hosts_path(file);
    let service = ListingService::new(config);
    service.run_list(cluster, limit)
}

pub fn handle_count(cluster: &str, page_size: Option<i64>, file: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_page_size(page_size).with_hosts_path(file);
    let service = ListingService::new(config);
    service.run_count(cluster)
}
