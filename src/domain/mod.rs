pub mod models;

pub use models::{Health, Host, ListClusterHostsRequest, ListClusterHostsResponse, Role};
