mod config;
mod iterator;

pub use config::{PaginationConfig, DEFAULT_PAGE_SIZE};
pub use iterator::ClusterHostsIterator;
