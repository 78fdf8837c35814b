pub mod memory;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::{ListClusterHostsRequest, ListClusterHostsResponse};
use crate::pagination::ClusterHostsIterator;

pub use memory::InMemoryClusterService;

/// The ListHosts RPC of a cluster service.
///
/// One call returns one page. An empty `page_token` asks for the first page and
/// an empty `next_page_token` in the response marks the last one. Calls must be
/// free of side effects so the same token can be requested again. Cancellation
/// and deadlines are up to the implementation.
pub trait ListHosts {
    fn list_hosts(&self, request: &ListClusterHostsRequest) -> Result<ListClusterHostsResponse>;

    /// Iterate over all hosts matching `request`, fetching pages lazily.
    ///
    /// `request.page_size` is used as the page size hint for every fetch.
    fn hosts_iterator(&self, request: ListClusterHostsRequest) -> ClusterHostsIterator<'_, Self>
    where
        Self: Sized,
    {
        ClusterHostsIterator::new(self, request)
    }
}

impl<T: ListHosts + ?Sized> ListHosts for &T {
    fn list_hosts(&self, request: &ListClusterHostsRequest) -> Result<ListClusterHostsResponse> {
        (**self).list_hosts(request)
    }
}

impl<T: ListHosts + ?Sized> ListHosts for Box<T> {
    fn list_hosts(&self, request: &ListClusterHostsRequest) -> Result<ListClusterHostsResponse> {
        (**self).list_hosts(request)
    }
}

impl<T: ListHosts + ?Sized> ListHosts for Arc<T> {
    fn list_hosts(&self, request: &ListClusterHostsRequest) -> Result<ListClusterHostsResponse> {
        (**self).list_hosts(request)
    }
}
