use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use super::config::PaginationConfig;
use crate::api::ListHosts;
use crate::domain::{Host, ListClusterHostsRequest};
use crate::errors::{list_context, FetchError};

/// Lazily paginated view over the hosts of a cluster.
///
/// Pages are fetched one at a time as `next` runs out of buffered hosts. The
/// first failed fetch is kept and ends the iteration for good; no fetch is ever
/// retried. Not meant to be shared between threads: build one iterator per
/// consumer.
pub struct ClusterHostsIterator<'a, L: ?Sized> {
    lister: &'a L,
    request: ListClusterHostsRequest,
    config: PaginationConfig,

    items: VecDeque<Host>,
    started: bool,
    requested_size: usize,
    err: Option<FetchError>,
}

impl<'a, L: ListHosts + ?Sized> ClusterHostsIterator<'a, L> {
    /// Create an iterator over `request`.
    ///
    /// `request.page_size` is the page size hint: 0 selects the default page size,
    /// anything else is used for every page fetch.
    pub fn new(lister: &'a L, request: ListClusterHostsRequest) -> Self {
        let config = PaginationConfig::new(request.page_size);
        Self {
            lister,
            request,
            config,
            items: VecDeque::new(),
            started: false,
            requested_size: 0,
            err: None,
        }
    }

    /// Advance to the next host. Returns false once the hosts are exhausted or
    /// a page fetch failed; check `error` to tell the two apart.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }
        if self.items.len() > 1 {
            self.items.pop_front();
            return true;
        }
        // consume last item, if any
        self.items.clear();

        loop {
            if self.started && self.request.page_token.is_empty() {
                return false;
            }
            self.started = true;

            if !self.fetch_page() {
                return false;
            }
            if !self.items.is_empty() {
                return true;
            }
        }
    }

    /// Current host.
    ///
    /// # Panics
    ///
    /// When there is no current host: before the first `next`, or after `next`
    /// returned false.
    pub fn value(&self) -> &Host {
        match self.items.front() {
            Some(host) => host,
            None => panic!("calling value on empty iterator"),
        }
    }

    /// The failure that exhausted this iterator, if any
    pub fn error(&self) -> Option<&FetchError> {
        self.err.as_ref()
    }

    /// Collect up to `size` further hosts, 0 meaning all remaining ones.
    ///
    /// Either every requested host is returned or, if a page fetch fails on the
    /// way, only the error. Repeated calls continue where the previous one stopped.
    pub fn take(&mut self, size: usize) -> Result<Vec<Host>, FetchError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let size = if size == 0 { usize::MAX } else { size };
        let mut it = BoundedTake::new(self, size);
        let mut result = Vec::new();

        while it.requested_size > 0 && it.next() {
            it.requested_size -= 1;
            result.push(it.value().clone());
        }

        if let Some(err) = &it.err {
            return Err(err.clone());
        }

        Ok(result)
    }

    /// Collect every remaining host
    pub fn take_all(&mut self) -> Result<Vec<Host>, FetchError> {
        self.take(0)
    }

    fn fetch_page(&mut self) -> bool {
        self.request.page_size = self.config.fetch_size(self.requested_size);

        match self.lister.list_hosts(&self.request) {
            Ok(response) => {
                debug!(
                    "Fetched {} hosts of cluster {:?} (page size {}, token {:?}, next token {:?})",
                    response.hosts.len(),
                    self.request.cluster_id,
                    self.request.page_size,
                    self.request.page_token,
                    response.next_page_token
                );
                self.items = response.hosts.into();
                self.request.page_token = response.next_page_token;
                true
            }
            Err(e) => {
                warn!(
                    "{}: {:#}",
                    list_context(&self.request.cluster_id, &self.request.page_token),
                    e
                );
                self.err = Some(FetchError::new(e));
                false
            }
        }
    }
}

/// Holds the bound of a running `take`, clearing it again on drop.
struct BoundedTake<'it, 'a, L: ListHosts + ?Sized> {
    it: &'it mut ClusterHostsIterator<'a, L>,
}

impl<'it, 'a, L: ListHosts + ?Sized> BoundedTake<'it, 'a, L> {
    fn new(it: &'it mut ClusterHostsIterator<'a, L>, size: usize) -> Self {
        it.requested_size = size;
        Self { it }
    }
}

impl<'a, L: ListHosts + ?Sized> Deref for BoundedTake<'_, 'a, L> {
    type Target = ClusterHostsIterator<'a, L>;

    fn deref(&self) -> &Self::Target {
        self.it
    }
}

impl<L: ListHosts + ?Sized> DerefMut for BoundedTake<'_, '_, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.it
    }
}

impl<L: ListHosts + ?Sized> Drop for BoundedTake<'_, '_, L> {
    fn drop(&mut self) {
        self.it.requested_size = 0;
    }
}
