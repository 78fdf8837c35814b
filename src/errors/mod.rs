use std::sync::Arc;

/// Failure of a ListHosts page fetch.
///
/// Shared and cloneable so an exhausted iterator can hand the same error to
/// every later caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to list cluster hosts: {0:#}")]
pub struct FetchError(Arc<anyhow::Error>);

impl FetchError {
    pub fn new(error: anyhow::Error) -> Self {
        Self(Arc::new(error))
    }

    /// Error reported by the listing service
    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }

    /// Whether both values originate from the same failed fetch
    pub fn same_failure(&self, other: &FetchError) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(error)
    }
}

/// Add context to list errors
pub fn list_context(cluster_id: &str, page_token: &str) -> String {
    if page_token.is_empty() {
        format!("Failed to list first page of hosts for cluster: {:?}", cluster_id)
    } else {
        format!(
            "Failed to list hosts for cluster: {:?} at page token {:?}",
            cluster_id, page_token
        )
    }
}

/// Add context to fixture loading errors
pub fn load_context(path: &std::path::Path) -> String {
    format!("Failed to load hosts from: {}", path.display())
}
