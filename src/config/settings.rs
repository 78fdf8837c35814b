use std::path::PathBuf;

const HOSTS_PATH_ENV: &str = "CLUSTER_HOSTS_PATH";
const DEFAULT_HOSTS_PATH: &str = "hosts.json";

#[derive(Debug, Clone, Default)]
pub struct PaginationSettings {
    /// Page size hint passed to the iterator, 0 for the iterator default
    pub page_size: i64,
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub hosts_path: PathBuf,
}

impl SourceSettings {
    pub fn from_env() -> Self {
        let hosts_path = std::env::var(HOSTS_PATH_ENV).unwrap_or_else(|_| DEFAULT_HOSTS_PATH.to_string());
        Self {
            hosts_path: PathBuf::from(hosts_path),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pagination: PaginationSettings,
    pub source: SourceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            pagination: PaginationSettings::default(),
            source: SourceSettings::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: Option<i64>) -> Self {
        if let Some(page_size) = page_size {
            self.pagination.page_size = page_size;
        }
        self
    }

    pub fn with_hosts_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.source.hosts_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_only_when_given() {
        let config = AppConfig::new()
            .with_page_size(Some(50))
            .with_hosts_path(None);

        assert_eq!(config.pagination.page_size, 50);
        assert_eq!(config.source.hosts_path, SourceSettings::from_env().hosts_path);

        let config = config.with_page_size(None).with_hosts_path(Some(PathBuf::from("other.json")));

        assert_eq!(config.pagination.page_size, 50);
        assert_eq!(config.source.hosts_path, PathBuf::from("other.json"));
    }

    #[test]
    fn test_default_page_size_defers_to_iterator() {
        assert_eq!(AppConfig::default().pagination.page_size, 0);
    }
}
