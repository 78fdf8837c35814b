/// Page size used when the request does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 1000;

/// Page size negotiation for paginated host listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub page_size: i64,
}

impl PaginationConfig {
    /// Resolve the caller's page size hint; zero or negative means the default
    pub fn new(page_size_hint: i64) -> Self {
        let page_size = if page_size_hint <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size_hint
        };
        Self { page_size }
    }

    /// Size of the next page to request.
    ///
    /// `remaining` is the outstanding bound of a bounded take, 0 when none is active.
    pub fn fetch_size(&self, remaining: usize) -> i64 {
        if remaining == 0 {
            return self.page_size;
        }
        i64::try_from(remaining).map_or(self.page_size, |remaining| remaining.min(self.page_size))
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hint_uses_default() {
        assert_eq!(PaginationConfig::new(0).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(PaginationConfig::new(-5).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(PaginationConfig::default().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(PaginationConfig::new(25).page_size, 25);
    }

    #[test]
    fn test_fetch_size_is_capped_by_remaining_bound() {
        let config = PaginationConfig::new(10);

        assert_eq!(config.fetch_size(0), 10);
        assert_eq!(config.fetch_size(3), 3);
        assert_eq!(config.fetch_size(10), 10);
        assert_eq!(config.fetch_size(11), 10);
        assert_eq!(config.fetch_size(usize::MAX), 10);
    }
}
