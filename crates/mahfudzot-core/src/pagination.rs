//! Page/limit arithmetic shared by the router and the backends

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// A validated 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Zero limit falls back to the default, anything above [`MAX_LIMIT`] is
    /// clamped. Page zero becomes page one.
    pub fn new(page: u32, limit: u32) -> Self {
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            l => l.min(MAX_LIMIT),
        };
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Lenient parse of raw query values; garbage falls back to the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1);
        let limit = limit
            .and_then(|l| l.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_LIMIT);
        Self::new(page, limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }

    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// Backend-side normalization of a raw limit.
pub fn normalize_limit(limit: i64) -> i64 {
    if limit <= 0 {
        i64::from(DEFAULT_LIMIT)
    } else {
        limit
    }
}

pub fn normalize_offset(offset: i64) -> i64 {
    offset.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_offset() {
        let page = PageRequest::parse(None, None);
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.offset(), 0);

        let page = PageRequest::parse(Some("3"), Some("20"));
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn test_garbage_and_out_of_range() {
        assert_eq!(PageRequest::parse(Some("abc"), Some("-5")), PageRequest::default());
        assert_eq!(PageRequest::parse(Some("0"), Some("0")), PageRequest::default());
        assert_eq!(PageRequest::parse(None, Some("500")).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let page = PageRequest::new(0, 25);
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_backend_normalization() {
        assert_eq!(normalize_limit(0), 10);
        assert_eq!(normalize_limit(-3), 10);
        assert_eq!(normalize_limit(250), 250);
        assert_eq!(normalize_offset(-1), 0);
    }
}
