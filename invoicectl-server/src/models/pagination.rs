//! Pagination for the invoice listing

use serde::Deserialize;

/// Rows per listing page
pub const INVOICES_PER_PAGE: u32 = 6;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to minimum of 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// A page of the invoice listing.
    pub fn invoices(page: u32) -> Self {
        Self::new(page, INVOICES_PER_PAGE)
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::invoices(1)
    }
}

/// Number of pages needed for `total` rows (ceiling division).
///
/// Zero rows means zero pages.
pub fn total_pages(total: i64, per_page: u32) -> u32 {
    if total <= 0 {
        return 0;
    }
    let per_page = i64::from(per_page.max(1));
    u32::try_from((total + per_page - 1) / per_page).unwrap_or(u32::MAX)
}

/// Query string of the invoice listing: `?query=...&page=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl ListingParams {
    /// Search text, empty when absent.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Requested page. Missing, unparsable, zero or negative values fall back to 1.
    pub fn current_page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::invoices(self.current_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::invoices(1).offset(), 0);
        assert_eq!(Pagination::invoices(2).offset(), 6);
        assert_eq!(Pagination::invoices(5).offset(), 24);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn clamps_page() {
        let p = Pagination::new(0, 6);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn large_pages_do_not_overflow() {
        let p = Pagination::invoices(u32::MAX);
        assert_eq!(p.offset(), (u64::from(u32::MAX) - 1) * 6);
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(15, 6), 3);
        assert_eq!(total_pages(-3, 6), 0);
    }

    #[test]
    fn pages_cover_every_row() {
        for total in 0..100i64 {
            let pages = total_pages(total, INVOICES_PER_PAGE);
            assert!(i64::from(pages) * i64::from(INVOICES_PER_PAGE) >= total);
        }
    }

    #[test]
    fn current_page_parsing() {
        let params = |page: Option<&str>| ListingParams {
            query: None,
            page: page.map(str::to_owned),
        };

        assert_eq!(params(None).current_page(), 1);
        assert_eq!(params(Some("3")).current_page(), 3);
        assert_eq!(params(Some("0")).current_page(), 1);
        assert_eq!(params(Some("-2")).current_page(), 1);
        assert_eq!(params(Some("abc")).current_page(), 1);
        assert_eq!(params(Some("")).current_page(), 1);
    }

    #[test]
    fn query_defaults_to_empty() {
        assert_eq!(ListingParams::default().query(), "");
    }
}
