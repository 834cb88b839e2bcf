//! Pagination state for GitHub notification listings.
//!
//! GitHub signals further pages through `Link` headers; `PageInfo` records
//! the position of one fetched page and whether another follows it.

/// Largest page size the notifications endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use mailroom::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2).with_has_next(true);
/// assert_eq!(info.next_page(), Some(3));
/// assert_eq!(PageInfo::new(3).next_page(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Whether more pages exist after the current one.
    has_next: bool,
}

impl PageInfo {
    /// Creates a page info with no known successor.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            has_next: false,
        }
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Page number to request next, or `None` once the listing is exhausted.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PageInfo;

    #[rstest]
    fn default_is_first_and_last_page() {
        let info = PageInfo::default();
        assert_eq!(info.current_page(), 1);
        assert!(!info.has_next());
        assert_eq!(info.next_page(), None);
    }

    #[rstest]
    fn next_page_follows_current_when_more_exist() {
        let info = PageInfo::new(4).with_has_next(true);
        assert_eq!(info.next_page(), Some(5));
    }

    #[rstest]
    fn next_page_stops_at_numeric_limit() {
        let info = PageInfo::new(u32::MAX).with_has_next(true);
        assert_eq!(info.next_page(), None, "page counter must not wrap");
    }
}
