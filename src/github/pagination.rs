//! Pagination state and navigation for GitHub API responses.
//!
//! [`PageInfo`] captures the page position reported by a listing endpoint's
//! `Link` header. [`PerPage`] is the page size offered to users, and
//! [`total_pages`] turns an item total into a page count.

use std::fmt;

use super::error::ExplorerError;

/// Largest page size GitHub accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Page sizes offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PerPage {
    /// Ten items per page.
    #[default]
    Ten,
    /// Twenty items per page.
    Twenty,
    /// Fifty items per page.
    Fifty,
}

impl PerPage {
    /// Every selectable page size, smallest first.
    pub const ALL: [Self; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    /// Returns the numeric page size.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u8> for PerPage {
    type Error = ExplorerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| {
                let offered: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
                ExplorerError::InvalidPagination {
                    message: format!(
                        "per_page must be one of {}, got {value}",
                        offered.join(", ")
                    ),
                }
            })
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Validates raw pagination parameters before they reach GitHub.
///
/// # Errors
///
/// Returns [`ExplorerError::InvalidPagination`] when `page` is zero or
/// `per_page` is outside `1..=100`.
pub fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), ExplorerError> {
    if page == 0 {
        return Err(ExplorerError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(ExplorerError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(ExplorerError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}

/// Number of pages needed to show `total_count` items, never less than one.
///
/// ```
/// use repo_explorer::github::pagination::{PerPage, total_pages};
///
/// assert_eq!(total_pages(0, PerPage::Ten), 1);
/// assert_eq!(total_pages(532, PerPage::Ten), 54);
/// assert_eq!(total_pages(100, PerPage::Fifty), 2);
/// ```
#[must_use]
pub fn total_pages(total_count: u64, per_page: PerPage) -> u64 {
    total_count.div_ceil(u64::from(per_page.get())).max(1)
}

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use repo_explorer::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 50)
///     .with_total_pages(Some(5))
///     .with_has_next(true)
///     .with_has_prev(true);
/// assert!(!info.is_first_page());
/// assert!(!info.is_last_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    current_page: u32,
    per_page: u8,
    total_pages: Option<u32>,
    has_next: bool,
    has_prev: bool,
}

impl PageInfo {
    /// Creates a new page info instance with unknown totals.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            total_pages: None,
            has_next: false,
            has_prev: false,
        }
    }

    /// Sets the total number of pages.
    #[must_use]
    pub const fn with_total_pages(mut self, total_pages: Option<u32>) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Sets whether there is a previous page.
    #[must_use]
    pub const fn with_has_prev(mut self, has_prev: bool) -> Self {
        self.has_prev = has_prev;
        self
    }

    /// Builds page info from a `Link` response header.
    ///
    /// The last page of a listing carries no `last` relation, so the current
    /// page stands in for the total there.
    #[must_use]
    pub fn from_link_header(current_page: u32, per_page: u8, link: Option<&str>) -> Self {
        let links = link.map(LinkRelations::parse).unwrap_or_default();
        let total_pages = links.last_page.or_else(|| {
            if links.next {
                None
            } else {
                Some(current_page)
            }
        });

        Self::new(current_page, per_page)
            .with_total_pages(total_pages)
            .with_has_next(links.next)
            .with_has_prev(links.prev)
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the total number of pages if known.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, PerPage::default().get())
    }
}

#[derive(Debug, Default)]
struct LinkRelations {
    next: bool,
    prev: bool,
    last_page: Option<u32>,
}

impl LinkRelations {
    fn parse(header: &str) -> Self {
        let mut relations = Self::default();
        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let Some(target) = parts.next() else {
                continue;
            };
            let url = target.trim().trim_start_matches('<').trim_end_matches('>');
            for param in parts {
                match param.trim() {
                    "rel=\"next\"" => relations.next = true,
                    "rel=\"prev\"" => relations.prev = true,
                    "rel=\"last\"" => relations.last_page = page_param(url),
                    _ => {}
                }
            }
        }
        relations
    }
}

fn page_param(link_target: &str) -> Option<u32> {
    let parsed = url::Url::parse(link_target).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PageInfo, PerPage, total_pages, validate_pagination_params};
    use crate::github::error::ExplorerError;

    #[rstest]
    #[case(10, PerPage::Ten)]
    #[case(20, PerPage::Twenty)]
    #[case(50, PerPage::Fifty)]
    fn per_page_accepts_offered_sizes(#[case] raw: u8, #[case] expected: PerPage) {
        assert_eq!(PerPage::try_from(raw), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(30)]
    #[case(100)]
    fn per_page_rejects_other_sizes(#[case] raw: u8) {
        assert!(
            matches!(
                PerPage::try_from(raw),
                Err(ExplorerError::InvalidPagination { .. })
            ),
            "expected {raw} to be rejected"
        );
    }

    #[test]
    fn per_page_error_lists_offered_sizes() {
        assert_eq!(
            PerPage::try_from(30),
            Err(ExplorerError::InvalidPagination {
                message: "per_page must be one of 10, 20, 50, got 30".to_owned(),
            })
        );
    }

    #[test]
    fn every_offered_size_parses_back() {
        for size in PerPage::ALL {
            assert_eq!(PerPage::try_from(size.get()), Ok(size));
        }
    }

    #[rstest]
    #[case(0, 10)]
    #[case(1, 0)]
    #[case(1, 101)]
    fn validate_rejects_out_of_range_params(#[case] page: u32, #[case] per_page: u8) {
        assert!(validate_pagination_params(page, per_page).is_err());
    }

    #[rstest]
    #[case(0, PerPage::Ten, 1)]
    #[case(10, PerPage::Ten, 1)]
    #[case(11, PerPage::Ten, 2)]
    #[case(100, PerPage::Twenty, 5)]
    fn total_pages_rounds_up(#[case] total: u64, #[case] per_page: PerPage, #[case] expected: u64) {
        assert_eq!(total_pages(total, per_page), expected);
    }

    #[rstest]
    fn link_header_populates_navigation() {
        let link = "<https://api.github.com/repositories/1/issues?page=3&per_page=10>; rel=\"next\", \
                    <https://api.github.com/repositories/1/issues?page=9&per_page=10>; rel=\"last\", \
                    <https://api.github.com/repositories/1/issues?page=1&per_page=10>; rel=\"prev\"";

        let info = PageInfo::from_link_header(2, 10, Some(link));

        assert_eq!(info.current_page(), 2);
        assert_eq!(info.total_pages(), Some(9));
        assert!(info.has_next());
        assert!(info.has_prev());
    }

    #[rstest]
    fn missing_link_header_means_single_page() {
        let info = PageInfo::from_link_header(1, 10, None);

        assert_eq!(info.total_pages(), Some(1));
        assert!(info.is_first_page());
        assert!(info.is_last_page());
    }
}
