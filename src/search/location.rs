//! Shareable `?q=...&page=...` mirror of a search session.
//!
//! The location is a best-effort bookmark, never an authoritative store:
//! unparseable input degrades to defaults instead of failing.

use std::fmt;

use url::form_urlencoded;

use super::state::SearchState;

/// Query string view of `{query, page}`.
///
/// ```
/// use repo_explorer::search::SearchLocation;
///
/// let location = SearchLocation::parse("?q=rust+lang%3Arust&page=3");
/// assert_eq!(location.query, "rust lang:rust");
/// assert_eq!(location.page, 3);
/// assert_eq!(location.to_string(), "?q=rust+lang%3Arust&page=3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLocation {
    /// Search terms, empty when absent.
    pub query: String,
    /// Page (1-based).
    pub page: u32,
}

impl SearchLocation {
    /// Creates a location for `query` at `page`. Page zero becomes one.
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// A missing, zero or non-numeric `page` reads as page one.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().trim_start_matches('?');
        let mut query = String::new();
        let mut page = 1;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "q" => query = value.trim().to_owned(),
                "page" => page = value.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1),
                _ => {}
            }
        }
        Self { query, page }
    }

    /// Location mirroring the committed part of `state`.
    #[must_use]
    pub fn from_state(state: &SearchState) -> Self {
        Self::new(state.query.clone(), state.page)
    }
}

impl Default for SearchLocation {
    fn default() -> Self {
        Self::new(String::new(), 1)
    }
}

/// Renders `?q=<terms>` plus `&page=<n>` past the first page; an empty query
/// renders as the empty string.
impl fmt::Display for SearchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            return Ok(());
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("q", &self.query);
        if self.page > 1 {
            serializer.append_pair("page", &self.page.to_string());
        }
        write!(f, "?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SearchLocation;
    use crate::search::SearchState;

    #[rstest]
    #[case("q=tokio", "tokio", 1)]
    #[case("?q=tokio&page=4", "tokio", 4)]
    #[case("?page=2&q=%20serde%20", "serde", 2)]
    #[case("?q=tokio&page=0", "tokio", 1)]
    #[case("?q=tokio&page=abc", "tokio", 1)]
    #[case("?theme=dark", "", 1)]
    #[case("", "", 1)]
    fn parse_degrades_to_defaults(
        #[case] input: &str,
        #[case] query: &str,
        #[case] page: u32,
    ) {
        assert_eq!(SearchLocation::parse(input), SearchLocation::new(query, page));
    }

    #[rstest]
    #[case(SearchLocation::new("tokio", 1), "?q=tokio")]
    #[case(SearchLocation::new("tokio", 2), "?q=tokio&page=2")]
    #[case(SearchLocation::new("", 5), "")]
    fn render_omits_defaults(#[case] location: SearchLocation, #[case] expected: &str) {
        assert_eq!(location.to_string(), expected);
    }

    #[rstest]
    fn mirrors_committed_state() {
        let state = SearchState {
            query: "rust lang: rust".to_owned(),
            page: 2,
            ..SearchState::default()
        };
        let location = SearchLocation::from_state(&state);
        assert_eq!(location.to_string(), "?q=rust+lang%3A+rust&page=2");
        assert_eq!(SearchLocation::parse(&location.to_string()), location);
    }
}
