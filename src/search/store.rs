//! Search session store with last-write-wins commits.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::freshness::TokenCounter;
use crate::github::{PerPage, RepositoryGateway, SearchQuery, SearchSort};

use super::location::SearchLocation;
use super::state::{SearchState, SearchStatus};

#[derive(Debug, Default)]
struct Session {
    state: SearchState,
    tokens: TokenCounter,
    /// Terms of the search holding the current token, until it commits.
    in_flight: Option<String>,
}

impl Session {
    /// Terms a page or page-size change should re-run: the search still in
    /// flight, else the committed query.
    fn rerun_terms(&self) -> Option<String> {
        self.in_flight.clone().or_else(|| {
            (!self.state.query.is_empty()).then(|| self.state.query.clone())
        })
    }
}

/// Owns one search session and drives it through a gateway.
///
/// Clones share the same session, so a presentation layer can hand a clone to
/// each task that issues searches. Only the most recently issued search may
/// commit; results of superseded searches are dropped when they arrive.
///
/// The lock guarding the session is never held across a request.
pub struct SearchStore<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    gateway: Arc<Gateway>,
    session: Arc<Mutex<Session>>,
    sort: SearchSort,
}

impl<Gateway> Clone for SearchStore<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: Arc::clone(&self.session),
            sort: self.sort,
        }
    }
}

impl<Gateway> SearchStore<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Creates an idle session ordered by stars with ten results per page.
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            session: Arc::new(Mutex::new(Session::default())),
            sort: SearchSort::default(),
        }
    }

    /// Sets the initial page size.
    #[must_use]
    pub fn with_per_page(self, per_page: PerPage) -> Self {
        self.lock().state.per_page = per_page;
        self
    }

    /// Overrides the ordering key used for every search.
    #[must_use]
    pub const fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = sort;
        self
    }

    /// Copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.lock().state.clone()
    }

    /// Current session phase.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.lock().state.status()
    }

    /// Pages available for the committed total, at least one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.lock().state.total_pages()
    }

    /// Location mirroring the committed query and page.
    #[must_use]
    pub fn location(&self) -> SearchLocation {
        SearchLocation::from_state(&self.lock().state)
    }

    /// Searches for `text` and commits page `page` of the results.
    ///
    /// Blank input leaves the session untouched. Page zero is read as page
    /// one. On success the trimmed text becomes the committed query; on
    /// failure the whole session resets and the error message is stored.
    /// Nothing is committed when a newer search or a clear happened while
    /// this request was in flight.
    pub async fn perform_search(&self, text: &str, page: u32) {
        let terms = text.trim();
        if terms.is_empty() {
            return;
        }
        let page_number = page.max(1);

        let (token, query) = {
            let mut session = self.lock();
            let token = session.tokens.issue();
            session.in_flight = Some(terms.to_owned());
            session.state.loading = true;
            session.state.error = None;
            let query =
                SearchQuery::new(terms, page_number, session.state.per_page).with_sort(self.sort);
            (token, query)
        };

        let outcome = self.gateway.search_repositories(&query).await;

        let mut session = self.lock();
        if !session.tokens.is_current(token) {
            debug!(
                token = token.value(),
                query = terms,
                page = page_number,
                "discarding superseded search result"
            );
            return;
        }

        session.in_flight = None;
        let state = &mut session.state;
        state.loading = false;
        match outcome {
            Ok(result) => {
                debug!(
                    query = terms,
                    page = page_number,
                    total_count = result.total_count,
                    items = result.items.len(),
                    "search committed"
                );
                terms.clone_into(&mut state.query);
                state.page = page_number;
                state.items = result.items;
                state.total_count = result.total_count;
            }
            Err(error) => {
                debug!(query = terms, page = page_number, %error, "search failed");
                state.query.clear();
                state.page = 1;
                state.items.clear();
                state.total_count = 0;
                state.error = Some(error.to_string());
            }
        }
    }

    /// Resets the session to idle and drops any in-flight search.
    ///
    /// The page size survives.
    pub fn clear_search(&self) {
        let mut session = self.lock();
        session.tokens.invalidate();
        session.in_flight = None;
        let per_page = session.state.per_page;
        session.state = SearchState::idle(per_page);
    }

    /// Moves to `page`, re-running the committed query when there is one.
    ///
    /// A search still in flight is re-run at `page` instead, superseding the
    /// original request.
    pub async fn set_page(&self, page: u32) {
        let terms = {
            let mut session = self.lock();
            let rerun = session.rerun_terms();
            if rerun.is_none() {
                session.state.page = page.max(1);
            }
            rerun
        };
        if let Some(query) = terms {
            self.perform_search(&query, page).await;
        }
    }

    /// Changes the page size and returns to the first page.
    ///
    /// The search still in flight, or else the committed query, is fetched
    /// again at the new size.
    pub async fn set_per_page(&self, per_page: PerPage) {
        let terms = {
            let mut session = self.lock();
            session.state.per_page = per_page;
            session.state.page = 1;
            session.rerun_terms()
        };
        if let Some(query) = terms {
            self.perform_search(&query, 1).await;
        }
    }

    /// Starts a search when `location` names a query other than the committed
    /// one. Returns true when a search ran.
    pub async fn sync_from_location(&self, location: &SearchLocation) -> bool {
        let query = location.query.trim();
        if query.is_empty() || self.lock().state.query == query {
            return false;
        }
        self.perform_search(query, location.page).await;
        true
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
