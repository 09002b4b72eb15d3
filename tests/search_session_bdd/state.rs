//! Scenario state for the search session behaviour tests.

use std::sync::Arc;

use repo_explorer::{OctocrabRepositoryGateway, PersonalAccessToken, SearchState, SearchStore};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server, server_uri};

#[derive(ScenarioState, Default)]
pub(crate) struct SearchSessionState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) session: Slot<SearchState>,
}

/// Runs one search against the mock server and records the resulting
/// session snapshot.
pub(crate) fn run_search(state: &SearchSessionState, text: &str, page: u32) {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server)
        .unwrap_or_else(|error| panic!("failed to start scenario runtime: {error}"));
    let api_base = server_uri(&state.server);

    let snapshot = runtime.block_on(async {
        let token = PersonalAccessToken::new("scenario-token")
            .unwrap_or_else(|error| panic!("token should be valid: {error}"));
        let gateway = OctocrabRepositoryGateway::for_token(&token, &api_base)
            .unwrap_or_else(|error| panic!("gateway should build: {error}"));
        let store = SearchStore::new(Arc::new(gateway));
        store.perform_search(text, page).await;
        store.snapshot()
    });

    state.session.set(snapshot);
}

/// Number of requests the mock server has seen.
pub(crate) fn received_request_count(state: &SearchSessionState) -> usize {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server)
        .unwrap_or_else(|error| panic!("failed to start scenario runtime: {error}"));
    state
        .server
        .with_ref(|server| {
            runtime
                .block_on(server.received_requests())
                .map_or(0, |requests| requests.len())
        })
        .unwrap_or_else(|| panic!("mock server not initialised"))
}
