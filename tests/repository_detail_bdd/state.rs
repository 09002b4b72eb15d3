//! Scenario state for the repository detail behaviour tests.

use std::sync::Arc;

use repo_explorer::{
    DetailState, IssueFilterState, IssueState, OctocrabRepositoryGateway, PersonalAccessToken,
    RepositoryDetail, RepositoryLocator,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server, server_uri};

#[derive(ScenarioState, Default)]
pub(crate) struct DetailScenarioState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) view: Slot<DetailState>,
}

/// Loads `owner/name` with the given issue filter and records the view.
pub(crate) fn open_repository(state: &DetailScenarioState, full_name: &str, filter: IssueState) {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server)
        .unwrap_or_else(|error| panic!("failed to start scenario runtime: {error}"));
    let api_base = server_uri(&state.server);
    let locator = RepositoryLocator::parse(full_name)
        .unwrap_or_else(|error| panic!("locator should parse: {error}"));

    let snapshot = runtime.block_on(async {
        let token = PersonalAccessToken::new("scenario-token")
            .unwrap_or_else(|error| panic!("token should be valid: {error}"));
        let gateway = OctocrabRepositoryGateway::for_token(&token, &api_base)
            .unwrap_or_else(|error| panic!("gateway should build: {error}"));
        let detail = RepositoryDetail::new(Arc::new(gateway), locator).with_filter(
            IssueFilterState {
                state: filter,
                ..IssueFilterState::default()
            },
        );
        detail.load().await;
        detail.snapshot()
    });

    state.view.set(snapshot);
}
