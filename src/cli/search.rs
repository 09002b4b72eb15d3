//! Repository search operation.

use std::io::{self, Write};
use std::sync::Arc;

use repo_explorer::{
    ExplorerConfig, ExplorerError, OctocrabRepositoryGateway, PersonalAccessToken,
    RepositoryGateway, SearchStatus, SearchStore,
};

use super::Outcome;
use super::output::write_search_results;

/// Searches repositories and prints one page of results.
///
/// # Errors
///
/// Returns [`ExplorerError::Configuration`] if the query or options are
/// invalid. Search failures are printed, not returned.
pub async fn run(
    config: &ExplorerConfig,
    token: &PersonalAccessToken,
) -> Result<Outcome, ExplorerError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, token, OctocrabRepositoryGateway::for_token, &mut stdout)
        .await
}

/// Searches repositories using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &ExplorerConfig,
    token: &PersonalAccessToken,
    build_gateway: F,
    writer: &mut W,
) -> Result<Outcome, ExplorerError>
where
    G: RepositoryGateway,
    F: FnOnce(&PersonalAccessToken, &str) -> Result<G, ExplorerError>,
    W: Write,
{
    let query = config.require_query()?;
    let per_page = config.per_page()?;
    let sort = config.sort()?;

    let gateway = Arc::new(build_gateway(token, &config.api_url)?);
    let store = SearchStore::new(gateway)
        .with_per_page(per_page)
        .with_sort(sort);
    store.perform_search(query, config.page).await;

    write_search_results(writer, &store.snapshot())?;
    Ok(match store.status() {
        SearchStatus::Failed => Outcome::Failed,
        SearchStatus::Idle | SearchStatus::Loading | SearchStatus::Loaded => Outcome::Shown,
    })
}
