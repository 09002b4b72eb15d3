//! Repository detail operation.

use std::io::{self, Write};
use std::sync::Arc;

use repo_explorer::{
    ExplorerConfig, ExplorerError, IssueFilterState, OctocrabRepositoryGateway,
    PersonalAccessToken, RepositoryDetail, RepositoryGateway,
};

use super::Outcome;
use super::output::write_repository_detail;

/// Shows one repository with a page of its issues.
///
/// # Errors
///
/// Returns [`ExplorerError::Configuration`] if the repository or options are
/// invalid. Lane failures are printed, not returned.
pub async fn run(
    config: &ExplorerConfig,
    token: &PersonalAccessToken,
) -> Result<Outcome, ExplorerError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, token, OctocrabRepositoryGateway::for_token, &mut stdout)
        .await
}

/// Shows a repository using a custom gateway builder.
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
    let locator = config.require_locator()?;
    let filter = IssueFilterState {
        state: config.issue_state()?,
        page: config.page,
        per_page: config.per_page()?,
    };

    let gateway = Arc::new(build_gateway(token, &config.api_url)?);
    let detail = RepositoryDetail::new(gateway, locator).with_filter(filter);
    detail.load().await;

    let state = detail.snapshot();
    write_repository_detail(writer, &state)?;
    let failed = state.repository.error.is_some()
        || state.issues.error.is_some()
        || state.stats.error.is_some();
    Ok(if failed { Outcome::Failed } else { Outcome::Shown })
}

#[cfg(test)]
mod tests {
    use repo_explorer::github::models::test_support::{issue_with_number, repository_named};
    use repo_explorer::{
        ExplorerConfig, ExplorerError, IssuePage, IssueState, PersonalAccessToken,
    };
    use rstest::{fixture, rstest};

    use super::run_with_gateway_builder;
    use crate::cli::Outcome;
    use crate::cli::test_utils::StubGateway;

    #[fixture]
    fn token() -> PersonalAccessToken {
        PersonalAccessToken::new("ghp_example").expect("token should be valid")
    }

    fn config_for(repo: &str, issue_state: &str) -> ExplorerConfig {
        ExplorerConfig {
            repo: Some(repo.to_owned()),
            issue_state: issue_state.to_owned(),
            ..Default::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn detail_passes_filter_and_prints_all_lanes(token: PersonalAccessToken) {
        let config = config_for("octo/repo", "closed");
        let gateway = StubGateway::detail(
            Ok(repository_named(1, "octo", "repo")),
            Ok(IssuePage {
                items: vec![issue_with_number(4)],
                ..IssuePage::default()
            }),
            (7, 93),
        );
        let recorder = gateway.clone();

        let mut buffer = Vec::new();
        let outcome = run_with_gateway_builder(&config, &token, |_, _| Ok(gateway), &mut buffer)
            .await
            .expect("detail should run");

        assert_eq!(outcome, Outcome::Shown);
        let listings = recorder.listings.lock().expect("listings mutex").clone();
        let params = listings.first().expect("issues should have been listed");
        assert_eq!(params.state, IssueState::Closed);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.contains("Showing closed issues:"), "missing filter: {output}");
        assert!(output.contains("Page 1 of 10 (93 issues)"), "missing page line: {output}");
    }

    #[rstest]
    #[tokio::test]
    async fn failed_lane_reports_failure_but_prints_others(token: PersonalAccessToken) {
        let config = config_for("octo/repo", "open");
        let gateway = StubGateway::detail(
            Ok(repository_named(1, "octo", "repo")),
            Err(ExplorerError::Http {
                status: 500,
                message: "Internal Server Error".to_owned(),
            }),
            (7, 93),
        );

        let mut buffer = Vec::new();
        let outcome = run_with_gateway_builder(&config, &token, |_, _| Ok(gateway), &mut buffer)
            .await
            .expect("detail should run");

        assert_eq!(outcome, Outcome::Failed);
        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.contains("Issues: 7 open, 93 closed"), "missing stats: {output}");
        assert!(output.contains("(7 issues)"), "missing derived total: {output}");
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_issue_state_is_rejected(token: PersonalAccessToken) {
        let config = config_for("octo/repo", "merged");

        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &config,
            &token,
            |_, _| Ok(StubGateway::default()),
            &mut buffer,
        )
        .await;

        assert!(
            matches!(result, Err(ExplorerError::Configuration { .. })),
            "expected Configuration, got {result:?}"
        );
    }
}
