//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use repo_explorer::{
    DetailState, ExplorerError, Issue, Repository, SearchLocation, SearchState,
};

/// Writes one page of search results, or the session's error.
pub fn write_search_results<W: Write>(
    writer: &mut W,
    state: &SearchState,
) -> Result<(), ExplorerError> {
    if let Some(error) = &state.error {
        writeln!(writer, "Error: {error}").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} repositories found for \"{}\"",
        state.total_count, state.query
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for repository in &state.items {
        write_repository_line(writer, repository)?;
    }
    if state.items.is_empty() {
        writeln!(writer, "  No repositories on this page.").map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {} of {} ({} per page)",
        state.page,
        state.total_pages(),
        state.per_page
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "Link: {}", SearchLocation::from_state(state)).map_err(|e| io_error(&e))
}

fn write_repository_line<W: Write>(
    writer: &mut W,
    repository: &Repository,
) -> Result<(), ExplorerError> {
    let language = repository.language.as_deref().unwrap_or("-");
    writeln!(
        writer,
        "  {} ({} stars, {} forks, {language})",
        repository.full_name, repository.stargazers_count, repository.forks_count
    )
    .map_err(|e| io_error(&e))?;
    if let Some(description) = repository.description.as_deref() {
        writeln!(writer, "      {description}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes a repository detail view, lane by lane.
///
/// A failed lane prints its error in place of its content; the other lanes
/// print normally.
pub fn write_repository_detail<W: Write>(
    writer: &mut W,
    state: &DetailState,
) -> Result<(), ExplorerError> {
    match (state.repository.value(), &state.repository.error) {
        (Some(repository), _) => write_repository_header(writer, repository)?,
        (None, Some(error)) => {
            writeln!(writer, "Repository error: {error}").map_err(|e| io_error(&e))?;
        }
        (None, None) => {}
    }
    writeln!(writer).map_err(|e| io_error(&e))?;

    match (state.stats.value(), &state.stats.error) {
        (Some(stats), _) => writeln!(
            writer,
            "Issues: {} open, {} closed",
            stats.open, stats.closed
        )
        .map_err(|e| io_error(&e))?,
        (None, Some(error)) => {
            writeln!(writer, "Statistics error: {error}").map_err(|e| io_error(&e))?;
        }
        (None, None) => {}
    }

    writeln!(writer, "Showing {} issues:", state.filter.state).map_err(|e| io_error(&e))?;
    match (state.issues.value(), &state.issues.error) {
        (Some(page), _) => {
            for issue in &page.items {
                write_issue_line(writer, issue)?;
            }
            if page.items.is_empty() {
                writeln!(writer, "  No issues on this page.").map_err(|e| io_error(&e))?;
            }
        }
        (None, Some(error)) => {
            writeln!(writer, "  Issues error: {error}").map_err(|e| io_error(&e))?;
        }
        (None, None) => {}
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {} of {} ({} issues)",
        state.filter.page,
        state.total_pages(),
        state.total_count()
    )
    .map_err(|e| io_error(&e))
}

fn write_repository_header<W: Write>(
    writer: &mut W,
    repository: &Repository,
) -> Result<(), ExplorerError> {
    writeln!(writer, "{}", repository.full_name).map_err(|e| io_error(&e))?;
    if let Some(description) = repository.description.as_deref() {
        writeln!(writer, "{description}").map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Stars: {}  Forks: {}  Watchers: {}  Language: {}",
        repository.stargazers_count,
        repository.forks_count,
        repository.watchers_count,
        repository.language.as_deref().unwrap_or("-")
    )
    .map_err(|e| io_error(&e))?;
    if let Some(url) = repository.html_url.as_deref() {
        writeln!(writer, "URL: {url}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn write_issue_line<W: Write>(writer: &mut W, issue: &Issue) -> Result<(), ExplorerError> {
    let author = issue
        .author
        .as_ref()
        .map_or("unknown", |account| account.login.as_str());
    let kind = if issue.is_pull_request { " (pull request)" } else { "" };
    write!(
        writer,
        "  #{} [{}] {} (@{author}){kind}",
        issue.number,
        issue.state.as_str(),
        issue.title
    )
    .map_err(|e| io_error(&e))?;
    if !issue.labels.is_empty() {
        let labels: Vec<&str> = issue.labels.iter().map(|label| label.name.as_str()).collect();
        write!(writer, " [{}]", labels.join(", ")).map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ExplorerError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ExplorerError {
    ExplorerError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use repo_explorer::github::models::test_support::{issue_with_number, repository_named};
    use repo_explorer::{DetailState, IssuePage, IssueState, PerPage, SearchState};
    use repo_explorer::{IssueFilterState, IssueStats};

    use super::{write_repository_detail, write_search_results};

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut buffer = Vec::new();
        write(&mut buffer);
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn search_results_include_items_pagination_and_link() {
        let state = SearchState {
            query: "rust lang: rust".to_owned(),
            page: 2,
            per_page: PerPage::Ten,
            items: vec![repository_named(1, "octo", "repo")],
            total_count: 532,
            loading: false,
            error: None,
        };

        let output = render(|buffer| {
            write_search_results(buffer, &state).expect("should write search results");
        });

        assert!(
            output.contains("532 repositories found for \"rust lang: rust\""),
            "missing header: {output}"
        );
        assert!(output.contains("  octo/repo (0 stars"), "missing item: {output}");
        assert!(output.contains("Page 2 of 54"), "missing page line: {output}");
        assert!(
            output.contains("Link: ?q=rust+lang%3A+rust&page=2"),
            "missing link: {output}"
        );
    }

    #[test]
    fn search_error_replaces_results() {
        let state = SearchState {
            error: Some("GitHub API rate limit exceeded. Please try again later.".to_owned()),
            ..SearchState::default()
        };

        let output = render(|buffer| {
            write_search_results(buffer, &state).expect("should write search error");
        });

        assert_eq!(
            output,
            "Error: GitHub API rate limit exceeded. Please try again later.\n"
        );
    }

    #[test]
    fn detail_reports_failed_lane_and_derived_total() {
        let mut state = DetailState {
            filter: IssueFilterState {
                state: IssueState::Open,
                ..IssueFilterState::default()
            },
            ..DetailState::default()
        };
        state.repository.succeed(repository_named(1, "octo", "repo"));
        state.stats.succeed(IssueStats { open: 7, closed: 93 });
        state
            .issues
            .fail("GitHub API error: 502 - Bad Gateway".to_owned());

        let output = render(|buffer| {
            write_repository_detail(buffer, &state).expect("should write detail");
        });

        assert!(output.starts_with("octo/repo\n"), "missing header: {output}");
        assert!(output.contains("Issues: 7 open, 93 closed"), "missing stats: {output}");
        assert!(
            output.contains("  Issues error: GitHub API error: 502 - Bad Gateway"),
            "missing lane error: {output}"
        );
        assert!(output.contains("Page 1 of 1 (7 issues)"), "missing page line: {output}");
    }

    #[test]
    fn detail_lists_issues_with_labels() {
        let mut state = DetailState::default();
        state.issues.succeed(IssuePage {
            items: vec![issue_with_number(12)],
            ..IssuePage::default()
        });

        let output = render(|buffer| {
            write_repository_detail(buffer, &state).expect("should write detail");
        });

        assert!(
            output.contains("  #12 [open] Issue #12 (@unknown)"),
            "missing issue line: {output}"
        );
    }
}
