//! Test helpers for constructing repository and issue fixtures.
//!
//! The `*_json` helpers produce GitHub-shaped payloads for mock servers; the
//! remaining helpers build domain snapshots directly.
//!
//! # Examples
//!
//! ```
//! use repo_explorer::github::models::test_support::{issue_with_number, repository_named};
//!
//! let repository = repository_named(1, "octo", "repo");
//! assert_eq!(repository.full_name, "octo/repo");
//!
//! let issue = issue_with_number(7);
//! assert_eq!(issue.number, 7);
//! ```

use serde_json::{Value, json};

use super::{Account, Issue, IssueStatus, Repository};

/// Builds a repository snapshot with the given identity.
#[must_use]
pub fn repository_named(id: u64, owner: &str, name: &str) -> Repository {
    Repository {
        id,
        name: name.to_owned(),
        full_name: format!("{owner}/{name}"),
        owner: Account {
            login: owner.to_owned(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Builds an open issue with the given number.
#[must_use]
pub fn issue_with_number(number: u64) -> Issue {
    Issue {
        id: number.saturating_add(1000),
        number,
        title: format!("Issue #{number}"),
        state: IssueStatus::Open,
        ..Default::default()
    }
}

/// GitHub repository payload.
#[must_use]
pub fn repository_json(id: u64, owner: &str, name: &str, stars: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": format!("{name} description"),
        "stargazers_count": stars,
        "forks_count": 1,
        "open_issues_count": 0,
        "watchers_count": stars,
        "language": "Rust",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z",
        "owner": {
            "login": owner,
            "avatar_url": format!("https://avatars.example/{owner}"),
            "html_url": format!("https://github.com/{owner}")
        }
    })
}

/// Repository search payload with `count` items starting at `first_id`.
#[must_use]
pub fn repository_search_json(total_count: u64, first_id: u64, count: u64) -> Value {
    let items: Vec<Value> = (first_id..first_id.saturating_add(count))
        .map(|id| repository_json(id, "octo", &format!("repo-{id}"), 1000_u64.saturating_sub(id)))
        .collect();
    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": items
    })
}

/// GitHub issue payload.
#[must_use]
pub fn issue_json(number: u64, state: &str) -> Value {
    json!({
        "id": number.saturating_add(1000),
        "number": number,
        "title": format!("Issue #{number}"),
        "state": state,
        "html_url": format!("https://github.com/octo/repo/issues/{number}"),
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "user": { "login": "reporter" },
        "body": null,
        "labels": [
            { "id": 1, "name": "bug", "color": "d73a4a", "description": "Something is broken" }
        ],
        "comments": 0
    })
}

/// Issue search payload carrying only a total.
#[must_use]
pub fn issue_count_json(total_count: u64) -> Value {
    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": []
    })
}
