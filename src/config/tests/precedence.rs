//! Layer precedence tests.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"query": "default"})), ("file", json!({"query": "file"}))],
    "file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"query": "file"})), ("environment", json!({"query": "env"}))],
    "env",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"query": "env"})), ("cli", json!({"query": "cli"}))],
    "cli",
    "CLI should override environment"
)]
fn later_layers_win(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.query.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        (
            "defaults",
            json!({"per_page": 10, "issue_state": "all", "token": "default-token"}),
        ),
        ("file", json!({"per_page": 50, "issue_state": "closed"})),
        ("cli", json!({"issue_state": "open"})),
    ]);

    assert_eq!(config.per_page, 50, "file should override per_page");
    assert_eq!(config.issue_state, "open", "CLI should override issue_state");
    assert_eq!(
        config.token.as_deref(),
        Some("default-token"),
        "default token should be preserved"
    );
}

#[rstest]
fn missing_fields_fall_back_to_struct_defaults() {
    let config = build_config_from_layers(&[("cli", json!({"query": "tokio"}))]);

    assert_eq!(config.api_url, "https://api.github.com");
    assert_eq!(config.page, 1);
    assert_eq!(config.per_page, 10);
    assert_eq!(config.issue_state, "all");
    assert_eq!(config.sort, "stars");
}
