//! Integration tests for login URL construction

use super::*;
use github_oauth_integration::{ClientConfig, OAuthClient, ProviderEndpoints};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashMap;
use test_case::test_case;
use url::Url;

fn github_client() -> OAuthClient {
    OAuthClient::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI).expect("Failed to build client")
}

fn parse(url: &str) -> (Url, HashMap<String, String>) {
    let parsed = Url::parse(url).expect("login URL must be absolute");
    let query = parsed.query_pairs().into_owned().collect();
    (parsed, query)
}

#[test_case("state-123", true, &["repo", "user:email"], "repo user:email" ; "two scopes")]
#[test_case("s", false, &[], "" ; "no scopes")]
#[test_case("a b&c=d/é?", true, &["read:org"], "read:org" ; "state needing escapes")]
#[test_case("", false, &["gist", "notifications", "admin:repo_hook"], "gist notifications admin:repo_hook" ; "empty state")]
fn test_login_url_round_trips(state: &str, allow_signup: bool, scopes: &[&str], joined: &str) {
    let url = github_client().build_login_url(state, allow_signup, scopes.iter().copied());

    let (parsed, query) = parse(&url);
    assert_eq!(parsed.scheme(), "https");
    assert_eq!(parsed.host_str(), Some("github.com"));
    assert_eq!(parsed.path(), "/login/oauth/authorize");

    let expected: HashMap<String, String> = [
        ("client_id", CLIENT_ID),
        ("redirect_uri", REDIRECT_URI),
        ("scope", joined),
        ("state", state),
        ("allow_signup", if allow_signup { "true" } else { "false" }),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(query, expected);
}

proptest! {
    #[test]
    fn test_login_url_round_trips_any_input(
        state in any::<String>(),
        allow_signup in any::<bool>(),
        scopes in proptest::collection::vec("[a-z_:]{1,16}", 0..6),
    ) {
        let url = github_client().build_login_url(&state, allow_signup, scopes.clone());

        let (parsed, query) = parse(&url);
        prop_assert_eq!(parsed.path(), "/login/oauth/authorize");
        prop_assert_eq!(query.len(), 5);
        prop_assert_eq!(&query["client_id"], CLIENT_ID);
        prop_assert_eq!(&query["redirect_uri"], REDIRECT_URI);
        prop_assert_eq!(&query["state"], &state);
        prop_assert_eq!(&query["scope"], &scopes.join(" "));
        prop_assert_eq!(query["allow_signup"] == "true", allow_signup);
    }
}

#[test]
fn test_scope_is_space_joined() {
    let url = github_client().build_login_url("state", true, vec!["repo".to_string(), "user:email".to_string()]);
    let (_, query) = parse(&url);
    assert_eq!(query["scope"], "repo user:email");
}

#[test]
fn test_empty_scope_parameter_present() {
    let url = github_client().build_login_url("state", true, Vec::<String>::new());
    assert!(url.contains("scope=&") || url.ends_with("scope="));
}

#[test]
fn test_enterprise_login_url() {
    let mut config = ClientConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI);
    config.endpoints = ProviderEndpoints::enterprise("ghe.example.com");
    let client = OAuthClient::from_config(config).expect("Failed to build client");

    let url = client.build_login_url("state", false, ["repo"]);
    assert!(url.starts_with("https://ghe.example.com/login/oauth/authorize?"));
}

#[tokio::test]
async fn test_login_url_uses_configured_endpoint() {
    let mock_server = setup_mock_server().await;
    let url = client_for(&mock_server).build_login_url("state", true, ["repo"]);
    assert!(url.starts_with(&format!("{}/login/oauth/authorize?", mock_server.uri())));
}
