//! Integration tests for the profile lookup

use super::*;
use github_oauth_integration::{AccessToken, OAuthError, Operation, ParseError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_fetch_profile_success() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 1,
            "message": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = client_for(&mock_server)
        .fetch_user_profile(&AccessToken::new("abc123"))
        .await
        .expect("profile fetch should succeed");

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.id, 1);
}

#[tokio::test]
async fn test_token_sent_only_in_header() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "octocat", "id": 1})))
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .fetch_user_profile(&AccessToken::new("gho_secret"))
        .await
        .expect("profile fetch should succeed");

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.url.query(), None);
    let authorization = request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok());
    assert_eq!(authorization, Some("token gho_secret"));
    assert!(request.headers.get("user-agent").is_some());
}

#[tokio::test]
async fn test_bad_credentials_is_api_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_user_profile(&AccessToken::new("revoked"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OAuthError::Api {
            operation: Operation::FetchUserProfile,
            ..
        }
    ));
    assert_eq!(err.api_message(), Some("Bad credentials"));
}

#[tokio::test]
async fn test_unauthorized_status_with_message_is_api_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest",
            "status": "401"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_user_profile(&AccessToken::new("revoked"))
        .await
        .unwrap_err();

    assert_eq!(err.api_message(), Some("Bad credentials"));
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"login\": "))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_user_profile(&AccessToken::new("abc123"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OAuthError::Parse {
            operation: Operation::FetchUserProfile,
            source: ParseError::Json(_),
        }
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let err = unreachable_client()
        .fetch_user_profile(&AccessToken::new("abc123"))
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.operation(), Some(Operation::FetchUserProfile));
}

#[tokio::test]
async fn test_full_flow() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("access_token=gho_flow&token_type=bearer"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "token gho_flow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231,
            "type": "User",
            "public_repos": 8,
            "created_at": "2011-01-25T18:44:36Z"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let login_url = client.build_login_url("flow-state", true, ["read:user"]);
    assert!(login_url.contains("state=flow-state"));

    let token = client
        .exchange_code_for_token("flow-code", "flow-state")
        .await
        .and_then(AccessToken::ensure_present)
        .expect("token issued");
    let profile = client.fetch_user_profile(&token).await.expect("profile");

    assert_eq!(profile.id, 583231);
    assert_eq!(profile.user_type, "User");
    assert_eq!(profile.public_repos, 8);
    assert!(profile.created_at_utc().is_some());
}
