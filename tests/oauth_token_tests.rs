// SPDX-License-Identifier: MIT

//! Integration tests for the token coordinator, against a stubbed
//! upstream token endpoint.

use serde_json::json;
use strava_client::oauth::{OAuthClient, OAuthConfig, Scope};
use strava_client::Error;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that carry no Authorization header at all.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn oauth_client(server: &MockServer) -> OAuthClient {
    let config = OAuthConfig::new(
        "42",
        "s",
        "https://app.example/cb",
        [Scope::Read, Scope::ActivityRead],
    )
    .expect("valid config");
    OAuthClient::new(config).with_base_url(&server.uri())
}

#[tokio::test]
async fn test_exchange_sends_exact_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string(
            "client_id=42&client_secret=s&code=abc&grant_type=authorization_code",
        ))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "expires_at": 1_700_000_000,
            "expires_in": 21600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .exchange("abc", &[Scope::Read])
        .await
        .expect("exchange should succeed");
    assert_eq!(auth.access_token, "A");
}

#[tokio::test]
async fn test_exchange_success_populates_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "expires_at": 1_700_000_000,
            "expires_in": 21600,
            "token_type": "Bearer",
            "athlete": {"id": 1}
        })))
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .exchange("c1", &[Scope::Read])
        .await
        .expect("exchange should succeed");

    assert_eq!(auth.access_token, "A");
    assert_eq!(auth.refresh_token, "R");
    assert_eq!(auth.expires_at, 1_700_000_000);
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.athlete.as_ref().map(|a| a.id), Some(1));
    // The token response carried no scope list, so the granted scopes
    // from the redirect win.
    assert_eq!(auth.scopes, vec![Scope::Read]);
}

#[tokio::test]
async fn test_exchange_prefers_explicit_scope_from_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "expires_at": 1_700_000_000,
            "expires_in": 21600,
            "token_type": "Bearer",
            "scope": "activity:read_all"
        })))
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .exchange("c1", &[Scope::Read])
        .await
        .expect("exchange should succeed");
    assert_eq!(auth.scopes, vec![Scope::ActivityReadAll]);
}

#[tokio::test]
async fn test_refresh_rotates_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string(
            "client_id=42&client_secret=s&refresh_token=R0&grant_type=refresh_token",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "expires_at": 1_700_010_000,
            "expires_in": 21600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .refresh("R0")
        .await
        .expect("refresh should succeed");

    assert_eq!(auth.access_token, "A1");
    assert_eq!(auth.refresh_token, "R1");
    assert_eq!(auth.expires_at, 1_700_010_000);
    assert!(auth.athlete.is_none());
}

#[tokio::test]
async fn test_refresh_carries_input_token_forward_when_response_omits_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "expires_at": 1_700_010_000,
            "expires_in": 21600,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .refresh("R0")
        .await
        .expect("refresh should succeed");
    assert_eq!(auth.refresh_token, "R0");
}

#[tokio::test]
async fn test_refresh_ignores_athlete_if_present() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "expires_at": 1_700_010_000,
            "expires_in": 21600,
            "token_type": "Bearer",
            "athlete": {"id": 9}
        })))
        .mount(&server)
        .await;

    let auth = oauth_client(&server)
        .refresh("R0")
        .await
        .expect("refresh should succeed");
    assert!(auth.athlete.is_none());
}

#[tokio::test]
async fn test_fault_propagation_preserves_wire_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [
                {"code": "invalid", "field": "access_token", "resource": "Athlete"}
            ],
            "message": "Authorization Error"
        })))
        .mount(&server)
        .await;

    let err = oauth_client(&server)
        .exchange("bad", &[])
        .await
        .expect_err("exchange should fail");

    match err {
        Error::Api(fault) => {
            assert_eq!(fault.http_status, Some(401));
            assert_eq!(fault.message, "Authorization Error");
            assert_eq!(fault.errors.len(), 1);
            assert_eq!(fault.errors[0].code, "invalid");
            assert_eq!(fault.errors[0].field, "access_token");
            assert_eq!(fault.errors[0].resource, "Athlete");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_becomes_synthetic_fault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = oauth_client(&server)
        .exchange("c1", &[])
        .await
        .expect_err("exchange should fail");

    match err {
        Error::Api(fault) => {
            assert_eq!(fault.http_status, Some(502));
            assert!(fault.message.contains("bad gateway"));
            assert!(fault.errors.is_empty());
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_decode_error_on_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = oauth_client(&server)
        .exchange("c1", &[])
        .await
        .expect_err("exchange should fail");

    match err {
        Error::Decode { http_status, body } => {
            assert_eq!(http_status, 200);
            assert_eq!(body, "not json");
        }
        other => panic!("expected Error::Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn test_revoke_posts_access_token_and_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/deauthorize"))
        .and(body_string("access_token=A"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_string("whatever"))
        .expect(1)
        .mount(&server)
        .await;

    oauth_client(&server)
        .revoke("A")
        .await
        .expect("revoke should succeed");
}

#[tokio::test]
async fn test_revoke_surfaces_fault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/deauthorize"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Authorization Error",
            "errors": []
        })))
        .mount(&server)
        .await;

    let err = oauth_client(&server)
        .revoke("A")
        .await
        .expect_err("revoke should fail");
    assert_eq!(err.http_status(), Some(401));
}
