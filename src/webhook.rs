// SPDX-License-Identifier: MIT

//! Push-subscription verification handshake.
//!
//! When a subscription is created, the upstream service issues one GET to
//! the callback URL with `hub.mode=subscribe`, the configured verify
//! token, and a challenge nonce. The handler echoes the challenge back on
//! a token match and rejects everything else with 400.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json,
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// Verification query parameters.
#[derive(Debug, Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode", default)]
    mode: String,
    #[serde(rename = "hub.challenge", default)]
    challenge: String,
    #[serde(rename = "hub.verify_token", default)]
    verify_token: String,
}

/// Challenge echo body.
#[derive(Serialize)]
struct VerifyResponse {
    #[serde(rename = "hub.challenge")]
    challenge: String,
}

/// Build the GET route for the subscription verification handshake.
///
/// `verify_token` is the value passed to the subscription-create call; it
/// is compared in constant time so the response duration does not leak
/// how much of a guessed token matched.
pub fn subscription_routes(verify_token: impl Into<String>) -> MethodRouter {
    let expected = verify_token.into();
    get(move |Query(params): Query<VerifyParams>| {
        let expected = expected.clone();
        async move { verify(&expected, params) }
    })
}

fn verify(expected: &str, params: VerifyParams) -> Response {
    if params.mode != "subscribe" || !token_matches(expected, &params.verify_token) {
        tracing::warn!(mode = %params.mode, "subscription verification failed");
        return StatusCode::BAD_REQUEST.into_response();
    }

    tracing::info!("push subscription verified");
    (
        StatusCode::OK,
        Json(VerifyResponse {
            challenge: params.challenge,
        }),
    )
        .into_response()
}

/// Constant-time token comparison; unequal lengths compare unequal
/// without inspecting content.
fn token_matches(expected: &str, received: &str) -> bool {
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches_equal() {
        assert!(token_matches("verify_me", "verify_me"));
    }

    #[test]
    fn test_token_matches_rejects_same_length_difference() {
        assert!(!token_matches("verify_me", "verify_mX"));
    }

    #[test]
    fn test_token_matches_rejects_length_mismatch() {
        assert!(!token_matches("verify_me", "verify"));
        assert!(!token_matches("verify_me", ""));
    }

    #[test]
    fn test_verify_rejects_wrong_mode() {
        let response = verify(
            "tok",
            VerifyParams {
                mode: "unsubscribe".to_string(),
                challenge: "NONCE".to_string(),
                verify_token: "tok".to_string(),
            },
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_verify_accepts_and_echoes_challenge() {
        let response = verify(
            "tok",
            VerifyParams {
                mode: "subscribe".to_string(),
                challenge: "NONCE".to_string(),
                verify_token: "tok".to_string(),
            },
        );
        assert_eq!(response.status(), StatusCode::OK);
    }
}
