// SPDX-License-Identifier: MIT

//! Redirect handler bridging the browser OAuth flow to caller callbacks.

use super::{OAuthClient, Scope};
use crate::error::{Error, Fault};
use axum::{
    extract::Query,
    http::request::Parts,
    response::Response,
    routing::{get, MethodRouter},
};
use serde::Deserialize;

/// Query parameters the upstream consent page sends on the redirect back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    /// Opaque state nonce, echoed from the authorization URL.
    #[serde(default)]
    pub state: Option<String>,
    /// Comma-delimited scopes the user actually granted.
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Build the GET route for the OAuth redirect callback.
///
/// The handler classifies the redirect and invokes exactly one of the two
/// callbacks per request:
///
/// - `error=access_denied` routes [`Error::AccessDenied`] to `on_error`
///   without touching the token endpoint;
/// - any other `error` value becomes a fault with that value as message;
/// - otherwise the authorization code is exchanged, with the redirect's
///   `scope` list recorded on the resulting [`super::Authorization`], and
///   either `on_success` or `on_error` receives the outcome.
///
/// Both callbacks receive the request parts and produce the HTTP response;
/// the handler writes nothing itself. The `state` parameter is passed
/// through opaquely in the request parts: **comparing it against the nonce
/// issued at [`super::authorize_url`] time is the caller's responsibility**
/// (CSRF mitigation is deliberately not performed here).
///
/// ```no_run
/// use axum::{response::IntoResponse, Router};
/// use strava_client::oauth::{callback_routes, OAuthClient, OAuthConfig, Scope};
///
/// let config = OAuthConfig::new("42", "secret", "https://app.example/cb", [Scope::Read])?;
/// let oauth = OAuthClient::new(config);
/// let app: Router = Router::new().route(
///     "/cb",
///     callback_routes(
///         oauth,
///         |auth, _parts| format!("signed in, expires {}", auth.expires_at).into_response(),
///         |err, _parts| format!("sign-in failed: {err}").into_response(),
///     ),
/// );
/// # Ok::<(), strava_client::Error>(())
/// ```
pub fn callback_routes<S, E>(oauth: OAuthClient, on_success: S, on_error: E) -> MethodRouter
where
    S: Fn(super::Authorization, &Parts) -> Response + Clone + Send + Sync + 'static,
    E: Fn(Error, &Parts) -> Response + Clone + Send + Sync + 'static,
{
    get(move |parts: Parts| {
        let oauth = oauth.clone();
        let on_success = on_success.clone();
        let on_error = on_error.clone();
        async move { handle(oauth, on_success, on_error, parts).await }
    })
}

async fn handle<S, E>(oauth: OAuthClient, on_success: S, on_error: E, parts: Parts) -> Response
where
    S: Fn(super::Authorization, &Parts) -> Response,
    E: Fn(Error, &Parts) -> Response,
{
    let query = match Query::<CallbackQuery>::try_from_uri(&parts.uri) {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed redirect query");
            return on_error(
                Error::Api(Fault::with_message("malformed redirect query")),
                &parts,
            );
        }
    };

    if let Some(error) = query.error {
        if error == "access_denied" {
            tracing::info!("user declined authorization");
            return on_error(Error::AccessDenied, &parts);
        }
        tracing::warn!(error = %error, "authorization redirect carried an error");
        return on_error(Error::Api(Fault::with_message(error)), &parts);
    }

    let Some(code) = query.code else {
        tracing::warn!("redirect missing authorization code");
        return on_error(
            Error::Api(Fault::with_message("missing code parameter")),
            &parts,
        );
    };

    let granted = query
        .scope
        .as_deref()
        .map(Scope::parse_list)
        .unwrap_or_default();

    match oauth.exchange(&code, &granted).await {
        Ok(authorization) => on_success(authorization, &parts),
        Err(err) => {
            tracing::warn!(error = %err, "authorization code exchange failed");
            on_error(err, &parts)
        }
    }
}
