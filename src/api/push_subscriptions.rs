// SPDX-License-Identifier: MIT

//! `push_subscriptions` resource group.
//!
//! Subscription management authenticates with the application's client ID
//! and secret rather than a bearer token, so these functions take the
//! [`OAuthClient`] instead of an [`crate::ApiClient`]. Creating a
//! subscription triggers the verification handshake served by
//! [`crate::webhook::subscription_routes`].

use crate::error::Result;
use crate::http::Body;
use crate::models::PushSubscription;
use crate::oauth::OAuthClient;
use reqwest::Method;

/// Create a push subscription. The upstream service immediately issues a
/// GET to `callback_url` carrying `verify_token`; the create call only
/// succeeds once that handshake completes.
pub async fn create(
    oauth: &OAuthClient,
    callback_url: &str,
    verify_token: &str,
) -> Result<PushSubscription> {
    let form = [
        ("client_id", oauth.config().client_id().to_string()),
        ("client_secret", oauth.config().client_secret().to_string()),
        ("callback_url", callback_url.to_string()),
        ("verify_token", verify_token.to_string()),
    ];
    oauth
        .transport()
        .execute(Method::POST, oauth.subscription_url(), None, Body::Form(&form))
        .await
}

/// List the application's push subscriptions (at most one upstream).
pub async fn list(oauth: &OAuthClient) -> Result<Vec<PushSubscription>> {
    let query = [
        ("client_id", oauth.config().client_id().to_string()),
        ("client_secret", oauth.config().client_secret().to_string()),
    ];
    oauth
        .transport()
        .execute(Method::GET, oauth.subscription_url(), None, Body::Form(&query))
        .await
}

/// Delete a push subscription.
pub async fn delete(oauth: &OAuthClient, subscription_id: u64) -> Result<()> {
    let query = [
        ("client_id", oauth.config().client_id().to_string()),
        ("client_secret", oauth.config().client_secret().to_string()),
    ];
    let url = format!("{}/{}", oauth.subscription_url(), subscription_id);
    oauth
        .transport()
        .execute_empty(Method::DELETE, &url, None, Body::Form(&query))
        .await
}
