// SPDX-License-Identifier: MIT

//! Token coordinator: authorization-code exchange, refresh, and revocation.

use super::{OAuthConfig, Scope, DEAUTHORIZE_URL, TOKEN_URL};
use crate::error::Result;
use crate::http::{Body, Transport};
use crate::models::SummaryAthlete;
use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin before expiry at which a token is reported as `Expiring`
/// (5 minutes).
pub const DEFAULT_EXPIRY_MARGIN_SECS: i64 = 5 * 60;

/// Default path under the API base for push-subscription management.
pub(crate) const SUBSCRIPTION_URL: &str = "https://www.strava.com/api/v3/push_subscriptions";

/// Lifecycle state of an [`Authorization`], derived from the clock.
///
/// `Valid -> Expiring -> Expired` by time passage; any state returns to
/// `Valid` through a successful refresh, and reaches `Revoked` through
/// [`Authorization::mark_revoked`] after a successful revocation. The
/// coordinator never refreshes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expiring,
    Expired,
    Revoked,
}

/// Result of a successful token exchange or refresh, owned by the caller.
///
/// `refresh_token` may rotate on every refresh; always persist the most
/// recent value. `athlete` is populated only by the exchange step, never
/// by refresh, so preserve it from the original exchange if needed.
#[derive(Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry instant, seconds since the Unix epoch.
    pub expires_at: i64,
    /// Seconds between issuance and expiry; informational.
    pub expires_in: i64,
    /// Expected value `Bearer`.
    pub token_type: String,
    pub athlete: Option<SummaryAthlete>,
    /// Scopes the user actually granted; may be a subset of those
    /// requested.
    pub scopes: Vec<Scope>,
    #[serde(skip)]
    revoked: bool,
}

impl Authorization {
    /// Lifecycle state at `now`, with an `Expiring` window of
    /// `margin_secs` before the expiry instant.
    pub fn status_at(&self, now: DateTime<Utc>, margin_secs: i64) -> TokenStatus {
        if self.revoked {
            return TokenStatus::Revoked;
        }
        let expires = DateTime::<Utc>::from_timestamp(self.expires_at, 0).unwrap_or_default();
        if now >= expires {
            TokenStatus::Expired
        } else if now + Duration::seconds(margin_secs) >= expires {
            TokenStatus::Expiring
        } else {
            TokenStatus::Valid
        }
    }

    /// Lifecycle state now, using [`DEFAULT_EXPIRY_MARGIN_SECS`].
    pub fn status(&self) -> TokenStatus {
        self.status_at(Utc::now(), DEFAULT_EXPIRY_MARGIN_SECS)
    }

    /// Record a successful revocation. The tokens are dead upstream; this
    /// only updates the local lifecycle state.
    pub fn mark_revoked(&mut self) {
        self.revoked = true;
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("access_token", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("athlete", &self.athlete)
            .field("scopes", &self.scopes)
            .field("revoked", &self.revoked)
            .finish()
    }
}

/// Wire shape of the token endpoint response.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_at: i64,
    #[serde(default)]
    expires_in: i64,
    token_type: String,
    #[serde(default)]
    athlete: Option<SummaryAthlete>,
    /// The token endpoint does not normally return scopes; honored if it
    /// ever does.
    #[serde(default)]
    scope: Option<String>,
}

/// Coordinator for the three token operations.
///
/// Stateless and cheap to clone; all operations are safe to invoke
/// concurrently since the only shared resource is the underlying
/// `reqwest::Client`.
#[derive(Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    transport: Transport,
    token_url: String,
    deauthorize_url: String,
    subscription_url: String,
}

impl OAuthClient {
    pub fn new(config: OAuthConfig) -> Self {
        Self::with_transport(config, Transport::new())
    }

    pub fn with_transport(config: OAuthConfig, transport: Transport) -> Self {
        Self {
            config,
            transport,
            token_url: TOKEN_URL.to_string(),
            deauthorize_url: DEAUTHORIZE_URL.to_string(),
            subscription_url: SUBSCRIPTION_URL.to_string(),
        }
    }

    /// Point every upstream endpoint at `base_url` (tests point this at a
    /// local stub server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.token_url = format!("{base_url}/oauth/token");
        self.deauthorize_url = format!("{base_url}/oauth/deauthorize");
        self.subscription_url = format!("{base_url}/api/v3/push_subscriptions");
        self
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) fn subscription_url(&self) -> &str {
        &self.subscription_url
    }

    /// Exchange an authorization code for an [`Authorization`].
    ///
    /// `granted_scopes` is the scope list the user actually consented to,
    /// parsed from the redirect's `scope` parameter; it becomes the
    /// authorization's scope set unless the token response itself carries
    /// an explicit list.
    pub async fn exchange(&self, code: &str, granted_scopes: &[Scope]) -> Result<Authorization> {
        let form = [
            ("client_id", self.config.client_id().to_string()),
            ("client_secret", self.config.client_secret().to_string()),
            ("code", code.to_string()),
            ("grant_type", "authorization_code".to_string()),
        ];

        let response: TokenResponse = self
            .transport
            .execute(Method::POST, &self.token_url, None, Body::Form(&form))
            .await?;

        let scopes = match &response.scope {
            Some(wire) => Scope::parse_list(wire),
            None => granted_scopes.to_vec(),
        };

        let authorization = Authorization {
            access_token: response.access_token,
            refresh_token: response.refresh_token.unwrap_or_default(),
            expires_at: response.expires_at,
            expires_in: response.expires_in,
            token_type: response.token_type,
            athlete: response.athlete,
            scopes,
            revoked: false,
        };

        warn_if_already_expired(&authorization);
        tracing::info!(
            athlete_id = authorization.athlete.as_ref().map(|a| a.id),
            expires_at = authorization.expires_at,
            "authorization code exchanged"
        );

        Ok(authorization)
    }

    /// Obtain a fresh access token from a refresh token.
    ///
    /// The returned `refresh_token` may differ from the input; the caller
    /// must replace its stored value. If the response omits one, the input
    /// token is carried forward. `athlete` is never populated here.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Authorization> {
        let form = [
            ("client_id", self.config.client_id().to_string()),
            ("client_secret", self.config.client_secret().to_string()),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response: TokenResponse = self
            .transport
            .execute(Method::POST, &self.token_url, None, Body::Form(&form))
            .await?;

        let authorization = Authorization {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .unwrap_or_else(|| refresh_token.to_string()),
            expires_at: response.expires_at,
            expires_in: response.expires_in,
            token_type: response.token_type,
            athlete: None,
            scopes: response
                .scope
                .as_deref()
                .map(Scope::parse_list)
                .unwrap_or_default(),
            revoked: false,
        };

        warn_if_already_expired(&authorization);
        tracing::info!(expires_at = authorization.expires_at, "access token refreshed");

        Ok(authorization)
    }

    /// Revoke an access token.
    ///
    /// Invalidates the access and refresh tokens upstream and removes the
    /// application from the user's settings. The response body is ignored
    /// on HTTP success.
    pub async fn revoke(&self, access_token: &str) -> Result<()> {
        let form = [("access_token", access_token.to_string())];

        self.transport
            .execute_empty(Method::POST, &self.deauthorize_url, None, Body::Form(&form))
            .await?;

        tracing::info!("access token revoked");
        Ok(())
    }
}

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("config", &self.config)
            .field("token_url", &self.token_url)
            .finish()
    }
}

/// Tolerate up to 5s of clock skew between us and the upstream issuer.
const ISSUE_SKEW_SECS: i64 = 5;

fn warn_if_already_expired(authorization: &Authorization) {
    let now = Utc::now().timestamp();
    if authorization.expires_at <= now - ISSUE_SKEW_SECS {
        tracing::warn!(
            expires_at = authorization.expires_at,
            "token endpoint returned an already-expired authorization"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(expires_at: i64) -> Authorization {
        Authorization {
            access_token: "A".to_string(),
            refresh_token: "R".to_string(),
            expires_at,
            expires_in: 21600,
            token_type: "Bearer".to_string(),
            athlete: None,
            scopes: vec![Scope::Read],
            revoked: false,
        }
    }

    #[test]
    fn test_status_valid_before_margin() {
        let now = Utc::now();
        let auth = authorization(now.timestamp() + 3600);
        assert_eq!(auth.status_at(now, DEFAULT_EXPIRY_MARGIN_SECS), TokenStatus::Valid);
    }

    #[test]
    fn test_status_expiring_within_margin() {
        let now = Utc::now();
        let auth = authorization(now.timestamp() + 60);
        assert_eq!(
            auth.status_at(now, DEFAULT_EXPIRY_MARGIN_SECS),
            TokenStatus::Expiring
        );
    }

    #[test]
    fn test_status_expired_at_and_after_expiry() {
        let now = Utc::now();
        let at_expiry = authorization(now.timestamp());
        let past_expiry = authorization(now.timestamp() - 10);
        assert_eq!(
            at_expiry.status_at(now, DEFAULT_EXPIRY_MARGIN_SECS),
            TokenStatus::Expired
        );
        assert_eq!(
            past_expiry.status_at(now, DEFAULT_EXPIRY_MARGIN_SECS),
            TokenStatus::Expired
        );
    }

    #[test]
    fn test_status_revoked_wins_over_time() {
        let now = Utc::now();
        let mut auth = authorization(now.timestamp() + 3600);
        auth.mark_revoked();
        assert_eq!(
            auth.status_at(now, DEFAULT_EXPIRY_MARGIN_SECS),
            TokenStatus::Revoked
        );
    }

    #[test]
    fn test_debug_elides_tokens() {
        let auth = authorization(1_700_000_000);
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("\"A\""));
        assert!(!debug.contains("\"R\""));
        assert!(debug.contains("[redacted]"));
        assert!(debug.contains("1700000000"));
    }

    #[test]
    fn test_token_response_tolerates_missing_refresh_token() {
        let body = r#"{"access_token":"A1","expires_at":1700010000,"expires_in":21600,"token_type":"Bearer"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.refresh_token, None);
        assert_eq!(response.access_token, "A1");
    }
}
