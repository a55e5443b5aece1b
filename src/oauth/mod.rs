// SPDX-License-Identifier: MIT

//! OAuth 2.0 authorization-code flow.
//!
//! Stateless primitives only: the caller owns state-nonce generation and
//! validation, token persistence, and any auto-refresh policy. The pieces
//! here are the immutable [`OAuthConfig`], the [`authorize_url`] builder,
//! the [`OAuthClient`] token coordinator, and the axum redirect handler in
//! [`callback`].

pub mod callback;
pub mod scope;
pub mod token;

pub use callback::{callback_routes, CallbackQuery};
pub use scope::{ParseScopeError, Scope};
pub use token::{Authorization, OAuthClient, TokenStatus, DEFAULT_EXPIRY_MARGIN_SECS};

use crate::error::{Error, Result};
use std::fmt;

/// Browser-facing authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";
/// Token exchange and refresh endpoint.
pub const TOKEN_URL: &str = "https://www.strava.com/oauth/token";
/// Revocation endpoint.
pub const DEAUTHORIZE_URL: &str = "https://www.strava.com/oauth/deauthorize";

/// Consent prompt policy, mapped to the `approval_prompt` query parameter.
///
/// Always sent explicitly; `auto` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Prompt {
    #[default]
    Auto,
    Force,
}

impl Prompt {
    pub const fn as_str(self) -> &'static str {
        match self {
            Prompt::Auto => "auto",
            Prompt::Force => "force",
        }
    }
}

/// Immutable OAuth application credentials and default scope set.
///
/// Constructed once and shared; the client secret is held privately and
/// elided from `Debug` output.
#[derive(Clone)]
pub struct OAuthConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<Scope>,
}

impl OAuthConfig {
    /// Build a configuration, validating that the client ID, client secret,
    /// and redirect URI are non-empty. Duplicate scopes are removed with
    /// the original order preserved.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        let redirect_uri = redirect_uri.into();

        if client_id.is_empty() {
            return Err(Error::Config("client_id"));
        }
        if client_secret.is_empty() {
            return Err(Error::Config("client_secret"));
        }
        if redirect_uri.is_empty() {
            return Err(Error::Config("redirect_uri"));
        }

        let mut deduped = Vec::new();
        for scope in scopes {
            if !deduped.contains(&scope) {
                deduped.push(scope);
            }
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            scopes: deduped,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Build the browser-facing authorization URL.
///
/// Query parameters appear in canonical order: `response_type=code`,
/// `client_id`, `redirect_uri`, `scope`, `approval_prompt`, then `state`
/// if (and only if) `state` is non-empty. The state nonce is passed
/// through verbatim; this builder neither generates nor validates it.
/// The client secret never appears in the URL.
pub fn authorize_url(config: &OAuthConfig, state: &str, prompt: Prompt) -> String {
    let mut url = format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&approval_prompt={}",
        AUTHORIZE_URL,
        urlencoding::encode(&config.client_id),
        urlencoding::encode(&config.redirect_uri),
        urlencoding::encode(&Scope::join(&config.scopes)),
        prompt.as_str(),
    );

    if !state.is_empty() {
        url.push_str("&state=");
        url.push_str(&urlencoding::encode(state));
    }

    url
}
