// SPDX-License-Identifier: MIT

//! Client library for the Strava v3 API.
//!
//! The crate is organized around stateless primitives:
//!
//! - [`oauth`] — the OAuth 2.0 authorization-code flow: configuration,
//!   authorization-URL construction, code exchange, refresh, revocation,
//!   and an axum redirect handler that bridges the browser flow to caller
//!   callbacks.
//! - [`webhook`] — the one-shot push-subscription verification handshake.
//! - [`api`] — per-resource request functions (`activities`, `athletes`,
//!   `clubs`, `gears`, `routes`, `segments`, `segment_efforts`,
//!   `streams`, `uploads`, `push_subscriptions`).
//! - [`models`] — typed records decoded from API responses.
//! - [`http`] — the underlying transport shared by all of the above.
//!
//! The library holds no long-lived token state: [`oauth::Authorization`]
//! records are owned by the caller, which is responsible for persisting
//! the (possibly rotating) refresh token and for validating the OAuth
//! `state` nonce on the redirect.

pub mod api;
pub mod error;
pub mod http;
pub mod models;
pub mod oauth;
pub mod webhook;

pub use error::{Error, Fault, FaultDetail, Result};
pub use http::{ApiClient, Transport};
pub use oauth::{
    authorize_url, Authorization, OAuthClient, OAuthConfig, Prompt, Scope, TokenStatus,
};
