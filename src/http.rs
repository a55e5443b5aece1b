// SPDX-License-Identifier: MIT

//! Stateless HTTP transport for the Strava API.
//!
//! Builds a request from method, URL, optional bearer token, and body,
//! executes it, and decodes either a JSON success body or a JSON fault
//! body. Holds no state beyond the shared `reqwest::Client`, which is safe
//! to reuse across concurrent requests.

use crate::error::{scrub, Error, Fault, Result};
use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Default base URL for the REST resource endpoints.
pub const API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Maximum bytes of an undecodable body carried into an error.
const BODY_SNIPPET_MAX: usize = 2048;

/// Request payload accepted by the transport.
///
/// Form pairs become an `application/x-www-form-urlencoded` body on POST
/// and PUT, and the query string on GET and DELETE. A JSON payload is sent
/// verbatim with `Content-Type: application/json`.
pub enum Body<'a> {
    None,
    Form(&'a [(&'a str, String)]),
    Json(serde_json::Value),
}

/// Stateless request executor wrapping a shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct Transport {
    http: reqwest::Client,
    timeout: Option<Duration>,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport around an existing client, so connection pools can
    /// be shared with the rest of the application.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            timeout: None,
        }
    }

    /// Set a per-request deadline. Requests that exceed it surface as
    /// [`Error::Transport`]. Dropping an in-flight future also cancels the
    /// underlying request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute a request and decode the JSON success body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Body<'_>,
    ) -> Result<T> {
        let response = self.send(method, url, token, body).await?;
        self.decode_success(response).await
    }

    /// Execute a request, checking only the HTTP status. The response body
    /// is ignored on success.
    pub async fn execute_empty(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Body<'_>,
    ) -> Result<()> {
        let response = self.send(method, url, token, body).await?;
        if response.status().is_client_error() || response.status().is_server_error() {
            return Err(self.fault_from(response).await);
        }
        Ok(())
    }

    /// Execute a request and return the raw success body (route exports).
    pub async fn execute_raw(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Body<'_>,
    ) -> Result<Vec<u8>> {
        let response = self.send(method, url, token, body).await?;
        if response.status().is_client_error() || response.status().is_server_error() {
            return Err(self.fault_from(response).await);
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Execute a multipart POST (activity-file uploads) and decode the JSON
    /// success body into `T`.
    pub async fn execute_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let mut request = self
            .http
            .post(url)
            .header(header::ACCEPT, "application/json")
            .multipart(form);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.decode_success(response).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Body<'_>,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(header::ACCEPT, "application/json");

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        // The Authorization header is omitted entirely when no token is
        // supplied; an empty bearer value would be rejected upstream.
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request = match body {
            Body::None => request,
            Body::Form(pairs) => {
                if method == Method::GET || method == Method::DELETE {
                    request.query(pairs)
                } else {
                    request.form(pairs)
                }
            }
            Body::Json(value) => request.json(&value),
        };

        Ok(request.send().await?)
    }

    async fn decode_success<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(self.fault_from(response).await);
        }

        let status = status.as_u16();
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(http_status = status, error = %err, "response body failed to decode");
            Error::Decode {
                http_status: status,
                body: scrub(&snippet(&bytes)),
            }
        })
    }

    /// Decode a fault body from an error response, falling back to a
    /// synthetic fault carrying the status and a truncated raw body.
    async fn fault_from(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Error::Transport(err),
        };

        match serde_json::from_slice::<Fault>(&bytes) {
            Ok(mut fault) => {
                fault.http_status = Some(status);
                Error::Api(fault)
            }
            Err(_) => Error::Api(Fault {
                http_status: Some(status),
                message: scrub(&snippet(&bytes)),
                errors: Vec::new(),
            }),
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Truncate a body to a bounded, lossily-decoded snippet.
fn snippet(bytes: &[u8]) -> String {
    let end = bytes.len().min(BODY_SNIPPET_MAX);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Bearer-authenticated client for the REST resource endpoints.
///
/// The per-resource modules under [`crate::api`] are plain functions
/// parameterized by a shared `&ApiClient`; the client itself only carries
/// the transport, the base URL, and the caller's access token.
#[derive(Clone)]
pub struct ApiClient {
    transport: Transport,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_transport(access_token, Transport::new())
    }

    pub fn with_transport(access_token: impl Into<String>, transport: Transport) -> Self {
        Self {
            transport,
            base_url: API_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Override the API base URL (tests point this at a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.transport
            .execute(
                Method::GET,
                &self.url(path),
                Some(&self.access_token),
                Body::Form(query),
            )
            .await
    }

    pub(crate) async fn get_raw(&self, path: &str) -> Result<Vec<u8>> {
        self.transport
            .execute_raw(
                Method::GET,
                &self.url(path),
                Some(&self.access_token),
                Body::None,
            )
            .await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T> {
        self.transport
            .execute(
                Method::POST,
                &self.url(path),
                Some(&self.access_token),
                Body::Form(form),
            )
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        self.transport
            .execute_multipart(&self.url(path), Some(&self.access_token), form)
            .await
    }

    pub(crate) async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T> {
        self.transport
            .execute(
                Method::PUT,
                &self.url(path),
                Some(&self.access_token),
                Body::Form(form),
            )
            .await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        self.transport
            .execute(
                Method::PUT,
                &self.url(path),
                Some(&self.access_token),
                Body::Json(body),
            )
            .await
    }

    pub(crate) async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        self.transport
            .execute_empty(
                Method::DELETE,
                &self.url(path),
                Some(&self.access_token),
                Body::Form(query),
            )
            .await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates_at_bound() {
        let body = vec![b'x'; BODY_SNIPPET_MAX + 100];
        assert_eq!(snippet(&body).len(), BODY_SNIPPET_MAX);
    }

    #[test]
    fn test_snippet_short_body_intact() {
        assert_eq!(snippet(b"hello"), "hello");
    }

    #[test]
    fn test_api_client_debug_elides_token() {
        let client = ApiClient::new("super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }
}
