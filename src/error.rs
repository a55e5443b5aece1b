// SPDX-License-Identifier: MIT

//! Error types: the upstream fault model and the client-side error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One field-level diagnostic from an upstream fault body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultDetail {
    pub code: String,
    pub field: String,
    pub resource: String,
}

/// Structured error returned by the Strava API.
///
/// `http_status` is set from the HTTP response, never from the wire body;
/// it is `None` for faults that did not originate from a response (for
/// example an `error` value carried on the OAuth redirect).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fault {
    #[serde(skip)]
    pub http_status: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FaultDetail>,
}

impl Fault {
    /// A fault carrying only a message, with no HTTP status or field errors.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            http_status: None,
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "upstream fault (HTTP {}): {}", status, self.message)?,
            None => write!(f, "upstream fault: {}", self.message)?,
        }
        for detail in &self.errors {
            write!(
                f,
                "; {} {} is {}",
                detail.resource, detail.field, detail.code
            )?;
        }
        Ok(())
    }
}

/// Client error type.
///
/// The variants map one-to-one onto the distinguishable failure kinds a
/// caller needs to branch on: network trouble, an undecodable success body,
/// a structured upstream fault, the user declining consent, and a bad
/// configuration caught before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection, TLS, timeout, or cancellation failure. Never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Successful HTTP status, but the body did not decode as the expected
    /// JSON shape. Carries a truncated copy of the body.
    #[error("decode failure (HTTP {http_status})")]
    Decode { http_status: u16, body: String },

    /// Structured upstream error with status >= 400.
    #[error("{0}")]
    Api(Fault),

    /// The user refused consent on the authorization redirect.
    #[error("access_denied: the user declined authorization")]
    AccessDenied,

    /// Missing or invalid configuration, caught at construction time.
    #[error("missing required configuration: {0}")]
    Config(&'static str),
}

impl Error {
    /// HTTP status associated with this error, when one exists.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Decode { http_status, .. } => Some(*http_status),
            Error::Api(fault) => fault.http_status,
            _ => None,
        }
    }

    /// True when the user declined consent (`error=access_denied` on the
    /// redirect), so callers can render a dedicated UX for it.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::AccessDenied)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Form and JSON keys whose values must never reach a diagnostic sink.
const SENSITIVE_KEYS: [&str; 3] = ["client_secret", "access_token", "refresh_token"];

/// Replace the value following any secret-bearing key with `[redacted]`.
///
/// Applied to raw upstream bodies before they are embedded in a `Fault`
/// message or a `Decode` snippet. Handles both form-encoded
/// (`access_token=...&`) and JSON (`"access_token": "..."`) shapes.
pub(crate) fn scrub(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if let Some(key) = SENSITIVE_KEYS.iter().find(|k| input[i..].starts_with(**k)) {
            out.push_str(key);
            i += key.len();
            // Copy separators (quote, colon, equals, whitespace) verbatim.
            while let Some(c) = input[i..].chars().next() {
                if c == '"' || c == '\'' || c == '=' || c == ':' || c.is_whitespace() {
                    out.push(c);
                    i += c.len_utf8();
                } else {
                    break;
                }
            }
            // Mask the value up to the next delimiter.
            let mut masked = false;
            while let Some(c) = input[i..].chars().next() {
                if c == '&' || c == '"' || c == ',' || c == '}' || c.is_whitespace() {
                    break;
                }
                masked = true;
                i += c.len_utf8();
            }
            if masked {
                out.push_str("[redacted]");
            }
            continue;
        }
        match input[i..].chars().next() {
            Some(c) => {
                out.push(c);
                i += c.len_utf8();
            }
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_deserializes_wire_format() {
        let body = r#"{"errors":[{"code":"invalid","field":"access_token","resource":"Athlete"}],"message":"Authorization Error"}"#;
        let fault: Fault = serde_json::from_str(body).unwrap();
        assert_eq!(fault.message, "Authorization Error");
        assert_eq!(fault.errors.len(), 1);
        assert_eq!(fault.errors[0].code, "invalid");
        assert_eq!(fault.errors[0].field, "access_token");
        assert_eq!(fault.errors[0].resource, "Athlete");
        assert_eq!(fault.http_status, None);
    }

    #[test]
    fn test_fault_rejects_body_without_message() {
        // An arbitrary JSON object is not a fault; the transport falls back
        // to a synthetic fault in that case.
        assert!(serde_json::from_str::<Fault>("{}").is_err());
    }

    #[test]
    fn test_fault_display_includes_status_and_details() {
        let fault = Fault {
            http_status: Some(401),
            message: "Authorization Error".to_string(),
            errors: vec![FaultDetail {
                code: "invalid".to_string(),
                field: "code".to_string(),
                resource: "Application".to_string(),
            }],
        };
        let rendered = fault.to_string();
        assert!(rendered.contains("HTTP 401"));
        assert!(rendered.contains("Authorization Error"));
        assert!(rendered.contains("Application code is invalid"));
    }

    #[test]
    fn test_scrub_form_encoded() {
        let scrubbed = scrub("client_id=42&client_secret=hunter2&code=abc");
        assert_eq!(scrubbed, "client_id=42&client_secret=[redacted]&code=abc");
    }

    #[test]
    fn test_scrub_json_body() {
        let scrubbed = scrub(r#"{"access_token":"abc123","expires_at":1700000000}"#);
        assert!(!scrubbed.contains("abc123"));
        assert!(scrubbed.contains(r#""access_token":"[redacted]""#));
        assert!(scrubbed.contains("1700000000"));
    }

    #[test]
    fn test_scrub_leaves_plain_text_alone() {
        let text = "HTTP 500: upstream unavailable";
        assert_eq!(scrub(text), text);
    }

    #[test]
    fn test_access_denied_discriminator() {
        assert!(Error::AccessDenied.is_access_denied());
        assert!(!Error::Api(Fault::with_message("boom")).is_access_denied());
    }
}
