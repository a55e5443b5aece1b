// SPDX-License-Identifier: MIT

//! OAuth scopes: the closed set of permissions a user can grant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete permission requested from (or granted by) the user.
///
/// Scopes are transmitted as a comma-delimited string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "read_all")]
    ReadAll,
    #[serde(rename = "profile:read_all")]
    ProfileReadAll,
    #[serde(rename = "profile:write")]
    ProfileWrite,
    #[serde(rename = "activity:read")]
    ActivityRead,
    #[serde(rename = "activity:read_all")]
    ActivityReadAll,
    #[serde(rename = "activity:write")]
    ActivityWrite,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::Read => "read",
            Scope::ReadAll => "read_all",
            Scope::ProfileReadAll => "profile:read_all",
            Scope::ProfileWrite => "profile:write",
            Scope::ActivityRead => "activity:read",
            Scope::ActivityReadAll => "activity:read_all",
            Scope::ActivityWrite => "activity:write",
        }
    }

    /// Serialize a scope list as the comma-delimited wire form.
    pub fn join(scopes: &[Scope]) -> String {
        scopes
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse a comma-delimited scope string from the wire.
    ///
    /// Unknown or empty tokens are skipped with a warning rather than
    /// rejected, so a redirect carrying a scope this crate does not know
    /// about yet still completes the flow.
    pub fn parse_list(wire: &str) -> Vec<Scope> {
        wire.split(',')
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse() {
                Ok(scope) => Some(scope),
                Err(_) => {
                    tracing::warn!(scope = %token, "ignoring unrecognized scope token");
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a scope token is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized scope: {0}")]
pub struct ParseScopeError(pub String);

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "read" => Ok(Scope::Read),
            "read_all" => Ok(Scope::ReadAll),
            "profile:read_all" => Ok(Scope::ProfileReadAll),
            "profile:write" => Ok(Scope::ProfileWrite),
            "activity:read" => Ok(Scope::ActivityRead),
            "activity:read_all" => Ok(Scope::ActivityReadAll),
            "activity:write" => Ok(Scope::ActivityWrite),
            other => Err(ParseScopeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Scope; 7] = [
        Scope::Read,
        Scope::ReadAll,
        Scope::ProfileReadAll,
        Scope::ProfileWrite,
        Scope::ActivityRead,
        Scope::ActivityReadAll,
        Scope::ActivityWrite,
    ];

    #[test]
    fn test_round_trip_every_scope() {
        for scope in ALL {
            assert_eq!(scope.as_str().parse::<Scope>(), Ok(scope));
        }
    }

    #[test]
    fn test_join_then_parse_round_trips() {
        let list = vec![Scope::Read, Scope::ActivityWrite];
        assert_eq!(Scope::parse_list(&Scope::join(&list)), list);
        assert_eq!(Scope::join(&Scope::parse_list("read,activity:write")), "read,activity:write");
    }

    #[test]
    fn test_parse_list_skips_unknown_tokens() {
        assert_eq!(
            Scope::parse_list("read,not_a_scope,activity:read"),
            vec![Scope::Read, Scope::ActivityRead]
        );
    }

    #[test]
    fn test_parse_list_empty_string() {
        assert!(Scope::parse_list("").is_empty());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Scope::ProfileReadAll).unwrap();
        assert_eq!(json, "\"profile:read_all\"");
        let back: Scope = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Scope::ProfileReadAll);
    }
}
