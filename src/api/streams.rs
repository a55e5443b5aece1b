// SPDX-License-Identifier: MIT

//! `streams` resource group.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::StreamSet;

fn keys_query(keys: &[&str]) -> [(&'static str, String); 2] {
    [
        ("keys", keys.join(",")),
        ("key_by_type", "true".to_string()),
    ]
}

/// Get an activity's streams for the requested keys (for example
/// `["time", "distance", "latlng"]`).
pub async fn activity(client: &ApiClient, activity_id: u64, keys: &[&str]) -> Result<StreamSet> {
    client
        .get(&format!("/activities/{activity_id}/streams"), &keys_query(keys))
        .await
}

/// Get a segment's streams. Only `distance`, `latlng`, and `altitude`
/// are available upstream.
pub async fn segment(client: &ApiClient, segment_id: u64, keys: &[&str]) -> Result<StreamSet> {
    client
        .get(&format!("/segments/{segment_id}/streams"), &keys_query(keys))
        .await
}

/// Get a segment effort's streams, trimmed to the effort's window.
pub async fn segment_effort(
    client: &ApiClient,
    effort_id: u64,
    keys: &[&str],
) -> Result<StreamSet> {
    client
        .get(
            &format!("/segment_efforts/{effort_id}/streams"),
            &keys_query(keys),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_query_joins_with_commas() {
        let query = keys_query(&["time", "latlng"]);
        assert_eq!(query[0], ("keys", "time,latlng".to_string()));
        assert_eq!(query[1], ("key_by_type", "true".to_string()));
    }
}
