// SPDX-License-Identifier: MIT

//! `segments` resource group.

use super::Page;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{DetailedSegment, ExplorerResponse, SummarySegment};

/// Get a segment by ID.
pub async fn get(client: &ApiClient, segment_id: u64) -> Result<DetailedSegment> {
    client.get(&format!("/segments/{segment_id}"), &[]).await
}

/// List the authenticated athlete's starred segments.
pub async fn starred(client: &ApiClient, page: Page) -> Result<Vec<SummarySegment>> {
    client.get("/segments/starred", &page.query()).await
}

/// Star or unstar a segment.
pub async fn star(
    client: &ApiClient,
    segment_id: u64,
    starred: bool,
) -> Result<DetailedSegment> {
    client
        .put_form(
            &format!("/segments/{segment_id}/starred"),
            &[("starred", starred.to_string())],
        )
        .await
}

/// Explore popular segments inside a bounding box.
///
/// `bounds` is `[sw_lat, sw_lng, ne_lat, ne_lng]`; `activity_type` is
/// `running` or `riding`; the climb-category bounds only apply to riding.
pub async fn explore(
    client: &ApiClient,
    bounds: [f64; 4],
    activity_type: Option<&str>,
    min_climb_category: Option<u8>,
    max_climb_category: Option<u8>,
) -> Result<ExplorerResponse> {
    let mut query: Vec<(&str, String)> = vec![(
        "bounds",
        bounds
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )];
    if let Some(activity_type) = activity_type {
        query.push(("activity_type", activity_type.to_string()));
    }
    if let Some(min) = min_climb_category {
        query.push(("min_cat", min.to_string()));
    }
    if let Some(max) = max_climb_category {
        query.push(("max_cat", max.to_string()));
    }
    client.get("/segments/explore", &query).await
}
