// SPDX-License-Identifier: MIT

//! `segment_efforts` resource group.

use super::Page;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::SegmentEffort;

/// Get a segment effort by ID.
pub async fn get(client: &ApiClient, effort_id: u64) -> Result<SegmentEffort> {
    client
        .get(&format!("/segment_efforts/{effort_id}"), &[])
        .await
}

/// List the authenticated athlete's efforts on a segment, newest first.
pub async fn list(
    client: &ApiClient,
    segment_id: u64,
    page: Page,
) -> Result<Vec<SegmentEffort>> {
    client
        .get(&format!("/segments/{segment_id}/all_efforts"), &page.query())
        .await
}
