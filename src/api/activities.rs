// SPDX-License-Identifier: MIT

//! `activities` resource group.

use super::Page;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{ActivityZone, Comment, DetailedActivity, Lap, SummaryActivity, SummaryAthlete};

/// Get a detailed activity by ID.
pub async fn get(client: &ApiClient, activity_id: u64) -> Result<DetailedActivity> {
    client.get(&format!("/activities/{activity_id}"), &[]).await
}

/// List the authenticated athlete's activities, optionally bounded by
/// `before`/`after` Unix timestamps.
pub async fn list(
    client: &ApiClient,
    before: Option<i64>,
    after: Option<i64>,
    page: Page,
) -> Result<Vec<SummaryActivity>> {
    let mut query: Vec<(&str, String)> = page.query().to_vec();
    if let Some(before) = before {
        query.push(("before", before.to_string()));
    }
    if let Some(after) = after {
        query.push(("after", after.to_string()));
    }
    client.get("/athlete/activities", &query).await
}

/// Create a manual activity.
pub async fn create(
    client: &ApiClient,
    name: &str,
    sport_type: &str,
    start_date_local: &str,
    elapsed_time_secs: i64,
    description: Option<&str>,
    distance_meters: Option<f64>,
) -> Result<DetailedActivity> {
    let mut form = vec![
        ("name", name.to_string()),
        ("sport_type", sport_type.to_string()),
        ("start_date_local", start_date_local.to_string()),
        ("elapsed_time", elapsed_time_secs.to_string()),
    ];
    if let Some(description) = description {
        form.push(("description", description.to_string()));
    }
    if let Some(distance) = distance_meters {
        form.push(("distance", distance.to_string()));
    }
    client.post_form("/activities", &form).await
}

/// Update an activity's name.
pub async fn update_name(
    client: &ApiClient,
    activity_id: u64,
    name: &str,
) -> Result<DetailedActivity> {
    client
        .put_json(
            &format!("/activities/{activity_id}"),
            serde_json::json!({ "name": name }),
        )
        .await
}

/// Update an activity's description.
pub async fn update_description(
    client: &ApiClient,
    activity_id: u64,
    description: &str,
) -> Result<DetailedActivity> {
    client
        .put_json(
            &format!("/activities/{activity_id}"),
            serde_json::json!({ "description": description }),
        )
        .await
}

/// List comments on an activity.
pub async fn comments(client: &ApiClient, activity_id: u64, page: Page) -> Result<Vec<Comment>> {
    client
        .get(&format!("/activities/{activity_id}/comments"), &page.query())
        .await
}

/// List athletes who kudoed an activity.
pub async fn kudoers(
    client: &ApiClient,
    activity_id: u64,
    page: Page,
) -> Result<Vec<SummaryAthlete>> {
    client
        .get(&format!("/activities/{activity_id}/kudos"), &page.query())
        .await
}

/// List an activity's laps.
pub async fn laps(client: &ApiClient, activity_id: u64) -> Result<Vec<Lap>> {
    client
        .get(&format!("/activities/{activity_id}/laps"), &[])
        .await
}

/// Get an activity's heart-rate and power zone distributions.
pub async fn zones(client: &ApiClient, activity_id: u64) -> Result<Vec<ActivityZone>> {
    client
        .get(&format!("/activities/{activity_id}/zones"), &[])
        .await
}
