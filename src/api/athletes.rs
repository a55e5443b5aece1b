// SPDX-License-Identifier: MIT

//! `athletes` resource group.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{ActivityStats, DetailedAthlete, Zones};

/// Get the authenticated athlete's profile.
pub async fn get_authenticated(client: &ApiClient) -> Result<DetailedAthlete> {
    client.get("/athlete", &[]).await
}

/// Update the authenticated athlete's weight (kilograms). Weight is the
/// only field the upstream allows updating here.
pub async fn update_weight(client: &ApiClient, weight_kg: f64) -> Result<DetailedAthlete> {
    client
        .put_form("/athlete", &[("weight", weight_kg.to_string())])
        .await
}

/// Get activity totals for an athlete.
pub async fn stats(client: &ApiClient, athlete_id: u64) -> Result<ActivityStats> {
    client
        .get(&format!("/athletes/{athlete_id}/stats"), &[])
        .await
}

/// Get the authenticated athlete's heart-rate and power zones.
pub async fn zones(client: &ApiClient) -> Result<Zones> {
    client.get("/athlete/zones", &[]).await
}
