// SPDX-License-Identifier: MIT

//! `routes` resource group.

use super::Page;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::Route;

/// Get a route by ID.
pub async fn get(client: &ApiClient, route_id: u64) -> Result<Route> {
    client.get(&format!("/routes/{route_id}"), &[]).await
}

/// List an athlete's routes.
pub async fn list_athlete_routes(
    client: &ApiClient,
    athlete_id: u64,
    page: Page,
) -> Result<Vec<Route>> {
    client
        .get(&format!("/athletes/{athlete_id}/routes"), &page.query())
        .await
}

/// Export a route as a GPX document. Returns the raw bytes; the body is
/// XML, not JSON.
pub async fn export_gpx(client: &ApiClient, route_id: u64) -> Result<Vec<u8>> {
    client.get_raw(&format!("/routes/{route_id}/export_gpx")).await
}

/// Export a route as a TCX document. Returns the raw bytes.
pub async fn export_tcx(client: &ApiClient, route_id: u64) -> Result<Vec<u8>> {
    client.get_raw(&format!("/routes/{route_id}/export_tcx")).await
}
