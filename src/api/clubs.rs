// SPDX-License-Identifier: MIT

//! `clubs` resource group.

use super::Page;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{ClubMember, DetailedClub, SummaryActivity, SummaryAthlete, SummaryClub};

/// Get a club by ID.
pub async fn get(client: &ApiClient, club_id: u64) -> Result<DetailedClub> {
    client.get(&format!("/clubs/{club_id}"), &[]).await
}

/// List the authenticated athlete's clubs.
pub async fn list_athlete_clubs(client: &ApiClient, page: Page) -> Result<Vec<SummaryClub>> {
    client.get("/athlete/clubs", &page.query()).await
}

/// List a club's members.
pub async fn members(client: &ApiClient, club_id: u64, page: Page) -> Result<Vec<ClubMember>> {
    client
        .get(&format!("/clubs/{club_id}/members"), &page.query())
        .await
}

/// List a club's administrators.
pub async fn admins(client: &ApiClient, club_id: u64, page: Page) -> Result<Vec<SummaryAthlete>> {
    client
        .get(&format!("/clubs/{club_id}/admins"), &page.query())
        .await
}

/// List a club's recent activities.
pub async fn activities(
    client: &ApiClient,
    club_id: u64,
    page: Page,
) -> Result<Vec<SummaryActivity>> {
    client
        .get(&format!("/clubs/{club_id}/activities"), &page.query())
        .await
}
