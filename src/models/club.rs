// SPDX-License-Identifier: MIT

//! Club records.

use serde::{Deserialize, Serialize};

/// Club as returned by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryClub {
    /// Strava club ID
    pub id: u64,
    pub name: Option<String>,
    pub profile_medium: Option<String>,
    pub cover_photo: Option<String>,
    /// "cycling", "running", or "triathlon"
    pub sport_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub private: Option<bool>,
    pub member_count: Option<u32>,
    pub featured: Option<bool>,
    pub verified: Option<bool>,
    pub url: Option<String>,
}

/// Club as returned by `GET /clubs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedClub {
    pub id: u64,
    pub name: Option<String>,
    pub profile_medium: Option<String>,
    pub cover_photo: Option<String>,
    pub sport_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub private: Option<bool>,
    pub member_count: Option<u32>,
    pub featured: Option<bool>,
    pub verified: Option<bool>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// "open" or "closed"
    pub membership: Option<String>,
    pub admin: Option<bool>,
    pub owner: Option<bool>,
    pub following_count: Option<u32>,
}

/// Member entry from `GET /clubs/{id}/members`.
///
/// The members endpoint redacts everything but names and membership
/// flags, so this is deliberately narrower than an athlete record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubMember {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub membership: Option<String>,
    pub admin: Option<bool>,
    pub owner: Option<bool>,
}
