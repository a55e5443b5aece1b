// SPDX-License-Identifier: MIT

//! Athlete records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Bare athlete reference embedded in other records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaAthlete {
    pub id: u64,
}

/// Athlete summary, as embedded in activities and token exchanges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryAthlete {
    /// Strava athlete ID
    pub id: u64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Profile picture URL
    pub profile: Option<String>,
    /// Medium-size profile picture URL
    pub profile_medium: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// "M" or "F", when shared
    pub sex: Option<String>,
    pub premium: Option<bool>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Full athlete profile from `GET /athlete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedAthlete {
    pub id: u64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub profile: Option<String>,
    pub profile_medium: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub sex: Option<String>,
    pub premium: Option<bool>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub follower_count: Option<u32>,
    pub friend_count: Option<u32>,
    /// "feet" or "meters"
    pub measurement_preference: Option<String>,
    /// Functional threshold power, watts
    pub ftp: Option<u32>,
    /// Weight in kilograms
    pub weight: Option<f64>,
}

/// Rolled-up activity totals from `GET /athletes/{id}/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityStats {
    pub biggest_ride_distance: Option<f64>,
    pub biggest_climb_elevation_gain: Option<f64>,
    pub recent_ride_totals: Option<ActivityTotal>,
    pub recent_run_totals: Option<ActivityTotal>,
    pub recent_swim_totals: Option<ActivityTotal>,
    pub ytd_ride_totals: Option<ActivityTotal>,
    pub ytd_run_totals: Option<ActivityTotal>,
    pub ytd_swim_totals: Option<ActivityTotal>,
    pub all_ride_totals: Option<ActivityTotal>,
    pub all_run_totals: Option<ActivityTotal>,
    pub all_swim_totals: Option<ActivityTotal>,
}

/// Aggregated totals for one sport over one window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTotal {
    pub count: Option<u32>,
    pub distance: Option<f64>,
    pub moving_time: Option<i64>,
    pub elapsed_time: Option<i64>,
    pub elevation_gain: Option<f64>,
    pub achievement_count: Option<u32>,
}

/// Heart-rate and power zones from `GET /athlete/zones`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zones {
    pub heart_rate: Option<ZoneSet>,
    pub power: Option<ZoneSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneSet {
    pub custom_zones: Option<bool>,
    #[serde(default)]
    pub zones: Vec<ZoneBucket>,
}

/// One zone boundary; `max` is -1 on the open-ended top zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneBucket {
    pub min: Option<i32>,
    pub max: Option<i32>,
}
