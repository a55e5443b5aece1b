// SPDX-License-Identifier: MIT

//! Activity records and their embedded pieces.

use super::athlete::{MetaAthlete, SummaryAthlete};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Bare activity reference embedded in segment efforts and laps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaActivity {
    pub id: u64,
}

/// Encoded map polylines attached to activities, segments, and routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolylineMap {
    pub id: Option<String>,
    /// Full-resolution polyline; only on detailed responses.
    pub polyline: Option<String>,
    pub summary_polyline: Option<String>,
}

impl PolylineMap {
    /// The detailed polyline, falling back to the summary one.
    pub fn best_polyline(&self) -> Option<&str> {
        self.polyline
            .as_deref()
            .or(self.summary_polyline.as_deref())
    }
}

/// Activity as returned by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryActivity {
    /// Strava activity ID
    pub id: u64,
    pub name: Option<String>,
    pub athlete: Option<MetaAthlete>,
    /// Sport type (Ride, Run, Hike, etc.)
    pub sport_type: Option<String>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub start_date_local: Option<DateTime<FixedOffset>>,
    pub timezone: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Moving time in seconds
    pub moving_time: Option<i64>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<i64>,
    /// Total elevation gain in meters
    pub total_elevation_gain: Option<f64>,
    /// Average speed in meters per second
    pub average_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub map: Option<PolylineMap>,
    pub trainer: Option<bool>,
    pub commute: Option<bool>,
    pub manual: Option<bool>,
    pub private: Option<bool>,
    pub kudos_count: Option<u32>,
    pub comment_count: Option<u32>,
    pub achievement_count: Option<u32>,
    pub gear_id: Option<String>,
}

/// Activity as returned by `GET /activities/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedActivity {
    pub id: u64,
    pub name: Option<String>,
    pub athlete: Option<MetaAthlete>,
    pub sport_type: Option<String>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub start_date_local: Option<DateTime<FixedOffset>>,
    pub timezone: Option<String>,
    pub distance: Option<f64>,
    pub moving_time: Option<i64>,
    pub elapsed_time: Option<i64>,
    pub total_elevation_gain: Option<f64>,
    pub average_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub map: Option<PolylineMap>,
    pub trainer: Option<bool>,
    pub commute: Option<bool>,
    pub manual: Option<bool>,
    pub private: Option<bool>,
    pub kudos_count: Option<u32>,
    pub comment_count: Option<u32>,
    pub achievement_count: Option<u32>,
    pub gear_id: Option<String>,
    pub description: Option<String>,
    /// Kilocalories consumed
    pub calories: Option<f64>,
    /// Device name (e.g. "Garmin Edge 530")
    pub device_name: Option<String>,
    pub embed_token: Option<String>,
    #[serde(default)]
    pub splits_metric: Vec<Split>,
}

/// One kilometer/mile split of a detailed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub distance: Option<f64>,
    pub elapsed_time: Option<i64>,
    pub moving_time: Option<i64>,
    pub elevation_difference: Option<f64>,
    pub split: Option<u32>,
    pub average_speed: Option<f64>,
}

/// One lap of an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lap {
    pub id: u64,
    pub name: Option<String>,
    pub activity: Option<MetaActivity>,
    pub athlete: Option<MetaAthlete>,
    pub lap_index: Option<u32>,
    pub distance: Option<f64>,
    pub moving_time: Option<i64>,
    pub elapsed_time: Option<i64>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub total_elevation_gain: Option<f64>,
    pub average_speed: Option<f64>,
    pub max_speed: Option<f64>,
}

/// Comment left on an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub activity_id: Option<u64>,
    pub text: Option<String>,
    pub athlete: Option<SummaryAthlete>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Heart-rate or power distribution for one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityZone {
    /// "heartrate" or "power"
    #[serde(rename = "type")]
    pub zone_type: Option<String>,
    pub sensor_based: Option<bool>,
    pub points: Option<i32>,
    pub custom_zones: Option<bool>,
    #[serde(default)]
    pub distribution_buckets: Vec<DistributionBucket>,
}

/// Seconds spent inside one zone boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub time: Option<i64>,
}
