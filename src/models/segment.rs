// SPDX-License-Identifier: MIT

//! Segment, segment-effort, and segment-explorer records.

use super::activity::{MetaActivity, PolylineMap};
use super::athlete::MetaAthlete;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Segment as embedded in efforts and starred lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySegment {
    /// Strava segment ID
    pub id: u64,
    pub name: Option<String>,
    /// "Ride" or "Run"
    pub activity_type: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    pub average_grade: Option<f64>,
    pub maximum_grade: Option<f64>,
    pub elevation_high: Option<f64>,
    pub elevation_low: Option<f64>,
    /// `[latitude, longitude]`
    pub start_latlng: Option<Vec<f64>>,
    pub end_latlng: Option<Vec<f64>>,
    /// 0 (NC) through 5 (HC)
    pub climb_category: Option<u8>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub private: Option<bool>,
    pub starred: Option<bool>,
}

/// Segment as returned by `GET /segments/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedSegment {
    pub id: u64,
    pub name: Option<String>,
    pub activity_type: Option<String>,
    pub distance: Option<f64>,
    pub average_grade: Option<f64>,
    pub maximum_grade: Option<f64>,
    pub elevation_high: Option<f64>,
    pub elevation_low: Option<f64>,
    pub start_latlng: Option<Vec<f64>>,
    pub end_latlng: Option<Vec<f64>>,
    pub climb_category: Option<u8>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub private: Option<bool>,
    pub starred: Option<bool>,
    pub total_elevation_gain: Option<f64>,
    pub map: Option<PolylineMap>,
    pub effort_count: Option<u32>,
    pub athlete_count: Option<u32>,
    pub star_count: Option<u32>,
    pub hazardous: Option<bool>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// One attempt at a segment, from `GET /segment_efforts/{id}` or
/// `GET /segments/{id}/all_efforts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentEffort {
    pub id: u64,
    pub name: Option<String>,
    pub activity: Option<MetaActivity>,
    pub athlete: Option<MetaAthlete>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<i64>,
    pub moving_time: Option<i64>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub start_date_local: Option<DateTime<FixedOffset>>,
    pub distance: Option<f64>,
    /// Index into the activity's streams where the effort starts
    pub start_index: Option<u64>,
    pub end_index: Option<u64>,
    pub average_watts: Option<f64>,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    /// 1-10 when this effort is on the segment leaderboard
    pub kom_rank: Option<u8>,
    /// 1-3 when this effort is a personal record
    pub pr_rank: Option<u8>,
    pub segment: Option<SummarySegment>,
}

/// Segment candidate from `GET /segments/explore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerSegment {
    pub id: u64,
    pub name: Option<String>,
    pub climb_category: Option<u8>,
    pub climb_category_desc: Option<String>,
    pub avg_grade: Option<f64>,
    pub start_latlng: Option<Vec<f64>>,
    pub end_latlng: Option<Vec<f64>>,
    pub elev_difference: Option<f64>,
    pub distance: Option<f64>,
    pub points: Option<String>,
}

/// Wrapper object the explore endpoint returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerResponse {
    #[serde(default)]
    pub segments: Vec<ExplorerSegment>,
}
