// SPDX-License-Identifier: MIT

//! Route records.

use super::activity::PolylineMap;
use super::athlete::SummaryAthlete;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A saved route, from `GET /routes/{id}` or the athlete-routes list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Strava route ID
    pub id: u64,
    /// Route IDs can exceed what some JSON consumers handle; the string
    /// form is authoritative for display.
    pub id_str: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub athlete: Option<SummaryAthlete>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Elevation gain in meters
    pub elevation_gain: Option<f64>,
    pub map: Option<PolylineMap>,
    /// 1 for ride, 2 for run
    #[serde(rename = "type")]
    pub route_type: Option<u8>,
    /// 1 road, 2 mountain bike, 3 cross, 4 trail, 5 mixed
    pub sub_type: Option<u8>,
    pub private: Option<bool>,
    pub starred: Option<bool>,
    /// Estimated moving time in seconds
    pub estimated_moving_time: Option<i64>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}
