// SPDX-License-Identifier: MIT

//! Gear records (bikes and shoes).

use serde::{Deserialize, Serialize};

/// Gear as returned by `GET /gear/{id}`.
///
/// Gear IDs are strings: bikes are prefixed `b`, shoes `g`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gear {
    pub id: String,
    pub name: Option<String>,
    /// Whether this is the athlete's default gear
    pub primary: Option<bool>,
    /// Cumulative distance in meters
    pub distance: Option<f64>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
    pub description: Option<String>,
    pub retired: Option<bool>,
}
