// SPDX-License-Identifier: MIT

//! Upload and push-subscription records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// State of an activity-file upload.
///
/// `activity_id` stays `None` until upstream processing completes; poll
/// the status endpoint until it is set or `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    /// Strava upload ID
    pub id: u64,
    pub id_str: Option<String>,
    /// Caller-supplied identifier, echoed back
    pub external_id: Option<String>,
    /// Populated when processing failed (e.g. a duplicate)
    pub error: Option<String>,
    /// Human-readable processing state
    pub status: Option<String>,
    /// Set once the upload has become an activity
    pub activity_id: Option<u64>,
}

/// A registered push-notification subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscription {
    pub id: u64,
    pub application_id: Option<u64>,
    pub callback_url: Option<String>,
    pub resource_state: Option<u8>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}
