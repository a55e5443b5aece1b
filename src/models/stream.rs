// SPDX-License-Identifier: MIT

//! Data streams (time series) attached to activities, segments, and
//! segment efforts.

use serde::{Deserialize, Serialize};

/// One keyed stream. The element type depends on the key: numbers for
/// most, `[lat, lng]` pairs for `latlng`, booleans for `moving`; hence
/// the untyped elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    /// "distance" or "time"
    pub series_type: Option<String>,
    pub original_size: Option<u64>,
    /// "low", "medium", or "high"
    pub resolution: Option<String>,
}

/// Streams keyed by type, as returned with `key_by_type=true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamSet {
    pub time: Option<Stream>,
    pub distance: Option<Stream>,
    pub latlng: Option<Stream>,
    pub altitude: Option<Stream>,
    pub velocity_smooth: Option<Stream>,
    pub heartrate: Option<Stream>,
    pub cadence: Option<Stream>,
    pub watts: Option<Stream>,
    pub temp: Option<Stream>,
    pub moving: Option<Stream>,
    pub grade_smooth: Option<Stream>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_stream_set() {
        let body = r#"{
            "distance": {"data": [2.9, 5.8], "series_type": "distance", "original_size": 2, "resolution": "high"},
            "latlng": {"data": [[37.4, -122.2], [37.5, -122.3]], "series_type": "distance"}
        }"#;
        let set: StreamSet = serde_json::from_str(body).unwrap();
        assert_eq!(set.distance.unwrap().data.len(), 2);
        assert!(set.latlng.unwrap().data[0].is_array());
        assert!(set.heartrate.is_none());
    }
}
