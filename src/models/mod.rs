// SPDX-License-Identifier: MIT

//! Typed records decoded from Strava API responses.
//!
//! The upstream JSON omits many fields depending on the endpoint and the
//! granted scopes, so anything not guaranteed present is an `Option`
//! (absent is distinct from zero). RFC 3339 timestamps decode to
//! `chrono::DateTime<FixedOffset>`, preserving the offset from the wire.

pub mod activity;
pub mod athlete;
pub mod club;
pub mod gear;
pub mod route;
pub mod segment;
pub mod stream;
pub mod upload;

pub use activity::{
    ActivityZone, Comment, DetailedActivity, DistributionBucket, Lap, MetaActivity, PolylineMap,
    Split, SummaryActivity,
};
pub use athlete::{
    ActivityStats, ActivityTotal, DetailedAthlete, MetaAthlete, SummaryAthlete, ZoneBucket,
    ZoneSet, Zones,
};
pub use club::{ClubMember, DetailedClub, SummaryClub};
pub use gear::Gear;
pub use route::Route;
pub use segment::{
    DetailedSegment, ExplorerResponse, ExplorerSegment, SegmentEffort, SummarySegment,
};
pub use stream::{Stream, StreamSet};
pub use upload::{PushSubscription, Upload};
