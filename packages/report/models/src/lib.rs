#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Noise report types and filter parameters.
//!
//! Defines the canonical noise report shape produced by the citizen
//! submission flow, the audio-source taxonomy reports are classified
//! into, and the filter parameters the dashboard applies before
//! rendering heat maps and marker clusters.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use noise_map_geo_models::GeoPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Audio source category a report is classified into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioCategory {
    /// Road, rail, or air traffic.
    Traffic,
    /// Construction and roadworks.
    Construction,
    /// Bars, clubs, and street nightlife.
    Nightlife,
    /// Industrial or commercial machinery.
    Industrial,
    /// Neighbor noise (parties, appliances, pets).
    Neighbors,
    /// Amplified or live music.
    Music,
    /// Emergency sirens and alarms.
    Sirens,
    /// Anything not covered above.
    Other,
}

/// Review status of a submitted report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Newly submitted, not yet reviewed.
    Submitted,
    /// Picked up by an administrator.
    InReview,
    /// Reviewed and accepted as resolved.
    Resolved,
    /// Rejected (duplicate, spam, out of scope).
    Rejected,
}

/// A single geolocated noise report.
///
/// The clustering and district-attribution code reads only `id` and
/// `position`; everything else is payload carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseReport {
    /// Stable unique identifier.
    pub id: String,
    /// Where the noise was reported.
    pub position: GeoPoint,
    /// Measured or estimated sound level in dB(A).
    pub decibel: f64,
    /// Audio source classification.
    pub category: AudioCategory,
    /// Reporter's free-text feeling (e.g. "annoyed", "can't sleep").
    pub feeling: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Review status.
    pub status: ReportStatus,
    /// When the noise was measured.
    pub measured_at: DateTime<Utc>,
}

impl noise_map_spatial::MapMarker for NoiseReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> GeoPoint {
        self.position
    }
}

/// Time-of-day window a report's `measured_at` must fall into.
///
/// Hours are on the report's UTC clock. `Custom` is inclusive of
/// `from_hour` and exclusive of `to_hour`, wrapping past midnight when
/// `from_hour > to_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimeWindow {
    /// No time restriction.
    Any,
    /// Daytime, 06:00 (inclusive) to 22:00 (exclusive).
    Day,
    /// Nighttime, the complement of [`TimeWindow::Day`].
    Night,
    /// Explicit hour window, `[from_hour, to_hour)`.
    Custom {
        /// First hour included, 0-23.
        from_hour: u8,
        /// First hour excluded, 0-23.
        to_hour: u8,
    },
}

/// Filter parameters applied to a report set before rendering.
///
/// Absent bounds pass everything, matching the dashboard's "no filter"
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    /// Time-of-day restriction.
    pub time: TimeWindow,
    /// Minimum decibel level, inclusive.
    pub decibel_min: Option<f64>,
    /// Maximum decibel level, inclusive.
    pub decibel_max: Option<f64>,
    /// Audio categories to include; `None` includes all.
    pub categories: Option<BTreeSet<AudioCategory>>,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            time: TimeWindow::Any,
            decibel_min: None,
            decibel_max: None,
            categories: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_screaming_snake() {
        let json = serde_json::to_string(&AudioCategory::Nightlife).unwrap();
        assert_eq!(json, "\"NIGHTLIFE\"");
    }

    #[test]
    fn category_parses_from_str() {
        use std::str::FromStr as _;
        assert_eq!(
            AudioCategory::from_str("CONSTRUCTION").unwrap(),
            AudioCategory::Construction
        );
        assert!(AudioCategory::from_str("JACKHAMMER").is_err());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = NoiseReport {
            id: "r-1".to_string(),
            position: noise_map_geo_models::GeoPoint::new(52.5, 13.4),
            decibel: 71.5,
            category: AudioCategory::Traffic,
            feeling: Some("annoyed".to_string()),
            description: None,
            status: ReportStatus::Submitted,
            measured_at: "2026-03-01T21:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"measuredAt\""));
        let back: NoiseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, report.id);
        assert_eq!(back.category, report.category);
    }

    #[test]
    fn report_is_a_map_marker() {
        use noise_map_spatial::MapMarker as _;

        let report = NoiseReport {
            id: "r-7".to_string(),
            position: noise_map_geo_models::GeoPoint::new(48.2, 16.37),
            decibel: 64.0,
            category: AudioCategory::Neighbors,
            feeling: None,
            description: None,
            status: ReportStatus::InReview,
            measured_at: "2026-03-02T07:00:00Z".parse().unwrap(),
        };
        assert_eq!(report.id(), "r-7");
        assert_eq!(report.position(), report.position);
    }

    #[test]
    fn default_filter_is_unrestricted() {
        let filter = ReportFilter::default();
        assert_eq!(filter.time, TimeWindow::Any);
        assert!(filter.decibel_min.is_none());
        assert!(filter.categories.is_none());
    }
}
