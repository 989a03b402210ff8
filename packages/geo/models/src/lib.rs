#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared geospatial value types.
//!
//! Defines the coordinate and raw boundary types used across the
//! noise-map system: every other crate (report models, clustering,
//! district attribution) builds on these.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
///
/// Latitude is positive north, longitude positive east. Values are not
/// validated; out-of-range coordinates produce mathematically defined
/// but meaningless distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, conventionally `[-90, 90]`.
    pub lat: f64,
    /// Longitude in decimal degrees, conventionally `[-180, 180]`.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A raw region boundary as shipped in the reference data.
///
/// The vertex ring is open: the last vertex is not required to repeat
/// the first, and containment tests treat the ring as implicitly
/// closed. Validation (ring arity, id format) happens when the region
/// is loaded into an index, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region identifier carrying a trailing ordinal, e.g. `"district-4"`.
    pub id: String,
    /// Ordered vertex ring, implicitly closed.
    pub positions: Vec<GeoPoint>,
}

impl Region {
    /// Creates a region from an id and its vertex ring.
    #[must_use]
    pub fn new(id: impl Into<String>, positions: Vec<GeoPoint>) -> Self {
        Self {
            id: id.into(),
            positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_round_trips_through_json() {
        let point = GeoPoint::new(52.52, 13.405);
        let json = serde_json::to_string(&point).unwrap();
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn region_deserializes_camel_case() {
        let json = r#"{"id":"district-3","positions":[{"lat":0.0,"lng":0.0}]}"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.id, "district-3");
        assert_eq!(region.positions.len(), 1);
    }
}
