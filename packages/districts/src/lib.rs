#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District and neighborhood boundary attribution.
//!
//! Loads the city's static district and neighborhood polygons from
//! bundled `GeoJSON` reference data, validates them once at load, and
//! provides point-in-polygon lookups used to tag each report with its
//! containing region. Lookups go through an R-tree bounding-box
//! prefilter; the winning region is always the first containing one in
//! reference-data order, even when regions overlap.

pub mod index;
pub mod load;

pub use index::{CityGeography, RegionIndex};
pub use load::load_regions;

use thiserror::Error;

/// Errors that can occur while loading region reference data.
#[derive(Debug, Error)]
pub enum DistrictError {
    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// Reference data was valid `GeoJSON` but not a `FeatureCollection`.
    #[error("expected a GeoJSON FeatureCollection")]
    NotAFeatureCollection,

    /// A region's vertex ring has fewer than 3 vertices, so containment
    /// is undefined.
    #[error("degenerate polygon in region {id}: {vertices} vertices, need at least 3")]
    DegeneratePolygon {
        /// Offending region id.
        id: String,
        /// Number of vertices found.
        vertices: usize,
    },

    /// A region id carries no trailing district number.
    #[error("malformed region id {id:?}: expected trailing digits")]
    MalformedRegionId {
        /// Offending region id.
        id: String,
    },
}
