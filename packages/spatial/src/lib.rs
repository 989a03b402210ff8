#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Marker clustering and great-circle distance primitives.
//!
//! Groups map markers into zoom-dependent proximity clusters for
//! rendering. Clustering is a pure function over the marker slice:
//! clusters are rebuilt from scratch on every call and never cached
//! across zoom levels.

pub mod cluster;
pub mod distance;

use noise_map_geo_models::GeoPoint;

pub use cluster::{Cluster, RenderItem, cluster_distance_for_zoom, cluster_markers};
pub use distance::{EARTH_RADIUS_M, haversine_distance_m};

/// Anything the clusterer can place on the map.
///
/// The clustering core reads only the id and position; the rest of the
/// marker is opaque payload handed back unchanged in the render list.
pub trait MapMarker {
    /// Stable unique identifier.
    fn id(&self) -> &str;

    /// Marker position.
    fn position(&self) -> GeoPoint;
}
