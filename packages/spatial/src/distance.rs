//! Haversine great-circle distance.

use noise_map_geo_models::GeoPoint;

/// Mean Earth radius in meters (spherical approximation).
///
/// Clustering thresholds are hundreds to thousands of meters, where
/// the ellipsoidal correction is immaterial.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle surface distance between two points, in meters.
///
/// Pure and symmetric; identical points yield exactly `0.0`.
/// Coordinates are not validated.
#[must_use]
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
