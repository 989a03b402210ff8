//! Greedy proximity clustering of map markers.
//!
//! The grouping is seed-based, not transitive: a marker joins a
//! cluster only if it is within threshold of the cluster's seed
//! marker, never of other members. Two markers that are each close to
//! a shared seed but far from each other still share a cluster, while
//! a chain of pairwise-close markers does not collapse into one. This
//! matches the rendering behavior the map front end was built against
//! and must not be upgraded to union-find style clustering.

use noise_map_geo_models::GeoPoint;
use serde::Serialize;

use crate::MapMarker;
use crate::distance::haversine_distance_m;

/// A group of markers merged for rendering at the current zoom.
///
/// Ephemeral: valid only for the clustering pass that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster<'a, M> {
    /// Synthesized id, derived from the seed marker's id.
    pub id: String,
    /// Arithmetic mean of member latitudes and longitudes.
    ///
    /// Deliberately not a spherical centroid; the small distortion at
    /// high latitude and across the antimeridian is accepted.
    pub position: GeoPoint,
    /// Markers absorbed into this cluster, seed first.
    pub members: Vec<&'a M>,
    /// Number of members.
    pub count: usize,
}

/// One entry in the render list: an untouched marker or a cluster.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderItem<'a, M> {
    /// A standalone marker, passed through by reference.
    Marker {
        /// The original marker.
        marker: &'a M,
    },
    /// A merged group of nearby markers.
    Cluster {
        /// The derived cluster.
        cluster: Cluster<'a, M>,
    },
}

/// Clustering distance threshold in meters for a map zoom level.
///
/// First matching upper bound wins; the threshold never increases as
/// zoom increases.
#[must_use]
pub const fn cluster_distance_for_zoom(zoom: u8) -> f64 {
    if zoom <= 10 {
        5000.0
    } else if zoom <= 12 {
        2000.0
    } else if zoom <= 14 {
        1000.0
    } else if zoom <= 16 {
        500.0
    } else {
        100.0
    }
}

/// Partitions markers into standalone markers and proximity clusters.
///
/// Markers are visited in input order. Each unprocessed marker becomes
/// a seed and absorbs every other unprocessed marker within the zoom
/// threshold of it (distance to the seed only). A seed with no
/// neighbors is emitted standalone, never as a one-member cluster.
/// Every input marker appears in exactly one output entry, and output
/// order follows first-encounter order.
#[must_use]
pub fn cluster_markers<M: MapMarker>(markers: &[M], zoom: u8) -> Vec<RenderItem<'_, M>> {
    let threshold = cluster_distance_for_zoom(zoom);
    let mut processed = vec![false; markers.len()];
    let mut items = Vec::new();

    for (i, seed) in markers.iter().enumerate() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let mut neighbors = Vec::new();
        for (j, other) in markers.iter().enumerate() {
            if processed[j] {
                continue;
            }
            if haversine_distance_m(seed.position(), other.position()) <= threshold {
                neighbors.push(j);
            }
        }

        if neighbors.is_empty() {
            items.push(RenderItem::Marker { marker: seed });
            continue;
        }

        let mut members = vec![seed];
        for &j in &neighbors {
            processed[j] = true;
            members.push(&markers[j]);
        }

        let count = members.len();
        #[allow(clippy::cast_precision_loss)]
        let inv = 1.0 / count as f64;
        let lat = members.iter().map(|m| m.position().lat).sum::<f64>() * inv;
        let lng = members.iter().map(|m| m.position().lng).sum::<f64>() * inv;

        items.push(RenderItem::Cluster {
            cluster: Cluster {
                id: format!("cluster-{}", seed.id()),
                position: GeoPoint::new(lat, lng),
                members,
                count,
            },
        });
    }

    log::debug!(
        "Clustered {} markers into {} render items at zoom {zoom}",
        markers.len(),
        items.len()
    );

    items
}
