//! R-tree backed point-in-polygon region lookup.
//!
//! Region order matters: the original dashboard resolves overlapping
//! regions by taking the first containing polygon in reference-data
//! order, so every indexed boundary carries its load ordinal and
//! lookups pick the containing polygon with the smallest ordinal. The
//! R-tree only narrows the candidate set by bounding box; it never
//! decides the winner.

use geo::{BoundingRect, Contains, LineString, Polygon};
use noise_map_geo_models::{GeoPoint, Region};
use rstar::{AABB, RTree, RTreeObject};

use crate::DistrictError;

/// A validated boundary polygon stored in the R-tree.
///
/// Coordinates use `GeoJSON` axis order internally: x is longitude,
/// y is latitude. [`GeoPoint`] converts at the public boundary.
struct IndexedBoundary {
    /// Position in the original region list; smaller wins on overlap.
    ordinal: usize,
    /// District number parsed from the region id.
    number: u32,
    envelope: AABB<[f64; 2]>,
    polygon: Polygon<f64>,
}

impl RTreeObject for IndexedBoundary {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl std::fmt::Debug for IndexedBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedBoundary")
            .field("ordinal", &self.ordinal)
            .field("number", &self.number)
            .finish_non_exhaustive()
    }
}

/// Point-in-polygon index over one tier of region polygons.
#[derive(Debug)]
pub struct RegionIndex {
    tree: RTree<IndexedBoundary>,
}

impl RegionIndex {
    /// Validates regions and builds the R-tree index.
    ///
    /// The ring is treated as implicitly closed; a literal repeated
    /// closing vertex is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if any region has a vertex ring with fewer
    /// than 3 vertices or an id without trailing digits.
    pub fn from_regions(regions: &[Region]) -> Result<Self, DistrictError> {
        let mut entries = Vec::with_capacity(regions.len());

        for (ordinal, region) in regions.iter().enumerate() {
            if region.positions.len() < 3 {
                return Err(DistrictError::DegeneratePolygon {
                    id: region.id.clone(),
                    vertices: region.positions.len(),
                });
            }
            let number = parse_region_number(&region.id)?;

            let ring: Vec<(f64, f64)> = region
                .positions
                .iter()
                .map(|p| (p.lng, p.lat))
                .collect();
            // Polygon::new closes the ring if the data did not.
            let polygon = Polygon::new(LineString::from(ring), Vec::new());
            let envelope = compute_envelope(&polygon);

            entries.push(IndexedBoundary {
                ordinal,
                number,
                envelope,
                polygon,
            });
        }

        log::info!("Indexed {} region polygons", entries.len());

        Ok(Self {
            tree: RTree::bulk_load(entries),
        })
    }

    /// Returns the district number of the first region containing the
    /// point, in reference-data order, or `None` if no region does.
    ///
    /// Points exactly on a boundary edge have implementation-defined
    /// containment.
    #[must_use]
    pub fn classify(&self, point: GeoPoint) -> Option<u32> {
        let query = geo::Point::new(point.lng, point.lat);
        let query_env = AABB::from_point([point.lng, point.lat]);

        self.tree
            .locate_in_envelope_intersecting(&query_env)
            .filter(|entry| entry.polygon.contains(&query))
            .min_by_key(|entry| entry.ordinal)
            .map(|entry| entry.number)
    }

    /// Number of indexed regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// The city's two region tiers, queried independently.
#[derive(Debug)]
pub struct CityGeography {
    districts: RegionIndex,
    neighborhoods: RegionIndex,
}

impl CityGeography {
    /// Builds both tiers from their raw region lists.
    ///
    /// # Errors
    ///
    /// Returns an error if either tier fails validation.
    pub fn new(districts: &[Region], neighborhoods: &[Region]) -> Result<Self, DistrictError> {
        let districts = RegionIndex::from_regions(districts)?;
        let neighborhoods = RegionIndex::from_regions(neighborhoods)?;
        log::info!(
            "Loaded city geography: {} districts, {} neighborhoods",
            districts.len(),
            neighborhoods.len()
        );
        Ok(Self {
            districts,
            neighborhoods,
        })
    }

    /// District number containing the point, if any.
    #[must_use]
    pub fn lookup_district(&self, point: GeoPoint) -> Option<u32> {
        self.districts.classify(point)
    }

    /// Neighborhood number containing the point, if any.
    #[must_use]
    pub fn lookup_neighborhood(&self, point: GeoPoint) -> Option<u32> {
        self.neighborhoods.classify(point)
    }
}

/// Parses the trailing digits of a region id (`"district-4"` → `4`).
fn parse_region_number(id: &str) -> Result<u32, DistrictError> {
    let prefix_len = id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &id[prefix_len..];
    digits
        .parse()
        .map_err(|_| DistrictError::MalformedRegionId { id: id.to_string() })
}

fn compute_envelope(polygon: &Polygon<f64>) -> AABB<[f64; 2]> {
    polygon.bounding_rect().map_or_else(
        || AABB::from_point([0.0, 0.0]),
        |rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
    )
}
