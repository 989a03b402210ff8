//! Parses region reference data from bundled `GeoJSON`.
//!
//! The reference data is a `FeatureCollection` of `Polygon` features,
//! one per district or neighborhood, with the region id in a feature
//! property. Features that cannot contribute a usable boundary are
//! skipped with a warning; structural validation (ring arity, id
//! format) happens later when the regions are indexed.

use geojson::{Feature, GeoJson, JsonValue, Value};
use noise_map_geo_models::{GeoPoint, Region};

use crate::DistrictError;

/// Parses a `GeoJSON` `FeatureCollection` into raw regions.
///
/// `id_property` names the feature property carrying the region id
/// (e.g. `"districtId"`). Region order follows feature order, which
/// later decides overlap priority. A literal closing vertex repeating
/// the ring's first vertex is dropped; rings are implicitly closed.
///
/// # Errors
///
/// Returns an error if the input is not valid `GeoJSON` or not a
/// `FeatureCollection`.
pub fn load_regions(geojson_str: &str, id_property: &str) -> Result<Vec<Region>, DistrictError> {
    let GeoJson::FeatureCollection(collection) = geojson_str.parse::<GeoJson>()? else {
        return Err(DistrictError::NotAFeatureCollection);
    };

    let mut regions = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        match region_from_feature(feature, id_property) {
            Some(region) => regions.push(region),
            None => log::warn!("Skipping feature without usable id/polygon geometry"),
        }
    }

    log::info!("Parsed {} regions from reference data", regions.len());
    Ok(regions)
}

/// Extracts one region from a feature, if it has an id and a polygon.
fn region_from_feature(feature: &Feature, id_property: &str) -> Option<Region> {
    let id = feature
        .property(id_property)
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    let geometry = feature.geometry.as_ref()?;
    let Value::Polygon(rings) = &geometry.value else {
        return None;
    };
    // Exterior ring only; district reference data carries no holes.
    let exterior = rings.first()?;

    let mut positions: Vec<GeoPoint> = exterior
        .iter()
        .filter(|coords| coords.len() >= 2)
        .map(|coords| GeoPoint::new(coords[1], coords[0]))
        .collect();

    if positions.len() > 1 && positions.first() == positions.last() {
        positions.pop();
    }

    Some(Region::new(id, positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "districtId": "district-1" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[13.0, 52.0], [13.1, 52.0], [13.1, 52.1], [13.0, 52.1], [13.0, 52.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "no id here" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "districtId": "district-2" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[13.2, 52.0], [13.3, 52.0], [13.3, 52.1]]]
                }
            }
        ]
    }"#;

    #[test]
    fn parses_features_in_order() {
        let regions = load_regions(COLLECTION, "districtId").unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id, "district-1");
        assert_eq!(regions[1].id, "district-2");
    }

    #[test]
    fn drops_literal_closing_vertex() {
        let regions = load_regions(COLLECTION, "districtId").unwrap();
        // First feature repeats its opening vertex; the stored ring is open.
        assert_eq!(regions[0].positions.len(), 4);
        assert_eq!(regions[1].positions.len(), 3);
    }

    #[test]
    fn converts_geojson_axis_order() {
        let regions = load_regions(COLLECTION, "districtId").unwrap();
        // GeoJSON coordinates are [lng, lat].
        assert_eq!(regions[0].positions[0], GeoPoint::new(52.0, 13.0));
    }

    #[test]
    fn skips_features_missing_the_id_property() {
        let regions = load_regions(COLLECTION, "districtId").unwrap();
        assert!(regions.iter().all(|r| r.id.starts_with("district-")));
    }

    #[test]
    fn rejects_non_feature_collection_input() {
        let point = r#"{ "type": "Point", "coordinates": [13.0, 52.0] }"#;
        assert!(load_regions(point, "districtId").is_err());
    }

    #[test]
    fn rejects_invalid_geojson() {
        assert!(load_regions("not geojson", "districtId").is_err());
    }

    #[test]
    fn loaded_regions_classify_end_to_end() {
        let regions = load_regions(COLLECTION, "districtId").unwrap();
        let index = crate::RegionIndex::from_regions(&regions).unwrap();
        assert_eq!(index.classify(GeoPoint::new(52.05, 13.05)), Some(1));
        assert_eq!(index.classify(GeoPoint::new(52.02, 13.28)), Some(2));
        assert_eq!(index.classify(GeoPoint::new(0.0, 0.0)), None);
    }
}
