//! Conversion from raw interpreter elements to [`CollectionPoint`]s.
//!
//! One unresolvable feature must not fail a whole discovery run, so this
//! module never returns an error: elements that cannot be placed on the
//! map yield `None` (logged), and missing tags resolve to the documented
//! defaults.

use ecopunti_core::{
    build_address, classify, extract_materials, haversine_meters, resolve_name, CollectionPoint,
    GeoCoordinate, PointTags,
};

use crate::types::{ElementKind, RawElement};

/// Parses one raw element into a [`CollectionPoint`], computing the
/// distance from `reference`.
///
/// Returns `None` when no representative coordinate can be resolved; the
/// element then contributes nothing to the discovery result.
#[must_use]
pub fn parse_element(element: RawElement, reference: GeoCoordinate) -> Option<CollectionPoint> {
    let location = representative_coordinate(&element)?;
    let id = format!("{}/{}", element.kind, element.id);
    let tags = PointTags::new(element.tags);

    let point_type = classify(&tags);

    Some(CollectionPoint {
        id,
        name: resolve_name(&tags, point_type),
        location,
        distance_meters: haversine_meters(reference, location),
        address: build_address(&tags),
        accepted_materials: extract_materials(&tags),
        point_type,
        opening_hours: tags.opening_hours().map(str::to_owned),
        phone: tags.phone().map(str::to_owned),
        website: tags.website().map(str::to_owned),
    })
}

/// Resolves the representative coordinate for an element.
///
/// Nodes use their own position. Ways and relations prefer the
/// interpreter-computed `center`, then the bounding-box midpoint; with
/// neither they cannot be placed and are dropped.
fn representative_coordinate(element: &RawElement) -> Option<GeoCoordinate> {
    match element.kind {
        ElementKind::Node => match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)),
            _ => {
                tracing::warn!(id = element.id, "node without coordinates, dropping");
                None
            }
        },
        ElementKind::Way | ElementKind::Relation => {
            if let Some(center) = element.center {
                Some(GeoCoordinate::new(center.lat, center.lon))
            } else if let Some(bounds) = element.bounds {
                Some(GeoCoordinate::new(
                    (bounds.minlat + bounds.maxlat) / 2.0,
                    (bounds.minlon + bounds.maxlon) / 2.0,
                ))
            } else {
                tracing::warn!(
                    kind = %element.kind,
                    id = element.id,
                    "element without center or bounds, dropping"
                );
                None
            }
        }
    }
}
