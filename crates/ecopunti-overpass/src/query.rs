//! Overpass QL query construction.

use ecopunti_core::GeoCoordinate;

/// Tag selectors for waste-collection features, matching the three ways
/// such points are mapped in practice.
const SELECTORS: &[&str] = &[
    r#"["amenity"="recycling"]"#,
    r#"["recycling_type"="centre"]"#,
    r#"["waste"="disposal"]"#,
];

const GEOMETRY_KINDS: &[&str] = &["node", "way", "relation"];

/// Builds the Overpass QL query for all collection points within
/// `radius_meters` of `center`.
///
/// Requests JSON output and full element bodies; `out body center;` makes
/// the interpreter attach a representative coordinate (or bounding box) to
/// way and relation results. Pure construction, no error conditions.
#[must_use]
pub fn build_query(center: GeoCoordinate, radius_meters: u32) -> String {
    let around = format!(
        "around:{radius_meters},{:.6},{:.6}",
        center.latitude, center.longitude
    );

    let mut query = String::from("[out:json][timeout:25];(");
    for selector in SELECTORS {
        for kind in GEOMETRY_KINDS {
            query.push_str(kind);
            query.push_str(selector);
            query.push('(');
            query.push_str(&around);
            query.push_str(");");
        }
    }
    query.push_str(");out body center;");
    query
}
