//! Pure filtering of a discovery superset.

use ecopunti_core::{CollectionPoint, SearchFilterState};

use crate::synonyms::expand_material_query;

/// Derives the caller-facing list from the superset and the filter state.
///
/// Retains points matching the type filter (exact equality, when set) and
/// the material query. A point matches a non-empty query when any of its
/// accepted materials, lower-cased, contains the trimmed lower-cased query
/// as a substring, or contains any synonym-expanded material name. The
/// superset's distance ordering is preserved; an empty query with no type
/// filter is the identity.
#[must_use]
pub fn filter_points(points: &[CollectionPoint], state: &SearchFilterState) -> Vec<CollectionPoint> {
    let query = state.material_query.trim().to_lowercase();
    let search_keys = expand_material_query(&query);

    points
        .iter()
        .filter(|point| {
            if let Some(wanted) = state.type_filter {
                if point.point_type != wanted {
                    return false;
                }
            }
            if query.is_empty() {
                return true;
            }
            point.accepted_materials.iter().any(|material| {
                let material = material.to_lowercase();
                material.contains(&query) || search_keys.iter().any(|key| material.contains(key))
            })
        })
        .cloned()
        .collect()
}
