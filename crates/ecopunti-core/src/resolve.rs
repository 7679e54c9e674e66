//! Name, address, and material resolution from a feature's tags.
//!
//! All three are pure functions over [`PointTags`] with documented defaults
//! for missing data; none of them can fail.

use std::collections::BTreeSet;

use crate::tags::PointTags;
use crate::types::PointType;

/// Material entry added when a feature carries `waste=disposal`.
const GENERIC_WASTE: &str = "Generic waste";

/// Resolves the display name for a point.
///
/// Preference order: the `name` tag, then `"{operator} - {display name}"`,
/// then the point type's display name. The result is never empty.
#[must_use]
pub fn resolve_name(tags: &PointTags, point_type: PointType) -> String {
    if let Some(name) = tags.name() {
        return name.to_owned();
    }
    if let Some(operator) = tags.operator() {
        return format!("{operator} - {}", point_type.display_name());
    }
    point_type.display_name().to_owned()
}

/// Composes a human-readable address from the `addr:*` tags.
///
/// The street part is `"{street} {housenumber}"` (housenumber omitted when
/// absent); the locality part is `"{postcode} {city}"` (just the city when
/// no postcode). Non-empty parts are joined with `", "`. Returns `None`
/// when neither part exists.
#[must_use]
pub fn build_address(tags: &PointTags) -> Option<String> {
    let street_part = tags.street().map(|street| match tags.housenumber() {
        Some(number) => format!("{street} {number}"),
        None => street.to_owned(),
    });

    let locality_part = tags.city().map(|city| match tags.postcode() {
        Some(postcode) => format!("{postcode} {city}"),
        None => city.to_owned(),
    });

    let parts: Vec<String> = [street_part, locality_part].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Extracts the canonicalized set of accepted materials.
///
/// Every `recycling:<suffix>=yes` tag contributes `<suffix>` with
/// underscores replaced by spaces and the first letter upper-cased.
/// `waste=disposal` additionally contributes a fixed `"Generic waste"`
/// entry.
#[must_use]
pub fn extract_materials(tags: &PointTags) -> BTreeSet<String> {
    let mut materials: BTreeSet<String> = tags
        .recycling_materials()
        .map(canonicalize_material)
        .collect();

    if tags.waste() == Some("disposal") {
        materials.insert(GENERIC_WASTE.to_owned());
    }

    materials
}

/// `plastic_bottles` → `Plastic bottles`.
fn canonicalize_material(suffix: &str) -> String {
    let spaced = suffix.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // resolve_name
    // -----------------------------------------------------------------------

    #[test]
    fn name_tag_wins() {
        let tags = PointTags::from([("name", "Riciclo Via Roma"), ("operator", "AMSA")]);
        assert_eq!(
            resolve_name(&tags, PointType::Container),
            "Riciclo Via Roma"
        );
    }

    #[test]
    fn operator_fallback_includes_display_name() {
        let tags = PointTags::from([("operator", "AMSA")]);
        assert_eq!(
            resolve_name(&tags, PointType::EcoCenter),
            "AMSA - Eco-center"
        );
    }

    #[test]
    fn display_name_is_last_resort() {
        let tags = PointTags::default();
        assert_eq!(
            resolve_name(&tags, PointType::EcologicalIsland),
            "Ecological island"
        );
    }

    #[test]
    fn empty_name_tag_falls_through_to_operator() {
        let tags = PointTags::from([("name", ""), ("operator", "AMSA")]);
        assert_eq!(
            resolve_name(&tags, PointType::Container),
            "AMSA - Recycling container"
        );
    }

    // -----------------------------------------------------------------------
    // build_address
    // -----------------------------------------------------------------------

    #[test]
    fn full_address() {
        let tags = PointTags::from([
            ("addr:street", "Via Roma"),
            ("addr:housenumber", "5"),
            ("addr:postcode", "20121"),
            ("addr:city", "Milano"),
        ]);
        assert_eq!(
            build_address(&tags).as_deref(),
            Some("Via Roma 5, 20121 Milano")
        );
    }

    #[test]
    fn street_without_housenumber() {
        let tags = PointTags::from([("addr:street", "Via Roma"), ("addr:city", "Milano")]);
        assert_eq!(build_address(&tags).as_deref(), Some("Via Roma, Milano"));
    }

    #[test]
    fn city_without_postcode() {
        let tags = PointTags::from([("addr:city", "Milano")]);
        assert_eq!(build_address(&tags).as_deref(), Some("Milano"));
    }

    #[test]
    fn street_only() {
        let tags = PointTags::from([("addr:street", "Via Roma"), ("addr:housenumber", "5")]);
        assert_eq!(build_address(&tags).as_deref(), Some("Via Roma 5"));
    }

    #[test]
    fn postcode_alone_is_not_an_address() {
        // A postcode without a city contributes nothing.
        let tags = PointTags::from([("addr:postcode", "20121")]);
        assert!(build_address(&tags).is_none());
    }

    #[test]
    fn no_address_tags_yield_none() {
        assert!(build_address(&PointTags::default()).is_none());
    }

    // -----------------------------------------------------------------------
    // extract_materials
    // -----------------------------------------------------------------------

    #[test]
    fn materials_are_canonicalized() {
        let tags = PointTags::from([
            ("recycling:glass", "yes"),
            ("recycling:green_waste", "yes"),
            ("recycling:paper", "no"),
        ]);
        let materials = extract_materials(&tags);
        assert!(materials.contains("Glass"));
        assert!(materials.contains("Green waste"));
        assert!(!materials.contains("Paper"));
        assert_eq!(materials.len(), 2);
    }

    #[test]
    fn waste_disposal_adds_generic_waste() {
        let tags = PointTags::from([("waste", "disposal")]);
        let materials = extract_materials(&tags);
        assert!(materials.contains("Generic waste"));
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn empty_tags_yield_empty_set() {
        assert!(extract_materials(&PointTags::default()).is_empty());
    }

    #[test]
    fn canonicalize_replaces_all_underscores() {
        let tags = PointTags::from([("recycling:small_electrical_appliances", "yes")]);
        let materials = extract_materials(&tags);
        assert!(materials.contains("Small electrical appliances"));
    }
}
