//! Material synonym table for free-text filtering.
//!
//! Maps canonical human-facing keywords (Italian, as typed by users) to the
//! source-tag material names a matching point may carry. Suffixes are
//! stored in canonical form (lowercase, spaces instead of underscores) so
//! they compare directly against canonicalized accepted materials.

/// Canonical keyword → source-tag material names.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("plastica", &["plastic", "pet"]),
    ("carta", &["paper"]),
    ("cartone", &["cardboard", "paper packaging"]),
    ("vetro", &["glass", "glass bottles"]),
    ("organico", &["organic", "green waste", "food waste"]),
    ("metallo", &["metal", "cans", "scrap metal"]),
    ("alluminio", &["aluminium", "cans"]),
    ("indumenti", &["clothes", "shoes", "textiles"]),
    ("batterie", &["batteries", "car batteries"]),
    (
        "elettronica",
        &[
            "electrical appliances",
            "electrical items",
            "small appliances",
            "computers",
        ],
    ),
    ("olio", &["cooking oil", "engine oil", "oil"]),
    ("farmaci", &["drugs", "medicines"]),
    ("legno", &["wood"]),
    ("verde", &["green waste", "garden waste"]),
    ("ingombranti", &["bulky waste", "furniture"]),
];

/// Expands a trimmed, lower-cased material query into the union of
/// material names for every canonical keyword that contains the query as
/// a substring.
///
/// The partial match is intentional: `"cart"` expands through both
/// `"carta"` and `"cartone"`. An empty or unknown query expands to
/// nothing; the caller still matches the query against accepted materials
/// directly.
#[must_use]
pub fn expand_material_query(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut keys: Vec<&'static str> = SYNONYMS
        .iter()
        .filter(|(canonical, _)| canonical.contains(query))
        .flat_map(|(_, suffixes)| suffixes.iter().copied())
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keyword_expands_to_its_suffixes() {
        let keys = expand_material_query("vetro");
        assert_eq!(keys, vec!["glass", "glass bottles"]);
    }

    #[test]
    fn partial_keyword_expands_through_all_containing_keys() {
        // "cart" is contained in both "carta" and "cartone".
        let keys = expand_material_query("cart");
        assert!(keys.contains(&"paper"));
        assert!(keys.contains(&"cardboard"));
        assert!(keys.contains(&"paper packaging"));
        assert!(!keys.contains(&"glass"));
    }

    #[test]
    fn overlapping_expansions_are_deduplicated() {
        // "cans" appears under both "metallo" and "alluminio"; a query
        // matching both must not yield it twice.
        let keys = expand_material_query("ll");
        assert_eq!(keys.iter().filter(|k| **k == "cans").count(), 1);
    }

    #[test]
    fn unknown_query_expands_to_nothing() {
        assert!(expand_material_query("styrofoam").is_empty());
    }

    #[test]
    fn empty_query_expands_to_nothing() {
        assert!(expand_material_query("").is_empty());
    }
}
