//! Typed accessor over the loose OSM tag dictionary.
//!
//! The geodata source supplies an untyped string map per feature. Rather
//! than passing raw maps through the pipeline, [`PointTags`] exposes the
//! finite key set the engine cares about, so the classifier and the
//! name/address/material resolvers stay testable in isolation.
//!
//! Empty-string values are treated as absent throughout, matching how the
//! rest of the pipeline handles missing data.

use std::collections::HashMap;

/// Accessor wrapper over one feature's raw `tags` map.
#[derive(Debug, Clone, Default)]
pub struct PointTags {
    raw: HashMap<String, String>,
}

impl PointTags {
    #[must_use]
    pub fn new(raw: HashMap<String, String>) -> Self {
        Self { raw }
    }

    /// Looks up a key, treating empty values as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.get("operator")
    }

    #[must_use]
    pub fn amenity(&self) -> Option<&str> {
        self.get("amenity")
    }

    #[must_use]
    pub fn recycling_type(&self) -> Option<&str> {
        self.get("recycling_type")
    }

    #[must_use]
    pub fn waste(&self) -> Option<&str> {
        self.get("waste")
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.get("addr:street")
    }

    #[must_use]
    pub fn housenumber(&self) -> Option<&str> {
        self.get("addr:housenumber")
    }

    #[must_use]
    pub fn postcode(&self) -> Option<&str> {
        self.get("addr:postcode")
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.get("addr:city")
    }

    #[must_use]
    pub fn opening_hours(&self) -> Option<&str> {
        self.get("opening_hours")
    }

    /// `phone`, falling back to `contact:phone`.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.get("phone").or_else(|| self.get("contact:phone"))
    }

    /// `website`, falling back to `contact:website`.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.get("website").or_else(|| self.get("contact:website"))
    }

    /// Iterates over the material suffixes of `recycling:<material>=yes`
    /// tags, e.g. `recycling:glass=yes` yields `"glass"`.
    pub fn recycling_materials(&self) -> impl Iterator<Item = &str> {
        self.raw.iter().filter_map(|(key, value)| {
            let suffix = key.strip_prefix("recycling:")?;
            (value == "yes" && !suffix.is_empty()).then_some(suffix)
        })
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PointTags {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_treats_empty_value_as_absent() {
        let tags = PointTags::from([("name", "")]);
        assert!(tags.name().is_none());
    }

    #[test]
    fn get_returns_present_value() {
        let tags = PointTags::from([("name", "Centro Raccolta Nord")]);
        assert_eq!(tags.name(), Some("Centro Raccolta Nord"));
    }

    #[test]
    fn phone_falls_back_to_contact_key() {
        let tags = PointTags::from([("contact:phone", "+39 02 1234567")]);
        assert_eq!(tags.phone(), Some("+39 02 1234567"));
    }

    #[test]
    fn phone_prefers_plain_key() {
        let tags = PointTags::from([("phone", "+39 02 1"), ("contact:phone", "+39 02 2")]);
        assert_eq!(tags.phone(), Some("+39 02 1"));
    }

    #[test]
    fn recycling_materials_yields_yes_suffixes_only() {
        let tags = PointTags::from([
            ("recycling:glass", "yes"),
            ("recycling:paper", "no"),
            ("recycling:cans", "yes"),
            ("recycling_type", "container"),
        ]);
        let mut materials: Vec<&str> = tags.recycling_materials().collect();
        materials.sort_unstable();
        assert_eq!(materials, vec!["cans", "glass"]);
    }

    #[test]
    fn recycling_materials_ignores_bare_prefix() {
        let tags = PointTags::from([("recycling:", "yes")]);
        assert_eq!(tags.recycling_materials().count(), 0);
    }
}
