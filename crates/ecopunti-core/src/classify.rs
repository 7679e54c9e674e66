//! Heuristic classification of a map feature into a [`PointType`].
//!
//! Classification is an explicit ordered rule list evaluated top to bottom
//! with first-match-wins semantics. Rules return `None` to fall through;
//! once a rule returns `Some`, evaluation stops — including the `Generic`
//! verdict for an `amenity=recycling` feature with no material tags.

use crate::tags::PointTags;
use crate::types::PointType;

type Rule = fn(&PointTags) -> Option<PointType>;

/// Ordered classification rules; earlier rules take priority.
const RULES: &[Rule] = &[
    by_recycling_type,
    by_amenity,
    by_waste_disposal,
    by_loose_recycling_tags,
];

/// Derives the [`PointType`] for a feature from its tags.
///
/// Falls back to [`PointType::Generic`] when no rule matches.
#[must_use]
pub fn classify(tags: &PointTags) -> PointType {
    RULES
        .iter()
        .find_map(|rule| rule(tags))
        .unwrap_or(PointType::Generic)
}

/// `recycling_type=centre` is a staffed eco-center, `=container` a street
/// container. Takes priority over every other tag combination.
fn by_recycling_type(tags: &PointTags) -> Option<PointType> {
    match tags.recycling_type() {
        Some("centre") => Some(PointType::EcoCenter),
        Some("container") => Some(PointType::Container),
        _ => None,
    }
}

/// Classifies by the `amenity` tag. For `amenity=recycling` the number of
/// `recycling:*=yes` tags decides: more than three distinct materials is an
/// ecological island, at least one is a container, none is generic.
fn by_amenity(tags: &PointTags) -> Option<PointType> {
    match tags.amenity() {
        Some("waste_transfer_station") => Some(PointType::EcoCenter),
        Some("waste_disposal") => Some(PointType::CollectionCenter),
        Some("recycling") => {
            let materials = tags.recycling_materials().count();
            Some(if materials > 3 {
                PointType::EcologicalIsland
            } else if materials > 0 {
                PointType::Container
            } else {
                PointType::Generic
            })
        }
        _ => None,
    }
}

fn by_waste_disposal(tags: &PointTags) -> Option<PointType> {
    (tags.waste() == Some("disposal")).then_some(PointType::CollectionCenter)
}

/// A feature carrying `recycling:*=yes` tags without any of the tags above
/// still counts as a container.
fn by_loose_recycling_tags(tags: &PointTags) -> Option<PointType> {
    (tags.recycling_materials().next().is_some()).then_some(PointType::Container)
}
