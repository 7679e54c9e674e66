//! Raw wire types for the Overpass interpreter's JSON output.
//!
//! ## Observed shape
//!
//! The interpreter wraps everything in `{"elements": [...]}`. Each element
//! carries `type` (`"node"`, `"way"`, `"relation"`) and `id`. Nodes carry
//! `lat`/`lon` directly. With `out body center;` ways and relations carry a
//! computed `center {lat, lon}`; some interpreter versions emit a
//! `bounds {minlat, maxlat, minlon, maxlon}` object instead (or as well).
//! Elements with neither cannot be placed on the map and are dropped during
//! parsing.
//!
//! `tags` may be absent entirely for untagged members; `#[serde(default)]`
//! maps that to an empty dictionary.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope of an interpreter response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// The geometry kind of a raw element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Way => f.write_str("way"),
            Self::Relation => f.write_str("relation"),
        }
    }
}

/// One raw map feature from the interpreter.
#[derive(Debug, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Source identifier, unique per geometry kind.
    pub id: i64,

    /// Present on nodes only.
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,

    /// Interpreter-computed representative point for ways/relations.
    #[serde(default)]
    pub center: Option<Coordinate>,

    /// Bounding box for ways/relations when no center is computed.
    #[serde(default)]
    pub bounds: Option<Bounds>,

    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// A bare `{lat, lon}` pair as emitted in `center` objects.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A way/relation bounding box.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub minlat: f64,
    pub maxlat: f64,
    pub minlon: f64,
    pub maxlon: f64,
}
