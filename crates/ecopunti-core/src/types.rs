//! Core domain types for collection-point discovery.
//!
//! Everything here is plain data: the engine produces [`CollectionPoint`]
//! lists, the caller owns a [`SearchFilterState`], and each successful
//! discovery run is captured as an immutable [`Snapshot`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound for the search radius, in meters.
pub const MIN_RADIUS_METERS: u32 = 1_000;

/// Upper bound for the search radius, in meters.
pub const MAX_RADIUS_METERS: u32 = 20_000;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The kind of waste-collection facility a map feature represents.
///
/// Every raw record maps to exactly one variant; [`PointType::Generic`] is
/// the fallback when no classification rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    EcoCenter,
    Container,
    CollectionCenter,
    EcologicalIsland,
    Generic,
}

impl PointType {
    /// Human-facing name, also used as the name fallback for unnamed features.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EcoCenter => "Eco-center",
            Self::Container => "Recycling container",
            Self::CollectionCenter => "Collection center",
            Self::EcologicalIsland => "Ecological island",
            Self::Generic => "Collection point",
        }
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A normalized waste-collection point produced by one discovery run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPoint {
    /// Stable identifier derived from the source record (`"node/123"`).
    /// Unique within one discovery run, not globally durable.
    pub id: String,

    /// Display name. Never empty: falls back to the operator or the
    /// point type's display name.
    pub name: String,

    pub location: GeoCoordinate,

    /// Great-circle distance from the reference coordinate, in meters.
    /// Always non-negative; recomputed on every discovery run.
    pub distance_meters: f64,

    pub address: Option<String>,

    /// Canonicalized accepted materials (title-cased, underscores replaced
    /// by spaces). May be empty.
    pub accepted_materials: BTreeSet<String>,

    pub point_type: PointType,

    pub opening_hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Caller-owned filter state. Read-only to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilterState {
    /// Search radius in meters, always within
    /// [`MIN_RADIUS_METERS`]..=[`MAX_RADIUS_METERS`].
    pub radius_meters: u32,

    /// Free-text material filter. Empty means no material filtering.
    pub material_query: String,

    /// Optional exact point-type filter.
    pub type_filter: Option<PointType>,
}

impl SearchFilterState {
    #[must_use]
    pub fn new(radius_meters: u32) -> Self {
        Self {
            radius_meters: clamp_radius(radius_meters),
            material_query: String::new(),
            type_filter: None,
        }
    }
}

impl Default for SearchFilterState {
    fn default() -> Self {
        Self::new(5_000)
    }
}

/// Clamps a radius into the supported bounds.
#[must_use]
pub const fn clamp_radius(radius_meters: u32) -> u32 {
    if radius_meters < MIN_RADIUS_METERS {
        MIN_RADIUS_METERS
    } else if radius_meters > MAX_RADIUS_METERS {
        MAX_RADIUS_METERS
    } else {
        radius_meters
    }
}

/// The full unfiltered result of one successful discovery run.
///
/// Immutable once built; the engine replaces the whole snapshot atomically
/// and never mutates it in place, so readers either see the previous run or
/// the complete new one.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// All parsed points, sorted ascending by `distance_meters`.
    pub points: Vec<CollectionPoint>,

    /// The reference coordinate distances were computed from.
    pub center: GeoCoordinate,

    /// The radius this snapshot was fetched for, in meters.
    pub radius_meters: u32,

    pub fetched_at: DateTime<Utc>,
}
