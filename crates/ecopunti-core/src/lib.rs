//! Domain model and pure functions for the collection-point discovery engine.

pub mod app_config;
pub mod classify;
pub mod config;
pub mod distance;
pub mod error;
pub mod resolve;
pub mod tags;
pub mod types;

pub use app_config::AppConfig;
pub use classify::classify;
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::haversine_meters;
pub use error::ConfigError;
pub use resolve::{build_address, extract_materials, resolve_name};
pub use tags::PointTags;
pub use types::{
    clamp_radius, CollectionPoint, GeoCoordinate, PointType, SearchFilterState, Snapshot,
    MAX_RADIUS_METERS, MIN_RADIUS_METERS,
};
