//! Discovery orchestration and result filtering.
//!
//! [`DiscoveryEngine`] owns the superset of the last successful discovery
//! run; [`filter_points`] derives the caller-facing view from it without
//! any network round-trip.

pub mod discovery;
pub mod filter;
pub mod synonyms;

pub use discovery::DiscoveryEngine;
pub use filter::filter_points;
pub use synonyms::expand_material_query;
