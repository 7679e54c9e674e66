pub mod client;
pub mod error;
pub mod parse;
pub mod query;
pub mod retry;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use parse::parse_element;
pub use query::build_query;
pub use types::{Bounds, Coordinate, ElementKind, OverpassResponse, RawElement};
