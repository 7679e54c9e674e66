//! Great-circle distance on a spherical Earth.

use crate::types::GeoCoordinate;

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Symmetric and always non-negative; identical inputs yield `0.0` up to
/// floating-point epsilon.
#[must_use]
pub fn haversine_meters(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp guards against rounding pushing h a hair above 1.0 for
    // antipodal points.
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}
