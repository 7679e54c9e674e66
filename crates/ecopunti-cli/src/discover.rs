//! The `discover` command: one discovery run printed as a plain listing.

use clap::{Args, ValueEnum};
use ecopunti_core::{AppConfig, CollectionPoint, GeoCoordinate, PointType};
use ecopunti_engine::DiscoveryEngine;

#[derive(Debug, Args)]
pub(crate) struct DiscoverArgs {
    /// Latitude of the search center, in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the search center, in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Search radius in meters (clamped to 1000..=20000).
    #[arg(long)]
    pub radius: Option<u32>,

    /// Free-text material filter, e.g. "vetro" or "cart".
    #[arg(long)]
    pub material: Option<String>,

    /// Only show points of this type.
    #[arg(long, value_enum)]
    pub point_type: Option<PointTypeArg>,
}

/// CLI-facing spelling of the point types.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PointTypeArg {
    EcoCenter,
    Container,
    CollectionCenter,
    EcologicalIsland,
    Generic,
}

impl From<PointTypeArg> for PointType {
    fn from(arg: PointTypeArg) -> Self {
        match arg {
            PointTypeArg::EcoCenter => Self::EcoCenter,
            PointTypeArg::Container => Self::Container,
            PointTypeArg::CollectionCenter => Self::CollectionCenter,
            PointTypeArg::EcologicalIsland => Self::EcologicalIsland,
            PointTypeArg::Generic => Self::Generic,
        }
    }
}

/// Runs one discovery and prints the filtered result list.
///
/// # Errors
///
/// Returns an error if the engine cannot be constructed or the geodata
/// fetch fails after retries.
pub(crate) async fn run_discover(config: &AppConfig, args: &DiscoverArgs) -> anyhow::Result<()> {
    let mut engine = DiscoveryEngine::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Overpass client: {e}"))?;

    engine.set_radius(args.radius.unwrap_or(config.default_radius_meters));
    if let Some(material) = &args.material {
        engine.set_material_filter(material);
    }
    engine.set_type_filter(args.point_type.map(PointType::from));

    let center = GeoCoordinate::new(args.lat, args.lon);
    tracing::info!(
        lat = center.latitude,
        lon = center.longitude,
        radius_meters = engine.filter_state().radius_meters,
        "starting discovery run"
    );
    engine.discover(center).await?;

    let points = engine.filtered_points();
    let radius = engine.filter_state().radius_meters;
    println!(
        "{} collection points within {radius} m of {:.4}, {:.4}",
        points.len(),
        center.latitude,
        center.longitude
    );
    for point in &points {
        print!("{}", render_point(point));
    }

    Ok(())
}

/// Renders one point as an indented block.
fn render_point(point: &CollectionPoint) -> String {
    let mut out = format!(
        "\n  {} [{}] {}\n",
        point.name,
        point.point_type.display_name(),
        format_distance(point.distance_meters)
    );
    if let Some(address) = &point.address {
        out.push_str(&format!("    {address}\n"));
    }
    if !point.accepted_materials.is_empty() {
        let materials: Vec<&str> = point
            .accepted_materials
            .iter()
            .map(String::as_str)
            .collect();
        out.push_str(&format!("    materials: {}\n", materials.join(", ")));
    }
    if let Some(hours) = &point.opening_hours {
        out.push_str(&format!("    open: {hours}\n"));
    }
    out
}

/// `850.0` → `"850 m"`, `1240.0` → `"1.2 km"`.
fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round())
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}
