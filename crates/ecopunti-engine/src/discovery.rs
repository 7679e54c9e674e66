//! Discovery orchestration: query → fetch → parse → sort → snapshot.

use std::collections::HashSet;

use chrono::Utc;
use ecopunti_core::{
    clamp_radius, CollectionPoint, GeoCoordinate, PointType, SearchFilterState, Snapshot,
};
use ecopunti_overpass::{build_query, parse_element, OverpassClient, OverpassError};

use crate::filter::filter_points;

/// Owns the superset of the last successful discovery run together with
/// the caller's filter state and the loading/error observables.
///
/// The superset is an immutable [`Snapshot`] replaced wholesale after a
/// run fully assembles; a failed run leaves the previous snapshot in
/// place. `discover` takes `&mut self`, so within one owner calls are
/// naturally serialized; when callers race through separate owners the
/// last completed run wins.
pub struct DiscoveryEngine {
    client: OverpassClient,
    snapshot: Option<Snapshot>,
    filter_state: SearchFilterState,
    is_loading: bool,
    error_message: Option<String>,
}

impl DiscoveryEngine {
    #[must_use]
    pub fn new(client: OverpassClient, default_radius_meters: u32) -> Self {
        Self {
            client,
            snapshot: None,
            filter_state: SearchFilterState::new(default_radius_meters),
            is_loading: false,
            error_message: None,
        }
    }

    /// Creates an engine from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &ecopunti_core::AppConfig) -> Result<Self, OverpassError> {
        Ok(Self::new(
            OverpassClient::from_config(config)?,
            config.default_radius_meters,
        ))
    }

    /// Runs one discovery around `center` with the current radius.
    ///
    /// Builds the query, fetches raw elements, parses each into a
    /// [`CollectionPoint`] (elements without resolvable geometry are
    /// dropped, duplicate source ids keep their first occurrence), sorts
    /// ascending by distance, and replaces the superset snapshot. Nothing
    /// is committed on failure: the previous snapshot stays visible and
    /// the error message observable is set.
    ///
    /// Returns the full unfiltered superset of the new run.
    ///
    /// # Errors
    ///
    /// Returns the [`OverpassError`] from the fetch; parsing never fails.
    pub async fn discover(
        &mut self,
        center: GeoCoordinate,
    ) -> Result<Vec<CollectionPoint>, OverpassError> {
        let radius_meters = self.filter_state.radius_meters;
        self.is_loading = true;
        self.error_message = None;

        let query = build_query(center, radius_meters);
        let result = self.client.fetch_elements(&query).await;
        self.is_loading = false;

        let elements = match result {
            Ok(elements) => elements,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return Err(e);
            }
        };

        let total = elements.len();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut points: Vec<CollectionPoint> = elements
            .into_iter()
            .filter_map(|element| parse_element(element, center))
            .filter(|point| seen_ids.insert(point.id.clone()))
            .collect();
        points.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

        tracing::debug!(
            total,
            parsed = points.len(),
            radius_meters,
            "discovery run complete"
        );

        self.snapshot = Some(Snapshot {
            points: points.clone(),
            center,
            radius_meters,
            fetched_at: Utc::now(),
        });

        Ok(points)
    }

    /// Updates the free-text material filter; the filtered view is
    /// re-derived from the existing snapshot, no network involved.
    pub fn set_material_filter(&mut self, text: &str) {
        self.filter_state.material_query = text.to_owned();
    }

    /// Sets or clears the type filter.
    pub fn set_type_filter(&mut self, point_type: Option<PointType>) {
        self.filter_state.type_filter = point_type;
    }

    /// Sets the search radius, clamped to the supported bounds. Takes
    /// effect on the next `discover` call; the current snapshot is kept.
    pub fn set_radius(&mut self, radius_meters: u32) {
        self.filter_state.radius_meters = clamp_radius(radius_meters);
    }

    /// The filtered, caller-facing view of the current snapshot. Empty
    /// before the first successful discovery run.
    #[must_use]
    pub fn filtered_points(&self) -> Vec<CollectionPoint> {
        self.snapshot
            .as_ref()
            .map(|snapshot| filter_points(&snapshot.points, &self.filter_state))
            .unwrap_or_default()
    }

    /// The last successful run's full superset, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn filter_state(&self) -> &SearchFilterState {
        &self.filter_state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed discovery run; cleared when a new run
    /// starts.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
