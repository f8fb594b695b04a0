use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use tracing::debug;

use crate::map_view::{
    DEFAULT_ZOOM, DisplayDensity, MapViewOverlay, MapViewport, Marker, MarkerIcon, MarkerId,
    RadiusMarkerClusterer,
};
use crate::error::Error;
use crate::models::{LatLon, Stop, StopNumber};
use crate::stop_manager::StopManager;

/// Plots the stops in the visible area as clustered markers, and keeps one of
/// them marked as the stop nearest to the user.
#[derive(Debug, Clone)]
pub struct BusStopPlotter {
    overlay: MapViewOverlay,
    default_zoom: u32,
    stop_clusterer: RadiusMarkerClusterer,
    markers: AHashMap<MarkerId, Marker>,
    // stop -> marker and marker -> stop, kept in step by set_marker
    stop_markers: AHashMap<StopNumber, MarkerId>,
    marker_stops: AHashMap<MarkerId, StopNumber>,
    //None if no stop is within StopManager radius of the user
    nearest_stn_marker: Option<MarkerId>,
    next_marker_id: u64,
}

impl BusStopPlotter {
    pub fn new(density: DisplayDensity) -> Self {
        Self::with_default_zoom(density, DEFAULT_ZOOM)
    }

    pub fn with_default_zoom(density: DisplayDensity, default_zoom: u32) -> Self {
        let mut plotter = Self {
            overlay: MapViewOverlay::new(density),
            default_zoom,
            stop_clusterer: RadiusMarkerClusterer::new(0, 0.0),
            markers: AHashMap::new(),
            stop_markers: AHashMap::new(),
            marker_stops: AHashMap::new(),
            nearest_stn_marker: None,
            next_marker_id: 0,
        };
        plotter.stop_clusterer = plotter.new_stop_clusterer(None);
        plotter
    }

    pub fn stop_clusterer(&self) -> &RadiusMarkerClusterer {
        &self.stop_clusterer
    }

    pub fn visible_area(&self) -> &MapViewOverlay {
        &self.overlay
    }

    /// Markers currently handed to the clusterer, in the order they were added.
    pub fn clustered_markers(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.stop_clusterer
            .items()
            .iter()
            .filter_map(|id| self.markers.get(id))
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn marker_for(&self, stop: StopNumber) -> Option<MarkerId> {
        self.stop_markers.get(&stop).copied()
    }

    pub fn stop_for(&self, marker: MarkerId) -> Option<StopNumber> {
        self.marker_stops.get(&marker).copied()
    }

    pub fn nearest_marker(&self) -> Option<&Marker> {
        self.nearest_stn_marker.and_then(|id| self.markers.get(&id))
    }

    /// Mark all visible stops in the stop manager onto the map.
    ///
    /// Markers are only created for stops that don't have one yet, so a stop
    /// keeps its marker (and icon) while the user pans around.
    /// `update_marker_of_nearest` is the only thing that changes icons.
    pub fn mark_stops(
        &mut self,
        view: &dyn MapViewport,
        stops: &StopManager,
        current_location: Option<&LatLon>,
    ) {
        self.overlay.update_visible_area(view);
        self.stop_clusterer = self.new_stop_clusterer(Some(view));

        let mut created = 0;

        for stop in stops {
            if !self.overlay.contains(&stop.locn) {
                continue;
            }

            let marker = match self.marker_for(stop.number) {
                Some(marker) => marker,
                None => {
                    created += 1;
                    let marker = self.create_marker(stop);
                    self.set_icon(marker, MarkerIcon::Stop);
                    marker
                }
            };

            self.stop_clusterer.add(marker);
        }

        self.retain_live_markers();

        debug!(
            visible = self.stop_clusterer.len(),
            created,
            location = ?current_location,
            "marked stops"
        );
    }

    /// Update marker of nearest stop (called when the user's location has changed).
    /// If `nearest` is None, no stop is marked as the nearest stop.
    pub fn update_marker_of_nearest(&mut self, nearest: Option<&Stop>) {
        match nearest {
            None => self.reset_nearest_marker(),
            Some(stop) => {
                self.replace_nearest_marker_with(stop);

                if self.nearest_stn_marker.is_none() {
                    let marker = self.create_marker(stop);
                    self.stop_clusterer.add(marker);
                    self.nearest_stn_marker = Some(marker);
                }

                if let Some(marker) = self.nearest_stn_marker {
                    self.set_icon(marker, MarkerIcon::ClosestStop);
                }
            }
        }
    }

    /// Forget the marker of `stop`; the next `mark_stops` makes a new one.
    /// A cleared nearest marker stops being the nearest.
    pub fn clear_marker(&mut self, stop: StopNumber) {
        if let Some(marker) = self.stop_markers.remove(&stop) {
            self.marker_stops.remove(&marker);

            if self.nearest_stn_marker == Some(marker) {
                self.reset_nearest_marker();
            }
        }
    }

    pub fn clear_markers(&mut self) {
        self.reset_nearest_marker();
        self.stop_markers.clear();
        self.marker_stops.clear();
    }

    /// Make the stop behind `marker` the selected stop (a tap on the marker).
    pub fn select_stop_for_marker(
        &self,
        marker: MarkerId,
        stops: &mut StopManager,
    ) -> Result<StopNumber, Error> {
        let stop = self.stop_for(marker).ok_or(Error::MarkerNotFound(marker))?;
        stops.set_selected(stop)?;
        Ok(stop)
    }

    fn set_marker(&mut self, stop: StopNumber, marker: MarkerId) {
        self.stop_markers.insert(stop, marker);
        self.marker_stops.insert(marker, stop);
    }

    fn create_marker(&mut self, stop: &Stop) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;

        let mut marker = Marker::new(id, stop.locn);
        marker.title = stop_title(stop);
        self.markers.insert(id, marker);
        self.set_marker(stop.number, id);

        id
    }

    fn set_icon(&mut self, marker: MarkerId, icon: MarkerIcon) {
        if let Some(marker) = self.markers.get_mut(&marker) {
            marker.icon = icon;
        }
    }

    fn reset_nearest_marker(&mut self) {
        if let Some(marker) = self.nearest_stn_marker.take() {
            self.set_icon(marker, MarkerIcon::Stop);
        }
    }

    // a previous nearest marker goes back to the stop icon and the reference moves
    // to whatever marker the new stop already has (None if it has none)
    fn replace_nearest_marker_with(&mut self, stop: &Stop) {
        if let Some(marker) = self.nearest_stn_marker {
            self.set_icon(marker, MarkerIcon::Stop);
            self.nearest_stn_marker = self.marker_for(stop.number);
        }
    }

    fn new_stop_clusterer(&self, view: Option<&dyn MapViewport>) -> RadiusMarkerClusterer {
        let zoom = match view {
            Some(view) => match view.zoom_level() {
                0 => self.default_zoom,
                zoom => zoom,
            },
            None => DEFAULT_ZOOM,
        };

        RadiusMarkerClusterer::new(1000 / zoom.max(1), self.overlay.density.scale(20.0))
    }

    // drops markers nothing can reach anymore
    fn retain_live_markers(&mut self) {
        let live: AHashSet<MarkerId> = self
            .stop_markers
            .values()
            .chain(self.stop_clusterer.items())
            .copied()
            .chain(self.nearest_stn_marker)
            .collect();

        self.markers.retain(|id, _| live.contains(id));
        self.marker_stops.retain(|id, _| live.contains(id));
    }
}

/// Marker title: stop number and name, then one line per route serving the stop.
pub fn stop_title(stop: &Stop) -> String {
    std::iter::once(format!("{} {}", stop.number, stop.name))
        .chain(stop.routes().iter().map(|r| r.to_string()))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_view::StaticViewport;
    use crate::models::RouteNumber;

    #[test]
    fn test_stop_title_lists_routes_in_order() {
        let mut stop = Stop::new(StopNumber(1234), "Main St", LatLon::new(49.0, -123.0));
        stop.add_route(RouteNumber::new("99"));
        stop.add_route(RouteNumber::new("84"));

        assert_eq!(stop_title(&stop), "1234 Main St\n99\n84");
    }

    #[test]
    fn test_stop_title_without_routes() {
        let stop = Stop::new(StopNumber(1234), "Main St", LatLon::new(49.0, -123.0));
        assert_eq!(stop_title(&stop), "1234 Main St");
    }

    #[test]
    fn test_cluster_radius_follows_zoom() {
        let mut plotter = BusStopPlotter::new(DisplayDensity(2.0));
        assert_eq!(plotter.stop_clusterer().radius, 1000 / 16);
        assert_eq!(plotter.stop_clusterer().text_size, 40.0);

        let nw = LatLon::new(49.3, -123.3);
        let se = LatLon::new(49.2, -123.0);
        let stops = StopManager::new();

        plotter.mark_stops(&StaticViewport::new(nw, se, 10), &stops, None);
        assert_eq!(plotter.stop_clusterer().radius, 100);

        //zoom 0 means the map doesn't know yet
        plotter.mark_stops(&StaticViewport::new(nw, se, 0), &stops, None);
        assert_eq!(plotter.stop_clusterer().radius, 1000 / DEFAULT_ZOOM);
    }

    #[test]
    fn test_default_zoom_is_configurable() {
        let mut plotter = BusStopPlotter::with_default_zoom(DisplayDensity(1.0), 10);
        let view = StaticViewport::new(LatLon::new(1.0, 0.0), LatLon::new(0.0, 1.0), 0);
        plotter.mark_stops(&view, &StopManager::new(), None);
        assert_eq!(plotter.stop_clusterer().radius, 100);
    }
}
