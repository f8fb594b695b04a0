//! What the plotters need from the host map widget, and the retained
//! primitives they hand back to it for rendering.

pub mod widgets;

use crate::models::LatLon;

pub use widgets::{
    ClusterIcon, ItemizedIconOverlay, Marker, MarkerIcon, MarkerId, OverlayItem, Polyline,
    RadiusMarkerClusterer,
};

/// Zoom used when the map hasn't reported one yet.
pub const DEFAULT_ZOOM: u32 = 16;

/// The host map widget's current view.
pub trait MapViewport {
    /// North-west and south-east corners of the visible area.
    fn bounding_box(&self) -> (LatLon, LatLon);

    /// Current zoom level, 0 if the map doesn't know yet.
    fn zoom_level(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticViewport {
    pub north_west: LatLon,
    pub south_east: LatLon,
    pub zoom: u32,
}

impl StaticViewport {
    pub fn new(north_west: LatLon, south_east: LatLon, zoom: u32) -> Self {
        Self {
            north_west,
            south_east,
            zoom,
        }
    }
}

impl MapViewport for StaticViewport {
    fn bounding_box(&self) -> (LatLon, LatLon) {
        (self.north_west, self.south_east)
    }

    fn zoom_level(&self) -> u32 {
        self.zoom
    }
}

/// Display density (dots per inch relative to a baseline screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayDensity(pub f32);

impl Default for DisplayDensity {
    fn default() -> Self {
        DisplayDensity(1.0)
    }
}

impl DisplayDensity {
    pub fn scale(&self, value: f32) -> f32 {
        value * self.0
    }
}

/// Visible area shared by every plotter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewOverlay {
    pub north_west: LatLon,
    pub south_east: LatLon,
    pub density: DisplayDensity,
}

impl MapViewOverlay {
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            north_west: LatLon::new(0.0, 0.0),
            south_east: LatLon::new(0.0, 0.0),
            density,
        }
    }

    pub fn update_visible_area(&mut self, view: &dyn MapViewport) {
        let (north_west, south_east) = view.bounding_box();
        self.north_west = north_west;
        self.south_east = south_east;
    }

    pub fn contains(&self, p: &LatLon) -> bool {
        crate::geometry::rectangle_contains_point(&self.north_west, &self.south_east, p)
    }

    pub fn intersects(&self, a: &LatLon, b: &LatLon) -> bool {
        crate::geometry::rectangle_intersects_line(&self.north_west, &self.south_east, a, b)
    }
}
