use rgb::RGB8;

use crate::models::LatLon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerIcon {
    Stop,
    ClosestStop,
    Bus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterIcon {
    StopCluster,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub title: String,
    pub position: LatLon,
    pub icon: MarkerIcon,
}

impl Marker {
    pub fn new(id: MarkerId, position: LatLon) -> Self {
        Self {
            id,
            title: String::new(),
            position,
            icon: MarkerIcon::Stop,
        }
    }
}

/// Groups markers that are close together on screen. The grouping itself is
/// done by the host map library; this only records what goes in.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusMarkerClusterer {
    pub radius: u32,
    pub text_size: f32,
    pub icon: ClusterIcon,
    items: Vec<MarkerId>,
}

impl RadiusMarkerClusterer {
    pub fn new(radius: u32, text_size: f32) -> Self {
        Self {
            radius,
            text_size,
            icon: ClusterIcon::StopCluster,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, marker: MarkerId) {
        self.items.push(marker);
    }

    pub fn items(&self) -> &[MarkerId] {
        &self.items
    }

    pub fn contains(&self, marker: MarkerId) -> bool {
        self.items.contains(&marker)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub width: f32,
    pub color: RGB8,
    pub points: Vec<geo_types::Point<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayItem {
    pub title: String,
    pub snippet: String,
    pub position: LatLon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemizedIconOverlay {
    pub default_icon: MarkerIcon,
    items: Vec<OverlayItem>,
}

impl ItemizedIconOverlay {
    pub fn new(default_icon: MarkerIcon) -> Self {
        Self {
            default_icon,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    pub fn remove_all_items(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[OverlayItem] {
        &self.items
    }
}
