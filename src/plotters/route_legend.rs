use ahash::AHashMap;
use rgb::RGB8;

use crate::map_view::DisplayDensity;
use crate::models::RouteNumber;

const LEGEND_TEXT_SIZE: f32 = 20.0;

/// Legend listing the routes currently drawn, each with its line colour.
#[derive(Debug, Clone)]
pub struct BusRouteLegendOverlay {
    entries: Vec<RouteNumber>,
    colours: AHashMap<RouteNumber, RGB8>,
    pub text_size: f32,
}

impl BusRouteLegendOverlay {
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            entries: Vec::new(),
            colours: AHashMap::new(),
            text_size: density.scale(LEGEND_TEXT_SIZE),
        }
    }

    pub fn add(&mut self, route: &RouteNumber) {
        if !self.entries.contains(route) {
            self.entries.push(route.clone());
        }
        self.get_color(route);
    }

    /// Empties the legend. Colours already handed out are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[RouteNumber] {
        &self.entries
    }

    pub fn get_color(&mut self, route: &RouteNumber) -> RGB8 {
        *self
            .colours
            .entry(route.clone())
            .or_insert_with(|| colour_for_route(route))
    }
}

/// Colour derived from the route number alone, so a route is drawn the same
/// colour across runs.
pub fn colour_for_route(route: &RouteNumber) -> RGB8 {
    let hue = (seahash::hash(route.as_str().as_bytes()) % 360) as f32;
    hsv_to_rgb(hue, 0.85, 0.85)
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> RGB8 {
    let c = value * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f32| ((v + m) * 255.0).round() as u8;
    RGB8::new(to_u8(r), to_u8(g), to_u8(b))
}
