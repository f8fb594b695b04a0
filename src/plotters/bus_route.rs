use tracing::debug;

use crate::geometry::gp_from_lat_lon;
use crate::map_view::{DisplayDensity, MapViewOverlay, MapViewport, Polyline};
use crate::models::{Route, RouteNumber};
use crate::plotters::route_legend::BusRouteLegendOverlay;
use crate::route_manager::RouteManager;
use crate::stop_manager::StopManager;

/// Draws the routes through the selected stop, one polyline per visible segment.
#[derive(Debug, Clone)]
pub struct BusRouteDrawer {
    overlay: MapViewOverlay,
    bus_route_legend_overlay: BusRouteLegendOverlay,
    bus_route_overlays: Vec<Polyline>,
}

impl BusRouteDrawer {
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            overlay: MapViewOverlay::new(density),
            bus_route_legend_overlay: BusRouteLegendOverlay::new(density),
            bus_route_overlays: Vec::new(),
        }
    }

    pub fn bus_route_overlays(&self) -> &[Polyline] {
        &self.bus_route_overlays
    }

    pub fn bus_route_legend_overlay(&self) -> &BusRouteLegendOverlay {
        &self.bus_route_legend_overlay
    }

    /// Plot each visible segment of each route pattern of each route going
    /// through the selected stop.
    ///
    /// A segment A-B is kept when it touches the visible rectangle. Without a
    /// selected stop only the legend is cleared; previously drawn lines stay.
    pub fn plot_routes(
        &mut self,
        view: &dyn MapViewport,
        stops: &StopManager,
        routes: &RouteManager,
    ) {
        self.overlay.update_visible_area(view);
        self.bus_route_legend_overlay.clear();

        let Some(selected) = stops.selected() else {
            return;
        };

        self.bus_route_overlays.clear();
        let width = self.line_width(view.zoom_level());

        for number in selected.routes() {
            self.bus_route_legend_overlay.add(number);

            match routes.get(number) {
                Some(route) => self.plot_route(route, width),
                None => debug!(
                    route = %number,
                    stop = %selected.number,
                    "no route data, legend only"
                ),
            }
        }

        debug!(
            stop = %selected.number,
            polylines = self.bus_route_overlays.len(),
            "plotted routes"
        );
    }

    fn plot_route(&mut self, route: &Route, width: f32) {
        let color = self.bus_route_legend_overlay.get_color(&route.number);

        for pattern in route.patterns() {
            for segment in pattern.path.windows(2) {
                if self.overlay.intersects(&segment[0], &segment[1]) {
                    self.bus_route_overlays.push(Polyline {
                        width,
                        color,
                        points: vec![gp_from_lat_lon(&segment[0]), gp_from_lat_lon(&segment[1])],
                    });
                }
            }
        }
    }

    pub fn line_width(&self, zoom_level: u32) -> f32 {
        line_width(zoom_level, self.overlay.density)
    }

    pub fn color_of(&mut self, route: &RouteNumber) -> rgb::RGB8 {
        self.bus_route_legend_overlay.get_color(route)
    }
}

/// Width of line used to plot a bus route at the given zoom level.
pub fn line_width(zoom_level: u32, density: DisplayDensity) -> f32 {
    if zoom_level > 14 {
        density.scale(7.0)
    } else if zoom_level > 10 {
        density.scale(5.0)
    } else {
        density.scale(2.0)
    }
}
