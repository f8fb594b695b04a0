pub mod bus_location;
pub mod bus_route;
pub mod bus_stop;
pub mod route_legend;

pub use bus_location::BusLocationPlotter;
pub use bus_route::BusRouteDrawer;
pub use bus_stop::BusStopPlotter;
pub use route_legend::BusRouteLegendOverlay;
