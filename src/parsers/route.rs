use serde::Deserialize;

use crate::error::Error;
use crate::models::{LatLon, RouteNumber, RoutePattern};
use crate::parsers::parse_entries;
use crate::route_manager::RouteManager;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct RouteJson {
    route_no: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    patterns: Vec<PatternJson>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct PatternJson {
    pattern_no: String,
    #[serde(default)]
    destination: String,
    #[serde(default)]
    direction: String,
    //[lat, lon] pairs
    #[serde(default)]
    path: Vec<(f64, f64)>,
}

/// Loads route names and patterns (with their paths) into the route registry.
/// Returns the number of routes read.
pub fn parse_routes(json: &str, routes: &mut RouteManager) -> Result<usize, Error> {
    let entries: Vec<RouteJson> = parse_entries(json, "route")?;
    let count = entries.len();

    for entry in entries {
        let route =
            routes.get_route_with_number(RouteNumber::new(&entry.route_no), entry.name.trim());

        for pattern in entry.patterns {
            route.add_pattern(RoutePattern::new(
                pattern.pattern_no,
                pattern.destination,
                pattern.direction,
                pattern
                    .path
                    .into_iter()
                    .map(|(lat, lon)| LatLon::new(lat, lon))
                    .collect(),
            ));
        }
    }

    Ok(count)
}
