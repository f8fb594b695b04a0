use serde::Deserialize;

use crate::error::Error;
use crate::models::{LatLon, RouteNumber, StopNumber};
use crate::parsers::parse_entries;
use crate::route_manager::RouteManager;
use crate::stop_manager::StopManager;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct StopJson {
    stop_no: u32,
    name: String,
    latitude: f64,
    longitude: f64,
    //comma separated, e.g. "099, 084"
    #[serde(default)]
    routes: String,
}

/// Seeds the stop registry from a TransLink stop list, registering every route
/// number mentioned along the way. Returns the number of stops read.
pub fn parse_stops(
    json: &str,
    stops: &mut StopManager,
    routes: &mut RouteManager,
) -> Result<usize, Error> {
    let entries: Vec<StopJson> = parse_entries(json, "stop")?;
    let count = entries.len();

    for entry in entries {
        let stop = stops.get_stop_with_number(
            StopNumber(entry.stop_no),
            entry.name.trim(),
            LatLon::new(entry.latitude, entry.longitude),
        );

        for number in entry
            .routes
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
        {
            let number = RouteNumber::new(number);
            routes.get_route_with_number(number.clone(), "");
            stop.add_route(number);
        }
    }

    Ok(count)
}
