use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::models::{Bus, LatLon, RouteNumber, Stop};
use crate::parsers::parse_entries;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct BusJson {
    route_no: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    destination: String,
    #[serde(default)]
    recorded_time: String,
}

/// Replaces the buses of `stop` with those in the bus location payload.
/// Buses on routes that don't serve the stop are ignored.
///
/// Returns the number of buses added.
pub fn parse_buses(stop: &mut Stop, json: &str) -> Result<usize, Error> {
    let entries: Vec<BusJson> = parse_entries(json, "bus")?;

    stop.clear_buses();
    let mut added = 0;

    for entry in entries {
        let bus = Bus {
            route: RouteNumber::new(&entry.route_no),
            locn: LatLon::new(entry.latitude, entry.longitude),
            destination: entry.destination,
            time: entry.recorded_time,
        };

        match stop.add_bus(bus) {
            Ok(()) => added += 1,
            Err(e) => debug!(error = %e, "bus not for this stop"),
        }
    }

    Ok(added)
}
