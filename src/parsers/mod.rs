//! Decoding of TransLink JSON payloads into the registries.
//!
//! Every parser takes a top-level JSON array. A malformed array is an error;
//! a malformed entry inside it is logged and skipped.

pub mod bus;
pub mod route;
pub mod stop;

pub use bus::parse_buses;
pub use route::parse_routes;
pub use stop::parse_stops;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Error;

fn parse_entries<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<Vec<T>, Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = values.len();

    let entries: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<T>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index = i, error = %e, "skipping malformed {}", what);
                None
            }
        })
        .collect();

    if entries.len() < total {
        warn!(skipped = total - entries.len(), total, "some {} entries were malformed", what);
    }

    Ok(entries)
}
