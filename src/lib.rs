#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::while_let_loop,
    clippy::useless_asref,
    clippy::repeat_once,
    clippy::deref_addrof,
    clippy::suspicious_map,
    clippy::single_char_pattern,
    clippy::for_kv_map,
    clippy::let_and_return,
    clippy::iter_nth,
    clippy::iter_cloned_collect,
    clippy::match_result_ok,
    clippy::cmp_owned,
    clippy::cmp_null,
    clippy::op_ref
)]

#[macro_use]
extern crate serde;

pub mod config;
pub mod error;
pub mod geometry;
pub mod map_view;
pub mod models;
pub mod parsers;
pub mod plotters;
pub mod providers;
pub mod route_manager;
pub mod stop_manager;

pub use config::{TranslinkApi, TranslinkConfig};
pub use error::Error;
pub use models::{Bus, LatLon, Route, RouteNumber, RoutePattern, Stop, StopNumber};
pub use route_manager::RouteManager;
pub use stop_manager::StopManager;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod test_stop_plotter;
