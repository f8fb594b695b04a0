use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::map_view::MarkerId;
use crate::models::{RouteNumber, StopNumber};

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Response body is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("No stop with number {0}")]
    StopNotFound(StopNumber),
    #[error("No stop is associated with marker {0:?}")]
    MarkerNotFound(MarkerId),
    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("Route {route} does not serve stop {stop}")]
    RouteNotAtStop { route: RouteNumber, stop: StopNumber },
}
