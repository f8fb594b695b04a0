use std::str::FromStr;

use reqwest::blocking::Client;

use crate::error::Error;
use crate::map_view::{DEFAULT_ZOOM, DisplayDensity};
use crate::models::StopNumber;
use crate::providers::http::{HttpArrivalDataProvider, HttpBusLocationDataProvider};
use crate::stop_manager::RADIUS;

pub const DEFAULT_BASE_URL: &str = "http://b210.herokuapp.com/rttiapi/v1";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslinkConfig {
    pub base_url: String,
    pub api_key: String,
    pub dpi_factor: f32,
    pub nearest_radius_m: f64,
    pub default_zoom: u32,
}

impl Default for TranslinkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            dpi_factor: 1.0,
            nearest_radius_m: RADIUS,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

impl TranslinkConfig {
    /// Defaults overridden by `TRANSLINK_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("TRANSLINK_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(api_key) = lookup("TRANSLINK_API_KEY") {
            config.api_key = api_key;
        }
        if let Some(value) = lookup("TRANSLINK_DPI_FACTOR") {
            config.dpi_factor = parse_var("TRANSLINK_DPI_FACTOR", value)?;
        }
        if let Some(value) = lookup("TRANSLINK_NEAREST_RADIUS") {
            config.nearest_radius_m = parse_var("TRANSLINK_NEAREST_RADIUS", value)?;
        }
        if let Some(value) = lookup("TRANSLINK_DEFAULT_ZOOM") {
            config.default_zoom = parse_var("TRANSLINK_DEFAULT_ZOOM", value)?;
        }

        Ok(config)
    }

    pub fn density(&self) -> DisplayDensity {
        DisplayDensity(self.dpi_factor)
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: String) -> Result<T, Error> {
    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(Error::InvalidConfig { key, value }),
    }
}

/// Connection settings and the HTTP client shared by every provider.
#[derive(Debug, Clone)]
pub struct TranslinkApi {
    pub config: TranslinkConfig,
    client: Client,
}

impl TranslinkApi {
    pub fn new(config: TranslinkConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!("busesareus/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn arrivals(&self, stop: StopNumber) -> HttpArrivalDataProvider {
        HttpArrivalDataProvider::new(self, stop)
    }

    pub fn bus_locations(&self, stop: StopNumber) -> HttpBusLocationDataProvider {
        HttpBusLocationDataProvider::new(self, stop)
    }
}
