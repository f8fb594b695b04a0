use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::info;
use url::Url;

use crate::config::TranslinkApi;
use crate::error::Error;
use crate::models::StopNumber;
use crate::providers::DataProvider;

/// Single GET, status checked, no retries.
fn fetch(client: &Client, url: Url) -> Result<Vec<u8>, Error> {
    info!(path = url.path(), "fetching from translink");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()?
        .error_for_status()?;

    Ok(response.bytes()?.to_vec())
}

fn endpoint(base_url: &str, path: &str) -> Result<Url, Error> {
    Ok(Url::parse(&format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path
    ))?)
}

/// Expected arrivals at one stop.
#[derive(Debug, Clone)]
pub struct HttpArrivalDataProvider {
    client: Client,
    base_url: String,
    api_key: String,
    stop: StopNumber,
}

impl HttpArrivalDataProvider {
    pub fn new(api: &TranslinkApi, stop: StopNumber) -> Self {
        Self {
            client: api.client().clone(),
            base_url: api.config.base_url.clone(),
            api_key: api.config.api_key.clone(),
            stop,
        }
    }

    /// `<base>/stops/<stop>/estimates?apikey=<key>`
    pub fn url(&self) -> Result<Url, Error> {
        let mut url = endpoint(&self.base_url, &format!("stops/{}/estimates", self.stop))?;
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }
}

impl DataProvider for HttpArrivalDataProvider {
    fn data_source_to_bytes(&self) -> Result<Vec<u8>, Error> {
        fetch(&self.client, self.url()?)
    }
}

/// Live positions of the buses serving one stop.
#[derive(Debug, Clone)]
pub struct HttpBusLocationDataProvider {
    client: Client,
    base_url: String,
    api_key: String,
    stop: StopNumber,
}

impl HttpBusLocationDataProvider {
    pub fn new(api: &TranslinkApi, stop: StopNumber) -> Self {
        Self {
            client: api.client().clone(),
            base_url: api.config.base_url.clone(),
            api_key: api.config.api_key.clone(),
            stop,
        }
    }

    /// `<base>/buses?apikey=<key>&stopNo=<stop>`
    pub fn url(&self) -> Result<Url, Error> {
        let mut url = endpoint(&self.base_url, "buses")?;
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("stopNo", &self.stop.to_string());
        Ok(url)
    }
}

impl DataProvider for HttpBusLocationDataProvider {
    fn data_source_to_bytes(&self) -> Result<Vec<u8>, Error> {
        fetch(&self.client, self.url()?)
    }
}
