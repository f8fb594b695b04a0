//! Where plotters get their raw data from.

pub mod file;
pub mod http;

pub use file::{FileDataProvider, StaticDataProvider};
pub use http::{HttpArrivalDataProvider, HttpBusLocationDataProvider};

use crate::error::Error;

pub trait DataProvider {
    fn data_source_to_bytes(&self) -> Result<Vec<u8>, Error>;

    fn data_source_to_string(&self) -> Result<String, Error> {
        Ok(String::from_utf8(self.data_source_to_bytes()?)?)
    }
}
