use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::providers::DataProvider;

/// Reads bundled data (stop and route lists) from disk.
#[derive(Debug, Clone)]
pub struct FileDataProvider {
    path: PathBuf,
}

impl FileDataProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataProvider for FileDataProvider {
    fn data_source_to_bytes(&self) -> Result<Vec<u8>, Error> {
        std::fs::read(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serves a fixed byte buffer.
#[derive(Debug, Clone, Default)]
pub struct StaticDataProvider {
    data: Vec<u8>,
}

impl StaticDataProvider {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl DataProvider for StaticDataProvider {
    fn data_source_to_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(self.data.clone())
    }
}
