use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{error::ConfigError, sim::SimulationInput};

impl SimulationInput {
    /// Load simulation settings from a JSON file on disk. Validation is left
    /// to the caller so overrides can be applied first.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            source,
            path: path_buf,
        })
    }
}
