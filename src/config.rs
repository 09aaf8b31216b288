use crate::errors::Result;
use serde::{
    Deserialize,
    Serialize,
};
use std::path::{
    Path,
    PathBuf,
};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Settings shared by the binaries. Command-line flags win over values
/// read from the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub chunk_size: usize,
    pub catalog: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            catalog: None,
        }
    }
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// File config when a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        chunk_size: Option<usize>,
        catalog: Option<PathBuf>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(chunk_size) = chunk_size {
            self.chunk_size = chunk_size;
        }
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self
    }
}
