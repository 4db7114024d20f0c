use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// World build settings, loadable from a TOML file.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    /// Edge length of a cubic chunk, in voxels.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Declared world extents (x, y, z), in voxels.
    pub dims: [usize; 3],
    /// Extra world-space translation applied to every chunk anchor.
    #[serde(default)]
    pub offset: [f32; 3],
}

fn default_chunk_size() -> usize {
    16
}

impl WorldConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
