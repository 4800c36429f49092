use std::path::{Path, PathBuf};
use std::{fs, io};

use bevy::ecs::resource::Resource;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Settings shared by the resolver, the repository and the ECS plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderConfig {
    /// Locale that strings are resolved in when an object is loaded.
    pub language:                 String,
    /// Whether image tables are decoded. Scanning never loads images.
    pub load_images:              bool,
    /// Whether a legacy checksum mismatch is only a warning.
    pub allow_incorrect_checksum: bool,
    /// Directories scanned by the repository.
    pub object_directories:       Vec<PathBuf>,
    /// Location of the repository index cache.
    pub index_path:               Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            language:                 "en-GB".into(),
            load_images:              true,
            allow_incorrect_checksum: true,
            object_directories:       Vec::new(),
            index_path:               None,
        }
    }
}

impl LoaderConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path).map_err(Error::Io)?;
        serde_json::from_slice(&bytes).map_err(Error::Json)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read config: {0}")]
    Io(#[source] io::Error),
    #[error("parse config: {0}")]
    Json(#[source] serde_json::Error),
}
