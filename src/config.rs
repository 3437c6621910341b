//! Run configuration: where the data lives and how ids and fixes are spelled.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fix::DEFAULT_FIX_TOOL;
use crate::validate::ids::DEFAULT_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckConfig {
    /// Directory holding the `wn-*.json` category units.
    pub data_dir: PathBuf,
    /// Prefix token shared by entry, sense and synset ids.
    pub id_prefix: String,
    /// Command written at the start of each fix line.
    pub fix_tool: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            data_dir: PathBuf::from("src"),
            id_prefix: DEFAULT_PREFIX.to_string(),
            fix_tool: DEFAULT_FIX_TOOL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CheckConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
