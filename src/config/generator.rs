//! Generator configuration (_posts_gen.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GenerateError, Result};

/// Name of the optional config file looked up in the base directory
pub const CONFIG_FILE: &str = "_posts_gen.yml";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Number of posts to write
    pub count: usize,
    /// Directory the posts are written to, relative to the base directory
    pub output_dir: String,
    /// Nominal number of words in a title
    pub title_words: usize,
    /// Fixed RNG seed for reproducible titles and bodies
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            count: 200,
            output_dir: "posts/".to_string(),
            title_words: 3,
            seed: None,
        }
    }
}

impl GenConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GenConfig =
            serde_yaml::from_str(&content).map_err(|source| GenerateError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `_posts_gen.yml` from `base_dir`, falling back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
