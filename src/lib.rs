//! posts-gen: sample markdown posts for static site generators
//!
//! Writes numbered `postNNN.md` files, each with YAML front-matter
//! (`title`, `timestamp`, `language`, `tags`) and a lorem ipsum markdown body.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod provider;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application state
#[derive(Debug, Clone)]
pub struct PostsGen {
    /// Generator configuration
    pub config: config::GenConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory posts are written to and listed from
    pub output_dir: PathBuf,
}

impl PostsGen {
    /// Create a new instance from a directory, reading `_posts_gen.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = config::GenConfig::load_or_default(base_dir.as_ref())?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a new instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::GenConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            base_dir,
            output_dir,
        }
    }

    /// Generate the configured number of posts
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        commands::generate::run(self)
    }

    /// Print a summary of the posts in the output directory
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
