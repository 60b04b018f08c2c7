//! Configuration module

mod generator;

pub use generator::GenConfig;
pub use generator::CONFIG_FILE;
