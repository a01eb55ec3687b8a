//! Configuration for the lumen tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and support hot-reload detection. Every section is
//! `#[serde(default)]` so older or partial files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, CurveConfig, DebugConfig, SphereConfig, TextureConfig, default_config_dir};
pub use error::ConfigError;
