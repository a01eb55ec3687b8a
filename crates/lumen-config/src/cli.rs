//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// lumen command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "lumen", about = "Sphere mesh and bitmap texture preparation")]
pub struct CliArgs {
    /// Sphere radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Longitude samples per ring.
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitude rings including the poles.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Directory containing texture bitmaps.
    #[arg(long)]
    pub texture_dir: Option<PathBuf>,

    /// Bitmap file to load (repeatable). Replaces the configured list.
    #[arg(long = "texture")]
    pub textures: Vec<String>,

    /// Flip decoded textures to top-down row order.
    #[arg(long)]
    pub flip_rows: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.sphere.radius = radius;
        }
        if let Some(slices) = args.slices {
            self.sphere.longitude_segments = slices;
        }
        if let Some(stacks) = args.stacks {
            self.sphere.latitude_segments = stacks;
        }
        if let Some(ref dir) = args.texture_dir {
            self.textures.directory = dir.clone();
        }
        if !args.textures.is_empty() {
            self.textures.files = args.textures.clone();
        }
        if args.flip_rows {
            self.textures.flip_rows = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
