//! Headless driver that prepares sphere meshes, curves and bitmap textures.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p lumen-demo -- --slices 10 --stacks 10 --radius 400`.
//! Run with `cargo run -p lumen-demo -- --texture-dir assets --texture moon.bmp`
//! to decode textures.

mod textures;

use std::f32::consts::TAU;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec3;
use lumen_config::{CliArgs, Config, default_config_dir};
use lumen_mesh::{CubicBezier, MeshError, SphereParams};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    lumen_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = demonstrate_sphere(&config) {
        error!("Sphere tessellation failed: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = demonstrate_curves(&config) {
        error!("Curve sampling failed: {e}");
        return ExitCode::FAILURE;
    }

    let report = textures::load_all(&config.textures);
    for texture in &report.loaded {
        debug!(
            "{}: {}x{} x{} channels",
            texture.path.display(),
            texture.width,
            texture.height,
            texture.channels
        );
    }
    info!(
        "Textures: {} loaded, {} failed, {} bytes ready for upload",
        report.loaded.len(),
        report.failed.len(),
        report.upload_bytes()
    );

    if report.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Tessellates the configured sphere and logs its shape.
fn demonstrate_sphere(config: &Config) -> Result<(), MeshError> {
    let params = SphereParams::new(
        config.sphere.radius,
        config.sphere.longitude_segments,
        config.sphere.latitude_segments,
    );
    info!("Tessellating sphere {params:?}");

    let mesh = params.tessellate()?;
    info!(
        "Sphere: {} strips, {} vertices, {} triangles ({}x{} effective segments)",
        mesh.strips().len(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.longitude_segments,
        mesh.latitude_segments
    );

    let (vertices, indices) = mesh.to_triangle_list();
    let vertex_bytes: &[u8] = bytemuck::cast_slice(&vertices);
    info!(
        "Triangle list: {} vertices ({} bytes), {} indices",
        vertices.len(),
        vertex_bytes.len(),
        indices.len()
    );
    Ok(())
}

/// Samples a petal curve fanned around the +Y axis.
fn demonstrate_curves(config: &Config) -> Result<(), MeshError> {
    const PETALS: usize = 12;

    let petal = CubicBezier::new(
        Vec3::new(-0.773, 2.899, 0.0),
        Vec3::new(-3.092, 11.595, 0.0),
        Vec3::new(3.092, 11.595, 0.0),
        Vec3::new(0.773, 2.899, 0.0),
    );

    let mut points = 0;
    let mut top: f32 = 0.0;
    for i in 0..PETALS {
        let curve = petal.rotated_y(TAU * i as f32 / PETALS as f32);
        let strip = curve.sample(config.curve.samples as usize)?;
        top = strip.iter().fold(top, |acc, p| acc.max(p.y));
        points += strip.len();
    }

    info!("Curves: {PETALS} petals, {points} line-strip points, peak height {top:.3}");
    Ok(())
}
