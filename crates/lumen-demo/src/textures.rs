//! Texture preparation: decode configured bitmaps into upload-ready buffers.

use std::path::PathBuf;

use lumen_config::TextureConfig;
use lumen_image::{BitmapError, BitmapErrorKind, load_bitmap};
use tracing::{info, warn};

/// A decoded texture ready for GPU upload.
pub(crate) struct PreparedTexture {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// 3 for RGB, 4 after RGBA expansion.
    pub channels: usize,
    pub data: Vec<u8>,
}

/// Outcome of loading every configured texture.
#[derive(Default)]
pub(crate) struct TextureReport {
    pub loaded: Vec<PreparedTexture>,
    pub failed: Vec<(PathBuf, BitmapError)>,
}

impl TextureReport {
    /// Total bytes across all prepared textures.
    pub fn upload_bytes(&self) -> usize {
        self.loaded.iter().map(|t| t.data.len()).sum()
    }
}

/// Loads each configured texture, continuing past failures.
pub(crate) fn load_all(config: &TextureConfig) -> TextureReport {
    let mut report = TextureReport::default();

    for path in config.paths() {
        match load_bitmap(&path) {
            Ok(mut image) => {
                if config.flip_rows {
                    image.flip_rows();
                }
                let (width, height) = image.dimensions();
                let (channels, data) = if config.expand_rgba {
                    (4, image.to_rgba())
                } else {
                    (3, image.into_pixels())
                };
                info!("Loaded texture {} ({width}x{height})", path.display());
                report.loaded.push(PreparedTexture {
                    path,
                    width,
                    height,
                    channels,
                    data,
                });
            }
            Err(e) => {
                match e.kind() {
                    BitmapErrorKind::Io => warn!("Cannot read {}: {e}", path.display()),
                    BitmapErrorKind::Format => warn!("Not a bitmap {}: {e}", path.display()),
                    BitmapErrorKind::UnsupportedFormat => {
                        warn!("Unsupported bitmap {}: {e}", path.display())
                    }
                }
                report.failed.push((path, e));
            }
        }
    }

    report
}
