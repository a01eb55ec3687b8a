//! Texture image loading: legacy BMP decoding into tightly packed RGB buffers, plus color helpers.

mod bmp;
mod color;
mod error;
mod header;
mod image;
mod reader;

pub use bmp::{MAX_DIMENSION, decode_bitmap, decode_bitmap_bytes, load_bitmap};
pub use color::hsv_to_rgb;
pub use error::{BitmapError, BitmapErrorKind};
pub use header::{BMP_MAGIC, Compression, FILE_HEADER_SIZE, FileHeader, InfoHeader};
pub use image::DecodedImage;
