//! Bitmap decoding error types.

/// Errors that can occur while decoding a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    /// The stream could not be opened or ended early.
    #[error("failed to read bitmap: {0}")]
    Io(#[from] std::io::Error),

    /// The first two bytes are not the `BM` signature.
    #[error("not a bitmap: expected magic 0x4d42 (\"BM\"), found {0:#06x}")]
    BadMagic(u16),

    /// Width or height is zero, negative, or above [`crate::MAX_DIMENSION`].
    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Pixel data is compressed; only uncompressed bitmaps are decoded.
    #[error("unsupported bitmap compression mode {0}")]
    UnsupportedCompression(u32),

    /// Pixel depth other than 24-bit direct color or 8-bit with a 256-color palette.
    #[error("unsupported bitmap depth: {bits_per_pixel} bpp with {colors_used} palette colors")]
    UnsupportedBitDepth { bits_per_pixel: u16, colors_used: u32 },
}

/// Coarse classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitmapErrorKind {
    /// The stream could not be opened or read.
    Io,
    /// The stream is not a well-formed bitmap.
    Format,
    /// The stream is a bitmap this decoder does not handle.
    UnsupportedFormat,
}

impl BitmapError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> BitmapErrorKind {
        match self {
            Self::Io(_) => BitmapErrorKind::Io,
            Self::BadMagic(_) | Self::InvalidDimensions { .. } => BitmapErrorKind::Format,
            Self::UnsupportedCompression(_) | Self::UnsupportedBitDepth { .. } => {
                BitmapErrorKind::UnsupportedFormat
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_kinds() {
        let io_err = BitmapError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(io_err.kind(), BitmapErrorKind::Io);
        assert_eq!(BitmapError::BadMagic(0x4d49).kind(), BitmapErrorKind::Format);
        assert_eq!(
            BitmapError::InvalidDimensions {
                width: 0,
                height: 4
            }
            .kind(),
            BitmapErrorKind::Format
        );
        assert_eq!(
            BitmapError::UnsupportedCompression(1).kind(),
            BitmapErrorKind::UnsupportedFormat
        );
        assert_eq!(
            BitmapError::UnsupportedBitDepth {
                bits_per_pixel: 4,
                colors_used: 16
            }
            .kind(),
            BitmapErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_bad_magic_message_shows_hex() {
        let msg = BitmapError::BadMagic(0x5089).to_string();
        assert!(msg.contains("0x5089"), "{msg}");
    }
}
