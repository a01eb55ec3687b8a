//! BMP file and info headers.
//!
//! ## File layout
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 14   | [`FileHeader`]                          |
//! | 14     | 40   | [`InfoHeader`] (`size` may be larger)   |
//! | 14+size| 1024 | palette, 256 × 4 bytes (8 bpp only)     |
//! | offset | ...  | pixel rows, bottom-up, 4-byte aligned   |

use std::io::{self, Read, Seek};

use crate::reader::ByteReader;

/// `"BM"` read as a little-endian `u16`.
pub const BMP_MAGIC: u16 = 0x4d42;

/// Size in bytes of the packed file header on disk.
pub const FILE_HEADER_SIZE: u64 = 14;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// Signature, [`BMP_MAGIC`] for a bitmap.
    pub magic: u16,
    /// Total file size in bytes as declared by the writer.
    pub file_size: u32,
    pub reserved: [u16; 2],
    /// Offset from the start of the file to the first pixel row.
    pub data_offset: u32,
}

impl FileHeader {
    /// Reads the fields following the already-consumed magic number.
    pub(crate) fn read_after_magic<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        magic: u16,
    ) -> io::Result<Self> {
        Ok(Self {
            magic,
            file_size: reader.read_u32()?,
            reserved: [reader.read_u16()?, reader.read_u16()?],
            data_offset: reader.read_u32()?,
        })
    }
}

/// Pixel data compression mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// Uncompressed rows (`BI_RGB`).
    None,
    /// 8-bit run-length encoding (`BI_RLE8`).
    Rle8,
    /// 4-bit run-length encoding (`BI_RLE4`).
    Rle4,
    /// Any other mode, carrying the raw value.
    Other(u32),
}

impl Compression {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Rle8,
            2 => Self::Rle4,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Rle8 => 1,
            Self::Rle4 => 2,
            Self::Other(raw) => raw,
        }
    }
}

/// The info header (`BITMAPINFOHEADER` fields).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Size of this header on disk, 40 for the classic layout.
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    /// Palette entries in use; 0 means the full `2^bits_per_pixel`.
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub(crate) fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> io::Result<Self> {
        Ok(Self {
            size: reader.read_u32()?,
            width: reader.read_i32()?,
            height: reader.read_i32()?,
            planes: reader.read_u16()?,
            bits_per_pixel: reader.read_u16()?,
            compression: Compression::from_raw(reader.read_u32()?),
            image_size: reader.read_u32()?,
            x_pixels_per_meter: reader.read_i32()?,
            y_pixels_per_meter: reader.read_i32()?,
            colors_used: reader.read_u32()?,
            colors_important: reader.read_u32()?,
        })
    }

    /// Palette size after resolving the `0 = default` convention.
    pub fn palette_len(&self) -> u32 {
        if self.colors_used == 0 && self.bits_per_pixel <= 8 {
            1 << self.bits_per_pixel
        } else {
            self.colors_used
        }
    }

    /// Absolute offset of the palette, directly after this header.
    pub fn palette_offset(&self) -> u64 {
        FILE_HEADER_SIZE + self.size as u64
    }

    /// Bytes of pixel data per row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        (self.bits_per_pixel as usize * self.width as usize).div_ceil(8)
    }

    /// Bytes per row on disk, padded to a 4-byte boundary.
    pub fn row_stride(&self) -> usize {
        4 * (self.bits_per_pixel as usize * self.width as usize).div_ceil(32)
    }

    /// Padding bytes that follow each row.
    pub fn row_padding(&self) -> usize {
        self.row_stride() - self.row_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(width: i32, bits_per_pixel: u16) -> InfoHeader {
        InfoHeader {
            size: 40,
            width,
            height: 1,
            planes: 1,
            bits_per_pixel,
            compression: Compression::None,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    #[test]
    fn test_row_padding_24bpp() {
        assert_eq!(info(1, 24).row_padding(), 1);
        assert_eq!(info(2, 24).row_padding(), 2);
        assert_eq!(info(3, 24).row_padding(), 3);
        assert_eq!(info(4, 24).row_padding(), 0);
        assert_eq!(info(2, 24).row_stride(), 8);
    }

    #[test]
    fn test_row_padding_8bpp() {
        assert_eq!(info(1, 8).row_padding(), 3);
        assert_eq!(info(4, 8).row_padding(), 0);
        assert_eq!(info(5, 8).row_padding(), 3);
        assert_eq!(info(6, 8).row_stride(), 8);
    }

    #[test]
    fn test_palette_len_default() {
        assert_eq!(info(4, 8).palette_len(), 256);
        let mut header = info(4, 8);
        header.colors_used = 16;
        assert_eq!(header.palette_len(), 16);
        assert_eq!(info(4, 24).palette_len(), 0);
    }

    #[test]
    fn test_palette_offset_follows_info_header() {
        assert_eq!(info(1, 8).palette_offset(), 54);
        let mut v5 = info(1, 8);
        v5.size = 124;
        assert_eq!(v5.palette_offset(), 138);
    }

    #[test]
    fn test_compression_raw_roundtrip() {
        for raw in [0, 1, 2, 3, 6] {
            assert_eq!(Compression::from_raw(raw).raw(), raw);
        }
        assert_eq!(Compression::from_raw(0), Compression::None);
        assert_eq!(Compression::from_raw(3), Compression::Other(3));
    }
}
