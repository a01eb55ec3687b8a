//! Legacy BMP decoding.
//!
//! Supports uncompressed 24-bit direct color and 8-bit indexed color with a
//! 256-entry palette. Output rows stay in stream order (bottom-up) and are
//! packed as R,G,B with no padding.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::error::BitmapError;
use crate::header::{BMP_MAGIC, Compression, FileHeader, InfoHeader};
use crate::image::DecodedImage;
use crate::reader::ByteReader;

/// Largest accepted width or height in pixels.
pub const MAX_DIMENSION: u32 = 16384;

const PALETTE_LEN: usize = 256;

/// Opens and decodes the bitmap at `path`.
///
/// The file is closed when this returns, on success or failure.
pub fn load_bitmap(path: impl AsRef<Path>) -> Result<DecodedImage, BitmapError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        log::warn!("cannot open bitmap '{}': {err}", path.display());
        BitmapError::Io(err)
    })?;
    let image = decode_bitmap(BufReader::new(file))?;
    log::debug!(
        "loaded bitmap '{}' ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decodes a bitmap held in memory.
pub fn decode_bitmap_bytes(bytes: &[u8]) -> Result<DecodedImage, BitmapError> {
    decode_bitmap(Cursor::new(bytes))
}

/// Decodes a bitmap from a seekable stream.
///
/// The stream is read sequentially except for two absolute seeks: to the
/// palette (8-bit only) and to the start of pixel data. Either a complete
/// image or an error is returned; a truncated stream is
/// [`BitmapError::Io`].
pub fn decode_bitmap<R: Read + Seek>(stream: R) -> Result<DecodedImage, BitmapError> {
    let mut reader = ByteReader::new(stream);

    let magic = reader.read_u16()?;
    if magic != BMP_MAGIC {
        log::warn!("wrong type of file: {magic:#06x}");
        return Err(BitmapError::BadMagic(magic));
    }
    let file_header = FileHeader::read_after_magic(&mut reader, magic)?;
    let info = InfoHeader::read(&mut reader)?;
    log::debug!("bitmap headers: {file_header:?} {info:?}");

    let (width, height) = validate_dimensions(&info)?;

    if info.compression != Compression::None {
        log::warn!("unsupported bitmap compression: {:?}", info.compression);
        return Err(BitmapError::UnsupportedCompression(info.compression.raw()));
    }

    let pixels = match (info.bits_per_pixel, info.palette_len() as usize) {
        (24, _) => read_direct(&mut reader, &file_header, &info, width, height)?,
        (8, PALETTE_LEN) => {
            let palette = read_palette(&mut reader, &info)?;
            read_indexed(&mut reader, &file_header, &info, &palette, width, height)?
        }
        (bits_per_pixel, _) => {
            log::warn!(
                "unsupported bitmap depth: {bits_per_pixel} bpp, {} colors",
                info.colors_used
            );
            return Err(BitmapError::UnsupportedBitDepth {
                bits_per_pixel,
                colors_used: info.colors_used,
            });
        }
    };

    Ok(DecodedImage::from_decoded(width, height, pixels))
}

fn validate_dimensions(info: &InfoHeader) -> Result<(u32, u32), BitmapError> {
    let in_range = |v: i32| v > 0 && v as u32 <= MAX_DIMENSION;
    if in_range(info.width) && in_range(info.height) {
        Ok((info.width as u32, info.height as u32))
    } else {
        log::warn!("invalid bitmap dimensions {}x{}", info.width, info.height);
        Err(BitmapError::InvalidDimensions {
            width: info.width,
            height: info.height,
        })
    }
}

/// Reads every row into `row` (stride-sized, padding included) and hands the
/// pixel part to `emit`.
fn for_each_row<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    file_header: &FileHeader,
    info: &InfoHeader,
    height: u32,
    mut emit: impl FnMut(&[u8]),
) -> Result<(), BitmapError> {
    reader.seek_to(file_header.data_offset as u64)?;
    let mut row = vec![0u8; info.row_stride()];
    for _ in 0..height {
        reader.read_exact(&mut row)?;
        emit(&row[..info.row_bytes()]);
    }
    Ok(())
}

fn read_direct<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    file_header: &FileHeader,
    info: &InfoHeader,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, BitmapError> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for_each_row(reader, file_header, info, height, |row| {
        for bgr in row.chunks_exact(3) {
            pixels.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
        }
    })?;
    Ok(pixels)
}

/// Palette entries are stored as R,G,B,A; alpha is dropped.
fn read_palette<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    info: &InfoHeader,
) -> Result<[[u8; 3]; PALETTE_LEN], BitmapError> {
    reader.seek_to(info.palette_offset())?;
    let mut palette = [[0u8; 3]; PALETTE_LEN];
    let mut entry = [0u8; 4];
    for color in &mut palette {
        reader.read_exact(&mut entry)?;
        *color = [entry[0], entry[1], entry[2]];
    }
    Ok(palette)
}

fn read_indexed<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    file_header: &FileHeader,
    info: &InfoHeader,
    palette: &[[u8; 3]; PALETTE_LEN],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, BitmapError> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for_each_row(reader, file_header, info, height, |row| {
        for &index in row {
            pixels.extend_from_slice(&palette[index as usize]);
        }
    })?;
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitmapErrorKind;

    /// Builds a bitmap with a 40-byte info header. `palette` is written
    /// between the headers and the pixel rows; `rows` must already be padded.
    fn bitmap(
        width: i32,
        height: i32,
        bits_per_pixel: u16,
        compression: u32,
        colors_used: u32,
        palette: &[u8],
        rows: &[u8],
    ) -> Vec<u8> {
        let data_offset = 54 + palette.len() as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(data_offset + rows.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&data_offset.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&compression.to_le_bytes());
        out.extend_from_slice(&(rows.len() as u32).to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&colors_used.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(out.len(), 54);
        out.extend_from_slice(palette);
        out.extend_from_slice(rows);
        out
    }

    fn two_by_two_24() -> Vec<u8> {
        #[rustfmt::skip]
        let rows = [
            // row 0: (B,G,R) x2 + 2 padding
            3, 2, 1,   6, 5, 4,   0xAA, 0xAA,
            // row 1
            9, 8, 7,   12, 11, 10,   0xBB, 0xBB,
        ];
        bitmap(2, 2, 24, 0, 0, &[], &rows)
    }

    fn palette_with(entries: &[(u8, [u8; 4])]) -> Vec<u8> {
        let mut palette = vec![0u8; 256 * 4];
        for &(index, rgba) in entries {
            let i = index as usize * 4;
            palette[i..i + 4].copy_from_slice(&rgba);
        }
        palette
    }

    #[test]
    fn test_decode_24bit_swaps_bgr() {
        let image = decode_bitmap_bytes(&two_by_two_24()).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.pixels(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_decode_24bit_odd_width_padding() {
        #[rustfmt::skip]
        let rows = [
            10, 20, 30,   40, 50, 60,   70, 80, 90,   0, 0, 0,
            11, 21, 31,   41, 51, 61,   71, 81, 91,   0, 0, 0,
        ];
        let image = decode_bitmap_bytes(&bitmap(3, 2, 24, 0, 0, &[], &rows)).unwrap();
        assert_eq!(image.pixels().len(), 18);
        assert_eq!(image.pixel(0, 0), Some([30, 20, 10]));
        assert_eq!(image.pixel(2, 1), Some([91, 81, 71]));
    }

    #[test]
    fn test_decode_8bit_palette() {
        let palette = palette_with(&[(0, [10, 20, 30, 255])]);
        // 3x2 at 8 bpp: 3 data bytes + 1 padding per row.
        let rows = [0, 0, 0, 0xEE, 0, 0, 0, 0xEE];
        let image = decode_bitmap_bytes(&bitmap(3, 2, 8, 0, 256, &palette, &rows)).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixels(), [10u8, 20, 30].repeat(6).as_slice());
    }

    #[test]
    fn test_decode_8bit_mixed_indices() {
        let palette = palette_with(&[(1, [255, 0, 0, 0]), (200, [0, 0, 255, 7])]);
        let rows = [1, 200, 0, 0];
        let image = decode_bitmap_bytes(&bitmap(2, 1, 8, 0, 256, &palette, &rows)).unwrap();
        assert_eq!(image.pixels(), &[255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_decode_8bit_zero_colors_used_means_full_palette() {
        let palette = palette_with(&[(3, [1, 2, 3, 4])]);
        let rows = [3, 3, 3, 3];
        let image = decode_bitmap_bytes(&bitmap(4, 1, 8, 0, 0, &palette, &rows)).unwrap();
        assert_eq!(image.pixels(), [1u8, 2, 3].repeat(4).as_slice());
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = two_by_two_24();
        bytes[0] = b'P';
        bytes[1] = b'K';
        let err = decode_bitmap_bytes(&bytes).unwrap_err();
        assert!(matches!(err, BitmapError::BadMagic(0x4b50)));
        assert_eq!(err.kind(), BitmapErrorKind::Format);
    }

    #[test]
    fn test_rejects_compression() {
        for mode in [1u32, 2, 3] {
            let bytes = bitmap(2, 2, 24, mode, 0, &[], &[0; 16]);
            let err = decode_bitmap_bytes(&bytes).unwrap_err();
            assert!(matches!(err, BitmapError::UnsupportedCompression(m) if m == mode));
            assert_eq!(err.kind(), BitmapErrorKind::UnsupportedFormat);
        }
    }

    #[test]
    fn test_rejects_unsupported_depths() {
        for bits in [1u16, 4, 16, 32] {
            let bytes = bitmap(2, 2, bits, 0, 0, &[], &[0; 32]);
            let err = decode_bitmap_bytes(&bytes).unwrap_err();
            assert!(matches!(
                err,
                BitmapError::UnsupportedBitDepth { bits_per_pixel, .. } if bits_per_pixel == bits
            ));
            assert_eq!(err.kind(), BitmapErrorKind::UnsupportedFormat);
        }
    }

    #[test]
    fn test_rejects_8bit_with_small_palette() {
        let palette = vec![0u8; 16 * 4];
        let bytes = bitmap(4, 1, 8, 0, 16, &palette, &[0; 4]);
        let err = decode_bitmap_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::UnsupportedBitDepth {
                bits_per_pixel: 8,
                colors_used: 16
            }
        ));
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        for (w, h) in [(0, 2), (2, 0), (-2, 2), (2, -2), (MAX_DIMENSION as i32 + 1, 1)] {
            let err = decode_bitmap_bytes(&bitmap(w, h, 24, 0, 0, &[], &[])).unwrap_err();
            assert!(matches!(err, BitmapError::InvalidDimensions { .. }), "{w}x{h}");
            assert_eq!(err.kind(), BitmapErrorKind::Format);
        }
    }

    #[test]
    fn test_truncated_pixel_data_is_io_error() {
        let mut bytes = two_by_two_24();
        bytes.truncate(bytes.len() - 3);
        let err = decode_bitmap_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), BitmapErrorKind::Io);
    }

    #[test]
    fn test_truncated_header_is_io_error() {
        let bytes = two_by_two_24();
        let err = decode_bitmap_bytes(&bytes[..20]).unwrap_err();
        assert!(matches!(err, BitmapError::Io(_)));
        assert!(matches!(
            decode_bitmap_bytes(&[]).unwrap_err(),
            BitmapError::Io(_)
        ));
    }

    #[test]
    fn test_honours_data_offset_gap() {
        // Pixel data placed after an unrelated gap; only data_offset locates it.
        let mut bytes = two_by_two_24();
        let rows = bytes.split_off(54);
        bytes.extend_from_slice(&[0xFF; 10]);
        bytes.extend_from_slice(&rows);
        bytes[10..14].copy_from_slice(&64u32.to_le_bytes());
        let image = decode_bitmap_bytes(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), Some([1, 2, 3]));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_bitmap("/nonexistent/lumen/texture.bmp").unwrap_err();
        assert_eq!(err.kind(), BitmapErrorKind::Io);
    }
}
