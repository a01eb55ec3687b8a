//! Decoded RGB image handed to texture consumers.

/// A decoded image: tightly packed 8-bit RGB triples, no row padding.
///
/// Rows keep the order they had in the source stream. For bitmaps that is
/// bottom-to-top, which is also the row order OpenGL-style texture uploads
/// expect; call [`DecodedImage::flip_rows`] for a top-down buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per pixel in [`DecodedImage::pixels`].
    pub const CHANNELS: usize = 3;

    /// Wraps an RGB buffer. Returns `None` if either dimension is zero or the
    /// buffer length is not `width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(Self::CHANNELS)?;
        (width > 0 && height > 0 && pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps a buffer the decoder has already sized as `width * height * 3`.
    pub(crate) fn from_decoded(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * Self::CHANNELS);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row in [`DecodedImage::pixels`].
    pub fn stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    /// The whole RGB buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the image, returning its RGB buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Row `y` in buffer order, or `None` if out of range.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        Some(&self.pixels[start..start + self.stride()])
    }

    /// RGB triple at column `x` of buffer row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let i = x as usize * Self::CHANNELS;
        Some([row[i], row[i + 1], row[i + 2]])
    }

    /// Reverses the row order in place.
    pub fn flip_rows(&mut self) {
        let stride = self.stride();
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * stride);
            top[y * stride..(y + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    /// Expands to RGBA with opaque alpha, for GPU formats without a 3-channel variant.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for rgb in self.pixels.chunks_exact(Self::CHANNELS) {
            rgba.extend_from_slice(rgb);
            rgba.push(u8::MAX);
        }
        rgba
    }
}
