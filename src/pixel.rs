use alloc::vec;
use alloc::vec::Vec;
use imgref::{ImgRef, ImgVec};

use crate::error::DecodeError;

/// One RGB pixel, 8 bits per channel, no alpha.
pub type Color = rgb::RGB8;

/// Commonly used fill colors.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// A `width` x `height` grid of RGB pixels, stored row-major.
///
/// This is the common currency between every codec in the crate: decoders
/// produce one, encoders consume one.
///
/// [`PixelBuffer::default`] is the *invalid* buffer. It stands for "nothing
/// was loaded" and is rejected by every encoder with
/// [`EncodeError::InvalidImage`](crate::EncodeError::InvalidImage). It is
/// distinct from a legitimately empty image created with
/// `PixelBuffer::new(0, 0, fill)`, which is valid.
#[derive(Clone, Debug, Default)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
    valid: bool,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `fill`.
    ///
    /// Fails with [`DecodeError::InvalidDimensions`] if either dimension is
    /// negative or the pixel count does not fit in memory addressing. The error
    /// type is shared with the decoders, which build their output through here.
    pub fn new(width: i32, height: i32, fill: Color) -> Result<Self, DecodeError> {
        if width < 0 || height < 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }
        let w = width as usize;
        let h = height as usize;
        let len = w
            .checked_mul(h)
            .ok_or(DecodeError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixels: vec![fill; len],
            width: w,
            height: h,
            valid: true,
        })
    }

    /// The failure sentinel. Same as [`PixelBuffer::default`].
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Adopt an [`imgref::ImgVec`], compacting away any stride padding.
    pub fn from_imgvec(img: ImgVec<Color>) -> Self {
        let (width, height) = (img.width(), img.height());
        let pixels = if img.stride() == width {
            let mut buf = img.into_buf();
            buf.truncate(width * height);
            buf
        } else {
            img.as_ref()
                .rows()
                .flat_map(|row| row.iter().copied())
                .collect()
        };
        Self {
            pixels,
            width,
            height,
            valid: true,
        }
    }

    /// `false` only for the failure sentinel.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major. Empty for the sentinel.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Row `y` as a `width`-long slice.
    ///
    /// # Panics
    ///
    /// If `y >= height()`.
    pub fn row(&self, y: usize) -> &[Color] {
        assert!(y < self.height, "row {y} out of bounds");
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Mutable row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height()`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        assert!(y < self.height, "row {y} out of bounds");
        &mut self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + '_ {
        // zero-width images still yield `height` empty rows
        (0..self.height).map(move |y| self.row(y))
    }

    /// Bounds-checked pixel accessor.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Borrowed 2-D view.
    ///
    /// `None` for the sentinel and for zero-width images, which
    /// [`imgref`] cannot describe.
    pub fn as_imgref(&self) -> Option<ImgRef<'_, Color>> {
        if !self.valid || self.width == 0 {
            return None;
        }
        Some(ImgRef::new(self.pixels.as_slice(), self.width, self.height))
    }

    /// Copy into an owned [`imgref::ImgVec`]. Same `None` cases as [`Self::as_imgref`].
    pub fn to_imgvec(&self) -> Option<ImgVec<Color>> {
        self.as_imgref()
            .map(|img| ImgVec::new(self.pixels.clone(), img.width(), img.height()))
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.valid == other.valid
            && self.width == other.width
            && self.height == other.height
            && self.pixels == other.pixels
    }
}

impl Eq for PixelBuffer {}
