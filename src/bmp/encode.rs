//! BMP encoder: uncompressed, bottom-up, 24-bit BGR.

use alloc::vec;
use alloc::vec::Vec;
use std::io::Write;

use super::header::{DATA_OFFSET, FileHeader, InfoHeader, LEGACY_SIGNIFICANT_COLORS, stride};
use crate::error::EncodeError;
use crate::pixel::PixelBuffer;

/// Encoder settings for 24-bit BMP output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BmpEncoder {
    legacy_significant_colors: bool,
}

impl BmpEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `significant_colors = 0x1000000` instead of 0, matching files
    /// produced by older versions of the converter byte for byte.
    pub fn with_legacy_significant_colors(mut self, enabled: bool) -> Self {
        self.legacy_significant_colors = enabled;
        self
    }

    /// Headers that [`Self::write_to`] would emit for `image`.
    pub fn headers(&self, image: &PixelBuffer) -> Result<(FileHeader, InfoHeader), EncodeError> {
        if !image.is_valid() {
            return Err(EncodeError::InvalidImage);
        }
        let (w, h) = (image.width(), image.height());
        let too_large = || EncodeError::DimensionsTooLarge {
            width: w,
            height: h,
        };
        let width = i32::try_from(w).map_err(|_| too_large())?;
        let height = i32::try_from(h).map_err(|_| too_large())?;
        // total_size must fit in the file header's u32 as well
        let data_size = stride(width as u32)
            .checked_mul(height as u64)
            .filter(|&n| n <= u64::from(u32::MAX - DATA_OFFSET))
            .ok_or_else(too_large)? as u32;

        let significant_colors = if self.legacy_significant_colors {
            LEGACY_SIGNIFICANT_COLORS
        } else {
            0
        };
        Ok((
            FileHeader::for_data_size(data_size),
            InfoHeader::new(width, height, data_size, significant_colors),
        ))
    }

    /// Encode into a freshly allocated byte vector.
    pub fn encode(&self, image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        let (file, _) = self.headers(image)?;
        let mut out = Vec::with_capacity(file.total_size as usize);
        self.write_to(image, &mut out)?;
        Ok(out)
    }

    /// Stream the encoded file into `out`, flushing it at the end.
    ///
    /// A short or failed write is reported as [`EncodeError::Io`]; whatever
    /// reached `out` before the failure is left as is.
    pub fn write_to<W: Write>(&self, image: &PixelBuffer, mut out: W) -> Result<(), EncodeError> {
        let (file, info) = self.headers(image)?;
        out.write_all(&file.to_bytes())?;
        out.write_all(&info.to_bytes())?;

        // Zero width or zero height: no pixel data, and the other dimension may be huge.
        if image.pixels().is_empty() {
            out.flush()?;
            return Ok(());
        }
        // Trailing bytes past `width * 3` stay zero and serve as row padding.
        let mut row_buf = vec![0u8; stride(info.width as u32) as usize];
        for row in image.rows().rev() {
            for (dst, px) in row_buf.chunks_exact_mut(3).zip(row) {
                dst[0] = px.b;
                dst[1] = px.g;
                dst[2] = px.r;
            }
            out.write_all(&row_buf)?;
        }
        out.flush()?;
        Ok(())
    }
}
