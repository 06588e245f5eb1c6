//! JPEG, delegated to the `image` crate.
//!
//! Decoded images are converted to 8-bit RGB whatever their source color
//! type; encoding always writes baseline RGB.

use alloc::vec::Vec;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::{ExtendedColorType, ImageFormat, ImageReader};

use crate::error::{DecodeError, EncodeError};
use crate::limits::Limits;
use crate::pixel::{Color, PixelBuffer, colors};

pub const DEFAULT_QUALITY: u8 = 90;

/// Decode a JPEG held in memory.
///
/// Dimensions are probed and checked against `limits` before the image is
/// decompressed.
pub fn decode(data: &[u8], limits: &Limits) -> Result<PixelBuffer, DecodeError> {
    let (width, height) =
        ImageReader::with_format(Cursor::new(data), ImageFormat::Jpeg).into_dimensions()?;
    limits.check(width, height)?;

    let rgb = ImageReader::with_format(Cursor::new(data), ImageFormat::Jpeg)
        .decode()?
        .to_rgb8();
    // JPEG dimensions are 16-bit, so they always fit in i32.
    let mut image = PixelBuffer::new(rgb.width() as i32, rgb.height() as i32, colors::BLACK)?;
    for (dst, px) in image.pixels_mut().iter_mut().zip(rgb.pixels()) {
        let [r, g, b] = px.0;
        *dst = Color::new(r, g, b);
    }
    Ok(image)
}

/// JPEG encoder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JpegEncoder {
    quality: u8,
}

impl Default for JpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JpegEncoder {
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }

    /// Quality from 1 (smallest) to 100 (best). Out-of-range values are clamped.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn encode(&self, image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.write_to(image, &mut out)?;
        Ok(out)
    }

    /// Stream the encoded file into `out`, flushing it at the end.
    pub fn write_to<W: Write>(&self, image: &PixelBuffer, mut out: W) -> Result<(), EncodeError> {
        if !image.is_valid() {
            return Err(EncodeError::InvalidImage);
        }
        let too_large = || EncodeError::DimensionsTooLarge {
            width: image.width(),
            height: image.height(),
        };
        let width = u32::try_from(image.width()).map_err(|_| too_large())?;
        let height = u32::try_from(image.height()).map_err(|_| too_large())?;

        let samples: Vec<u8> = image
            .pixels()
            .iter()
            .flat_map(|px| [px.r, px.g, px.b])
            .collect();
        ImageJpegEncoder::new_with_quality(&mut out, self.quality).encode(
            &samples,
            width,
            height,
            ExtendedColorType::Rgb8,
        )?;
        out.flush()?;
        Ok(())
    }
}

/// Read and decode a JPEG file.
pub fn load(path: &Path, limits: &Limits) -> Result<PixelBuffer, DecodeError> {
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read JPEG");
    decode(&data, limits)
}

/// Encode `image` as JPEG and write it to `path`.
pub fn save(path: &Path, image: &PixelBuffer, encoder: &JpegEncoder) -> Result<(), EncodeError> {
    if !image.is_valid() {
        return Err(EncodeError::InvalidImage);
    }
    let file = File::create(path)?;
    encoder.write_to(image, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), quality = encoder.quality(), "wrote JPEG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: i32, h: i32) -> PixelBuffer {
        let mut img = PixelBuffer::new(w, h, colors::BLACK).unwrap();
        for y in 0..h as usize {
            for (x, px) in img.row_mut(y).iter_mut().enumerate() {
                *px = Color::new((x * 16) as u8, (y * 16) as u8, 128);
            }
        }
        img
    }

    #[test]
    fn encode_then_decode_keeps_dimensions() {
        let img = gradient(16, 8);
        let bytes = JpegEncoder::new().encode(&img).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = decode(&bytes, &Limits::default()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
        // lossy, but a smooth gradient at q90 stays close
        for (a, b) in img.pixels().iter().zip(decoded.pixels()) {
            assert!((i16::from(a.r) - i16::from(b.r)).abs() < 40);
            assert!((i16::from(a.g) - i16::from(b.g)).abs() < 40);
        }
    }

    #[test]
    fn quality_is_clamped() {
        assert_eq!(JpegEncoder::new().with_quality(0).quality(), 1);
        assert_eq!(JpegEncoder::new().with_quality(255).quality(), 100);
        assert_eq!(JpegEncoder::default().quality(), DEFAULT_QUALITY);
    }

    #[test]
    fn limits_apply_before_decoding() {
        let bytes = JpegEncoder::new().encode(&gradient(16, 8)).unwrap();
        let limits = Limits {
            max_width: Some(8),
            ..Default::default()
        };
        assert!(matches!(
            decode(&bytes, &limits),
            Err(DecodeError::LimitExceeded(_))
        ));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode(b"not a jpeg", &Limits::default()),
            Err(DecodeError::Jpeg(_))
        ));
    }

    #[test]
    fn sentinel_is_rejected() {
        assert!(matches!(
            JpegEncoder::new().encode(&PixelBuffer::invalid()),
            Err(EncodeError::InvalidImage)
        ));
    }
}
