//! P6 encoder.

use alloc::format;
use alloc::vec::Vec;
use std::io::Write;

use crate::error::EncodeError;
use crate::pixel::PixelBuffer;

/// Encoder for binary PPM (P6, maxval 255).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PpmEncoder;

impl PpmEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode into a freshly allocated byte vector.
    pub fn encode(&self, image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(32 + image.pixels().len() * 3);
        self.write_to(image, &mut out)?;
        Ok(out)
    }

    /// Stream the encoded file into `out`, flushing it at the end.
    pub fn write_to<W: Write>(&self, image: &PixelBuffer, mut out: W) -> Result<(), EncodeError> {
        if !image.is_valid() {
            return Err(EncodeError::InvalidImage);
        }
        let (width, height) = (image.width(), image.height());
        let header = format!("P6\n{width} {height}\n255\n");
        out.write_all(header.as_bytes())?;
        if image.pixels().is_empty() {
            out.flush()?;
            return Ok(());
        }

        let mut row_buf = Vec::with_capacity(width * 3);
        for row in image.rows() {
            row_buf.clear();
            for px in row {
                row_buf.push(px.r);
                row_buf.push(px.g);
                row_buf.push(px.b);
            }
            out.write_all(&row_buf)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Color;

    #[test]
    fn writes_header_then_rgb_top_down() {
        let mut img = PixelBuffer::new(2, 1, Color::new(1, 2, 3)).unwrap();
        img.row_mut(0)[1] = Color::new(4, 5, 6);
        let bytes = PpmEncoder::new().encode(&img).unwrap();
        assert_eq!(bytes, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn sentinel_is_rejected() {
        assert!(matches!(
            PpmEncoder::new().encode(&PixelBuffer::invalid()),
            Err(EncodeError::InvalidImage)
        ));
    }
}
