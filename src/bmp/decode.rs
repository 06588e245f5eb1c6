//! BMP decoder for uncompressed 24-bit files.
//!
//! Every header field the pixel loop depends on is validated before the
//! output buffer is allocated; nothing in the input is trusted.

use alloc::format;

use super::header::{
    BITS_PER_PIXEL, DATA_OFFSET, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader,
    SIGNATURE, stride,
};
use crate::error::DecodeError;
use crate::limits::Limits;
use crate::pixel::{Color, PixelBuffer, colors};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.pos.checked_add(N).ok_or(DecodeError::Truncated)?;
        let bytes = self.data.get(self.pos..end).ok_or(DecodeError::Truncated)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn set_position(&mut self, pos: usize) -> Result<(), DecodeError> {
        if pos > self.data.len() {
            return Err(DecodeError::Truncated);
        }
        self.pos = pos;
        Ok(())
    }

    /// Borrow the next `n` bytes.
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(n).ok_or(DecodeError::Truncated)?;
        let bytes = self.data.get(self.pos..end).ok_or(DecodeError::Truncated)?;
        self.pos = end;
        Ok(bytes)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

// ── Decoder ─────────────────────────────────────────────────────────

/// Decoder for 24-bit uncompressed BMP data.
#[derive(Clone, Debug, Default)]
pub struct BmpDecoder {
    limits: Limits,
}

impl BmpDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Parse and validate both headers without touching pixel data.
    pub fn read_headers(&self, data: &[u8]) -> Result<(FileHeader, InfoHeader), DecodeError> {
        let mut cursor = Cursor::new(data);
        let (file, info) = parse_headers(&mut cursor)?;
        self.limits.check(info.width as u32, info.height as u32)?;
        Ok((file, info))
    }

    /// Decode a complete BMP file held in memory.
    pub fn decode(&self, data: &[u8]) -> Result<PixelBuffer, DecodeError> {
        let mut cursor = Cursor::new(data);
        let (file, info) = parse_headers(&mut cursor)?;
        self.limits.check(info.width as u32, info.height as u32)?;

        let w = info.width as usize;
        let h = info.height as usize;
        let row_stride = stride(info.width as u32);

        cursor.set_position(file.data_offset as usize)?;
        // Reject short files up front instead of allocating for rows that aren't there.
        let needed = row_stride
            .checked_mul(h as u64)
            .ok_or(DecodeError::Truncated)?;
        if needed > cursor.remaining() as u64 {
            return Err(DecodeError::Truncated);
        }

        let mut image = PixelBuffer::new(info.width, info.height, colors::BLACK)?;
        if w == 0 {
            // stride(0) is 0: there are no row bytes to read
            return Ok(image);
        }
        for y in (0..h).rev() {
            let row = cursor.take(row_stride as usize)?;
            // Bytes past `w * 3` are padding.
            for (dst, bgr) in image.row_mut(y).iter_mut().zip(row[..w * 3].chunks_exact(3)) {
                *dst = Color::new(bgr[2], bgr[1], bgr[0]);
            }
        }
        Ok(image)
    }
}

fn parse_headers(cursor: &mut Cursor<'_>) -> Result<(FileHeader, InfoHeader), DecodeError> {
    let file = FileHeader::from_bytes(&cursor.read_fixed_bytes::<FILE_HEADER_SIZE>()?);
    if file.signature != SIGNATURE {
        return Err(DecodeError::BadSignature);
    }
    let info = InfoHeader::from_bytes(&cursor.read_fixed_bytes::<INFO_HEADER_SIZE>()?);

    if info.width < 0 || info.height < 0 {
        return Err(DecodeError::InvalidDimensions {
            width: info.width,
            height: info.height,
        });
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(DecodeError::Unsupported(format!(
            "{} bits per pixel (only 24 is supported)",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(DecodeError::Unsupported(format!(
            "compression type {}",
            info.compression
        )));
    }
    if file.data_offset < DATA_OFFSET {
        return Err(DecodeError::InvalidHeader(format!(
            "pixel data offset {} overlaps the headers",
            file.data_offset
        )));
    }
    Ok((file, info))
}
