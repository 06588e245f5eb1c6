//! P6 decoder.

use alloc::format;

use crate::error::DecodeError;
use crate::limits::Limits;
use crate::pixel::{Color, PixelBuffer, colors};

/// Parsed P6 header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    /// Offset of the first sample byte.
    pub data_offset: usize,
}

/// Decoder for binary PPM (P6) with maxval up to 255.
#[derive(Clone, Debug, Default)]
pub struct PpmDecoder {
    limits: Limits,
}

impl PpmDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn read_header(&self, data: &[u8]) -> Result<PpmHeader, DecodeError> {
        let header = parse_header(data)?;
        self.limits.check(header.width, header.height)?;
        Ok(header)
    }

    /// Decode a complete PPM file held in memory.
    pub fn decode(&self, data: &[u8]) -> Result<PixelBuffer, DecodeError> {
        let header = self.read_header(data)?;
        let (w, h) = (header.width as usize, header.height as usize);
        let expected = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(3))
            .ok_or(DecodeError::Truncated)?;
        let samples = data
            .get(header.data_offset..)
            .and_then(|rest| rest.get(..expected))
            .ok_or(DecodeError::Truncated)?;

        // parse_header guarantees both fit in i32
        let mut image = PixelBuffer::new(header.width as i32, header.height as i32, colors::BLACK)?;
        let maxval = header.maxval;
        let scale = |v: u8| -> u8 {
            if maxval == 255 {
                v
            } else {
                let v = u32::from(v).min(maxval);
                ((v * 255 + maxval / 2) / maxval) as u8
            }
        };
        for (dst, rgb) in image.pixels_mut().iter_mut().zip(samples.chunks_exact(3)) {
            *dst = Color::new(scale(rgb[0]), scale(rgb[1]), scale(rgb[2]));
        }
        Ok(image)
    }
}

pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, DecodeError> {
    if data.len() < 2 {
        return Err(DecodeError::Truncated);
    }
    match &data[..2] {
        b"P6" => {}
        [b'P', b'1'..=b'7'] | b"PF" | b"Pf" => {
            return Err(DecodeError::Unsupported(format!(
                "PNM variant {} (only binary RGB P6 is supported)",
                data[1] as char
            )));
        }
        _ => return Err(DecodeError::BadSignature),
    }

    let mut pos = 2;
    let width = read_number(data, &mut pos)?;
    let height = read_number(data, &mut pos)?;
    let maxval = read_number(data, &mut pos)?;

    for (name, v) in [("width", width), ("height", height)] {
        if i32::try_from(v).is_err() {
            return Err(DecodeError::InvalidHeader(format!("{name} {v} out of range")));
        }
    }
    match maxval {
        1..=255 => {}
        256..=65535 => {
            return Err(DecodeError::Unsupported(format!(
                "16-bit samples (maxval {maxval})"
            )));
        }
        _ => return Err(DecodeError::InvalidHeader(format!("maxval {maxval}"))),
    }

    // Exactly one whitespace byte separates the header from the samples.
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        Some(_) => {
            return Err(DecodeError::InvalidHeader(
                "missing whitespace after maxval".into(),
            ));
        }
        None => return Err(DecodeError::Truncated),
    }

    Ok(PpmHeader {
        width,
        height,
        maxval,
        data_offset: pos,
    })
}

/// Skip whitespace and `#` comments, then parse a decimal number.
fn read_number(data: &[u8], pos: &mut usize) -> Result<u32, DecodeError> {
    loop {
        match data.get(*pos) {
            None => return Err(DecodeError::Truncated),
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(b'#') => {
                while let Some(&b) = data.get(*pos) {
                    *pos += 1;
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            }
            Some(_) => break,
        }
    }

    let start = *pos;
    while data.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    if *pos == start {
        return Err(DecodeError::InvalidHeader(format!(
            "expected a number at byte {start}"
        )));
    }
    if *pos == data.len() {
        return Err(DecodeError::Truncated);
    }
    let mut value: u32 = 0;
    for &digit in &data[start..*pos] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(digit - b'0')))
            .ok_or_else(|| DecodeError::InvalidHeader("number too large".into()))?;
    }
    Ok(value)
}
