//! Binary PPM (P6): `P6`, width, height and maxval as ASCII decimal
//! separated by whitespace (with `#` comments), one whitespace byte, then
//! `R,G,B` samples row by row from the top.
//!
//! Only 8-bit samples are handled. Grayscale, ASCII, 16-bit and float
//! variants of the PNM family are rejected as unsupported.

mod decode;
mod encode;

pub use decode::{PpmDecoder, PpmHeader};
pub use encode::PpmEncoder;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{DecodeError, EncodeError};
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Read and decode a PPM file.
pub fn load(path: &Path, limits: &Limits) -> Result<PixelBuffer, DecodeError> {
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read PPM");
    PpmDecoder::new().with_limits(limits.clone()).decode(&data)
}

/// Encode `image` as P6 and write it to `path`.
pub fn save(path: &Path, image: &PixelBuffer) -> Result<(), EncodeError> {
    if !image.is_valid() {
        return Err(EncodeError::InvalidImage);
    }
    let file = File::create(path)?;
    PpmEncoder::new().write_to(image, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), "wrote PPM");
    Ok(())
}
