//! Windows BMP: uncompressed 24-bit, bottom-up rows padded to 4 bytes.
//!
//! File layout:
//!
//! | bytes | content |
//! |---|---|
//! | 0..14 | [`FileHeader`]: `"BM"`, total size, reserved, data offset (54) |
//! | 14..54 | [`InfoHeader`]: dimensions, 1 plane, 24 bpp, no compression |
//! | 54.. | rows from the bottom of the image up, each `B,G,R` per pixel, padded to [`stride`] |

mod decode;
mod encode;
mod header;

pub use decode::BmpDecoder;
pub use encode::BmpEncoder;
pub use header::{
    DATA_OFFSET, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader,
    LEGACY_SIGNIFICANT_COLORS, SIGNATURE, stride,
};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{DecodeError, EncodeError};
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Read and decode a BMP file.
pub fn load(path: &Path, limits: &Limits) -> Result<PixelBuffer, DecodeError> {
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read BMP");
    BmpDecoder::new().with_limits(limits.clone()).decode(&data)
}

/// Encode `image` and write it to `path`.
///
/// The image is validated before the file is created, so an invalid image
/// never leaves an empty file behind.
pub fn save(path: &Path, image: &PixelBuffer, encoder: &BmpEncoder) -> Result<(), EncodeError> {
    let (file_header, _) = encoder.headers(image)?;
    let file = File::create(path)?;
    encoder.write_to(image, BufWriter::new(file))?;
    tracing::debug!(
        path = %path.display(),
        bytes = file_header.total_size,
        "wrote BMP"
    );
    Ok(())
}
