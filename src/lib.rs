//! # imgconv
//!
//! Converts raster images between BMP, JPEG and PPM through one in-memory
//! representation, [`PixelBuffer`].
//!
//! ## Supported Formats
//!
//! ### BMP ([`bmp`])
//! - Decode and encode of uncompressed 24-bit BMP, byte-exact header layout
//! - Rows bottom-up, padded to a multiple of 4 bytes, pixels stored B,G,R
//!
//! ### PPM ([`pnm`])
//! - Binary P6 with maxval up to 255
//!
//! ### JPEG ([`jpeg`])
//! - Delegated to the `image` crate, always 8-bit RGB
//!
//! ## Non-Goals
//!
//! - Compression in BMP output
//! - Alpha, grayscale or color management; everything is 8-bit RGB
//! - Animated or multi-frame formats
//! - Streaming decode (files are read into memory whole)
//!
//! ## Usage
//!
//! ```no_run
//! use imgconv::{ConvertConfig, ImageFormat, PixelBuffer, colors};
//! use std::path::Path;
//!
//! // Byte-level BMP round trip
//! let image = PixelBuffer::new(2, 1, colors::WHITE)?;
//! let bytes = imgconv::encode_bmp(&image)?;
//! assert_eq!(&bytes[..2], b"BM");
//! let decoded = imgconv::decode_bmp(&bytes)?;
//! assert_eq!(decoded, image);
//!
//! // File conversion, formats picked by extension
//! let config = ConvertConfig::default();
//! imgconv::convert(Path::new("in.ppm"), Path::new("out.bmp"), &config)?;
//!
//! // Or drive a codec directly
//! let format = ImageFormat::from_path(Path::new("photo.jpg")).unwrap();
//! let photo = format.load(Path::new("photo.jpg"), &config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod config;
mod convert;
mod error;
mod format;
mod limits;
mod pixel;

pub mod bmp;
pub mod jpeg;
pub mod logger;
pub mod pnm;

use alloc::vec::Vec;

// Re-exports
pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use convert::{ConvertError, ConvertSummary, convert};
pub use error::{DecodeError, EncodeError};
pub use format::ImageFormat;
pub use limits::Limits;
pub use pixel::{Color, PixelBuffer, colors};

/// Decode a 24-bit BMP file held in memory.
pub fn decode_bmp(data: &[u8]) -> Result<PixelBuffer, DecodeError> {
    bmp::BmpDecoder::new().decode(data)
}

/// Encode as 24-bit BMP with default settings.
pub fn encode_bmp(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    bmp::BmpEncoder::new().encode(image)
}

/// Decode a binary PPM (P6) held in memory.
pub fn decode_ppm(data: &[u8]) -> Result<PixelBuffer, DecodeError> {
    pnm::PpmDecoder::new().decode(data)
}

/// Encode as binary PPM (P6).
pub fn encode_ppm(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    pnm::PpmEncoder::new().encode(image)
}
