use alloc::vec::Vec;
use core::fmt;
use std::path::Path;

use crate::bmp;
use crate::config::ConvertConfig;
use crate::error::{DecodeError, EncodeError};
use crate::jpeg;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::pnm;

/// On-disk image formats the converter can read and write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Windows bitmap, 24-bit uncompressed.
    Bmp,
    /// JPEG (baseline, via the `image` crate).
    Jpeg,
    /// Binary PPM (P6).
    Ppm,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Bmp, ImageFormat::Jpeg, ImageFormat::Ppm];

    /// Look up a format by file extension, with or without the leading dot.
    ///
    /// Matching ignores ASCII case. Unknown extensions give `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL.into_iter().find(|format| {
            format
                .extensions()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }

    /// Format implied by the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Guess the format from the first bytes of a file.
    pub fn from_magic(data: &[u8]) -> Option<Self> {
        match data {
            [b'B', b'M', ..] => Some(Self::Bmp),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [b'P', b'6', ..] => Some(Self::Ppm),
            _ => None,
        }
    }

    /// Recognized extensions, lowercase, without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Bmp => &["bmp"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Ppm => &["ppm"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
            Self::Ppm => "PPM",
        }
    }

    /// Decode an in-memory file of this format.
    pub fn decode(self, data: &[u8], limits: &Limits) -> Result<PixelBuffer, DecodeError> {
        match self {
            Self::Bmp => bmp::BmpDecoder::new()
                .with_limits(limits.clone())
                .decode(data),
            Self::Jpeg => jpeg::decode(data, limits),
            Self::Ppm => pnm::PpmDecoder::new()
                .with_limits(limits.clone())
                .decode(data),
        }
    }

    /// Encode `image` into an in-memory file of this format.
    pub fn encode(self, image: &PixelBuffer, config: &ConvertConfig) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Bmp => config.bmp_encoder().encode(image),
            Self::Jpeg => config.jpeg_encoder().encode(image),
            Self::Ppm => pnm::PpmEncoder::new().encode(image),
        }
    }

    /// Read and decode the file at `path`.
    pub fn load(self, path: &Path, config: &ConvertConfig) -> Result<PixelBuffer, DecodeError> {
        match self {
            Self::Bmp => bmp::load(path, &config.limits),
            Self::Jpeg => jpeg::load(path, &config.limits),
            Self::Ppm => pnm::load(path, &config.limits),
        }
    }

    /// Encode `image` and write it to `path`.
    pub fn save(
        self,
        path: &Path,
        image: &PixelBuffer,
        config: &ConvertConfig,
    ) -> Result<(), EncodeError> {
        match self {
            Self::Bmp => bmp::save(path, image, &config.bmp_encoder()),
            Self::Jpeg => jpeg::save(path, image, &config.jpeg_encoder()),
            Self::Ppm => pnm::save(path, image),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(ImageFormat::from_extension("bmp"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_extension(".bmp"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension(".ppm"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_extension("BMP"), Some(ImageFormat::Bmp));
    }

    #[test]
    fn unknown_extensions() {
        assert_eq!(ImageFormat::from_extension(".gif"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
        assert_eq!(ImageFormat::from_extension("."), None);
        assert_eq!(ImageFormat::from_extension("bmpx"), None);
    }

    #[test]
    fn from_path_uses_last_extension() {
        assert_eq!(
            ImageFormat::from_path(Path::new("dir.ppm/photo.tar.jpeg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_path(Path::new("noext")), None);
        assert_eq!(ImageFormat::from_path(Path::new("anim.gif")), None);
        assert_eq!(ImageFormat::from_path(Path::new(".bmp")), None);
    }

    #[test]
    fn magic_detection() {
        assert_eq!(ImageFormat::from_magic(b"BM\0\0"), Some(ImageFormat::Bmp));
        assert_eq!(
            ImageFormat::from_magic(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_magic(b"P6\n"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_magic(b"GIF89a"), None);
        assert_eq!(ImageFormat::from_magic(b""), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(ImageFormat::Jpeg.to_string(), "JPEG");
    }
}
