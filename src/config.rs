use crate::bmp::BmpEncoder;
use crate::jpeg::{DEFAULT_QUALITY, JpegEncoder};
use crate::limits::Limits;

/// Settings for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Applied when decoding the input.
    pub limits: Limits,
    /// 1..=100, used when the output is JPEG.
    pub jpeg_quality: u8,
    /// Write `significant_colors = 0x1000000` in BMP output.
    pub legacy_bmp_colors: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            limits: Limits::NONE,
            jpeg_quality: DEFAULT_QUALITY,
            legacy_bmp_colors: false,
        }
    }
}

impl ConvertConfig {
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::default()
    }

    pub fn bmp_encoder(&self) -> BmpEncoder {
        BmpEncoder::new().with_legacy_significant_colors(self.legacy_bmp_colors)
    }

    pub fn jpeg_encoder(&self) -> JpegEncoder {
        JpegEncoder::new().with_quality(self.jpeg_quality)
    }
}

#[derive(Default)]
pub struct ConvertConfigBuilder {
    limits: Option<Limits>,
    jpeg_quality: Option<u8>,
    legacy_bmp_colors: Option<bool>,
}

impl ConvertConfigBuilder {
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Clamped to 1..=100 by [`Self::build`].
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn legacy_bmp_colors(mut self, enabled: bool) -> Self {
        self.legacy_bmp_colors = Some(enabled);
        self
    }

    pub fn build(self) -> ConvertConfig {
        let default = ConvertConfig::default();
        ConvertConfig {
            limits: self.limits.unwrap_or(default.limits),
            jpeg_quality: self
                .jpeg_quality
                .unwrap_or(default.jpeg_quality)
                .clamp(1, 100),
            legacy_bmp_colors: self.legacy_bmp_colors.unwrap_or(default.legacy_bmp_colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(ConvertConfig::builder().build(), ConvertConfig::default());
    }

    #[test]
    fn builder_sets_fields() {
        let config = ConvertConfig::builder()
            .jpeg_quality(0)
            .legacy_bmp_colors(true)
            .limits(Limits {
                max_pixels: Some(10),
                ..Default::default()
            })
            .build();
        assert_eq!(config.jpeg_quality, 1);
        assert!(config.legacy_bmp_colors);
        assert_eq!(config.limits.max_pixels, Some(10));
        assert_eq!(config.jpeg_encoder().quality(), 1);
        assert_eq!(
            config.bmp_encoder(),
            BmpEncoder::new().with_legacy_significant_colors(true)
        );
    }
}
