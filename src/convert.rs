//! Whole-file conversion: resolve both formats, load, save.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ConvertConfig;
use crate::error::{DecodeError, EncodeError};
use crate::format::ImageFormat;

/// Why a conversion did not complete. Each variant maps to its own exit code.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("unknown format of the input file: {}", .0.display())]
    UnknownInputFormat(PathBuf),

    #[error("unknown format of the output file: {}", .0.display())]
    UnknownOutputFormat(PathBuf),

    #[error("loading {} failed: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("saving {} failed: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },
}

impl ConvertError {
    /// Process exit status for this failure. 0 is success and 1 a usage error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownInputFormat(_) => 2,
            Self::UnknownOutputFormat(_) => 3,
            Self::Load { .. } => 4,
            Self::Save { .. } => 5,
        }
    }
}

/// What a successful conversion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input_format: ImageFormat,
    pub output_format: ImageFormat,
    pub width: usize,
    pub height: usize,
}

/// Convert `input` into `output`, picking both codecs from the file extensions.
///
/// Both formats are resolved before any file is touched.
pub fn convert(
    input: &Path,
    output: &Path,
    config: &ConvertConfig,
) -> Result<ConvertSummary, ConvertError> {
    let input_format = ImageFormat::from_path(input)
        .ok_or_else(|| ConvertError::UnknownInputFormat(input.to_path_buf()))?;
    let output_format = ImageFormat::from_path(output)
        .ok_or_else(|| ConvertError::UnknownOutputFormat(output.to_path_buf()))?;
    debug!(%input_format, %output_format, "resolved formats");

    let image = input_format.load(input, config).map_err(|source| {
        warn!(path = %input.display(), error = %source, "load failed");
        ConvertError::Load {
            path: input.to_path_buf(),
            source,
        }
    })?;
    debug!(width = image.width(), height = image.height(), "decoded");

    output_format.save(output, &image, config).map_err(|source| {
        warn!(path = %output.display(), error = %source, "save failed");
        ConvertError::Save {
            path: output.to_path_buf(),
            source,
        }
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "converted {}x{} {} to {}",
        image.width(),
        image.height(),
        input_format,
        output_format
    );
    Ok(ConvertSummary {
        input_format,
        output_format,
        width: image.width(),
        height: image.height(),
    })
}
