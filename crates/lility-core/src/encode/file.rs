//! Saving pixel buffers to disk.
//!
//! The output format is inferred from the file extension, mirroring how the
//! display names carry the extension of the file they were imported from.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ExtendedColorType, ImageFormat};
use thiserror::Error;

use crate::decode::{PixelBuffer, CHANNELS};

/// Errors that can occur while encoding or writing an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// No known image format matches the extension
    #[error("Cannot infer an image format from {0}")]
    UnknownFormat(PathBuf),

    /// The codec rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Infer the output format from a path's extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat, EncodeError> {
    ImageFormat::from_path(path).map_err(|_| EncodeError::UnknownFormat(path.to_path_buf()))
}

/// Encode a buffer into the given format.
///
/// Formats that cannot carry an alpha channel (JPEG) receive the RGB
/// channels only.
pub fn encode_to_vec(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * CHANNELS;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut out = Cursor::new(Vec::new());
    let result = if supports_alpha(format) {
        image::write_buffer_with_format(
            &mut out,
            &image.pixels,
            width,
            height,
            ExtendedColorType::Rgba8,
            format,
        )
    } else {
        let rgb = strip_alpha(&image.pixels);
        image::write_buffer_with_format(
            &mut out,
            &rgb,
            width,
            height,
            ExtendedColorType::Rgb8,
            format,
        )
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}

/// Encode a buffer and write it to `path`, choosing the format by extension.
pub fn encode_file(image: &PixelBuffer, path: &Path) -> Result<(), EncodeError> {
    let format = format_for_path(path)?;
    let bytes = encode_to_vec(image, format)?;
    std::fs::write(path, bytes).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(CHANNELS)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}
