//! Downscaling for on-screen previews.
//!
//! The working buffer always keeps full resolution; cut percentages are
//! computed against it. Previews exist only so the GPU texture stays within
//! the limits of the display backend.

use image::imageops::FilterType;

use super::{DecodeError, PixelBuffer};

/// Longest edge of a preview texture in pixels.
pub const PREVIEW_MAX_EDGE: u32 = 2048;

/// Resize an image to fit within a maximum edge length while preserving aspect ratio.
///
/// If the image already fits it is returned unchanged (as a clone).
///
/// # Errors
///
/// Returns `DecodeError::Empty` for a zero `max_edge` and
/// `DecodeError::CorruptedFile` if the buffer length does not match its
/// dimensions.
pub fn resize_to_fit(image: &PixelBuffer, max_edge: u32) -> Result<PixelBuffer, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::Empty {
            width: 0,
            height: 0,
        });
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(image.width, image.height, max_edge);

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;
    let resized = image::imageops::resize(&rgba, new_width, new_height, FilterType::Triangle);

    Ok(PixelBuffer::from_rgba_image(resized))
}

/// Build the preview for an image, downscaled to [`PREVIEW_MAX_EDGE`].
pub fn generate_preview(image: &PixelBuffer) -> Result<PixelBuffer, DecodeError> {
    resize_to_fit(image, PREVIEW_MAX_EDGE)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
