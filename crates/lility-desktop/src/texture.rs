//! GPU texture for the image on screen.
//!
//! The working buffer is downscaled to a preview before upload. The
//! letterbox is always computed from the full-size buffer, so the preview
//! resolution only affects sharpness.

use egui::{ColorImage, TextureHandle, TextureOptions};
use lility_core::decode::{generate_preview, DecodeError};
use lility_core::{LoadedImage, PixelBuffer};

/// Identifies which buffer a texture was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewKey {
    /// Bumped by the app whenever the image list is replaced.
    pub generation: u64,
    pub index: usize,
    pub revision: u64,
}

pub struct PreviewTexture {
    key: PreviewKey,
    handle: TextureHandle,
}

impl PreviewTexture {
    pub fn handle(&self) -> &TextureHandle {
        &self.handle
    }
}

pub fn to_color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [buffer.width as usize, buffer.height as usize],
        &buffer.pixels,
    )
}

/// Reuse `cached` if it was built from the same buffer, otherwise upload
/// a new preview of `image`.
pub fn refresh(
    ctx: &egui::Context,
    cached: Option<PreviewTexture>,
    key: PreviewKey,
    image: &LoadedImage,
) -> Result<PreviewTexture, DecodeError> {
    if let Some(texture) = cached.filter(|t| t.key == key) {
        return Ok(texture);
    }
    let preview = generate_preview(image.pixels())?;
    let handle = ctx.load_texture(
        image.display_name(),
        to_color_image(&preview),
        TextureOptions::LINEAR,
    );
    Ok(PreviewTexture { key, handle })
}
