//! Image decoding for Lility.
//!
//! This module provides functionality for:
//! - Reading image files from disk into RGBA pixel buffers
//! - Applying EXIF orientation so the buffer matches what viewers show
//! - Downscaling buffers for on-screen previews
//!
//! All operations are synchronous; the desktop front end calls them directly
//! from its event handlers.

mod file;
mod resize;
mod types;

pub use file::{decode_bytes, decode_file};
pub use resize::{generate_preview, resize_to_fit, PREVIEW_MAX_EDGE};
pub use types::{DecodeError, Orientation, PixelBuffer, CHANNELS};
