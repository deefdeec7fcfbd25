//! Geometry for the slice engine: canvas fitting and cropping.
//!
//! # Coordinate System
//!
//! - Canvas coordinates are device-independent units, origin top-left
//! - Cut positions are percentages (0 to 100) of the working image's height
//!   (horizontal cuts) or width (vertical cuts)
//! - Crop rectangles are pixel edges, right/bottom exclusive

mod crop;
mod viewport;

pub use crop::{crop_to_rect, percent_to_pixel, span_to_pixels, PixelRect};
pub use viewport::{CanvasRect, CanvasSize, Letterbox};
