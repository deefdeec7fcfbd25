//! Pixel-rectangle cropping and percent-to-pixel conversion.
//!
//! Cut lines are stored as percentages along one axis. Before cropping they
//! are turned into pixel edges with [`percent_to_pixel`], which rounds to the
//! nearest pixel and clamps to the image extent.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel corner
//! - `right` and `bottom` are exclusive edges
//! - A rectangle spanning the whole image is `[0, 0, width, height]`

use crate::decode::{PixelBuffer, CHANNELS};

/// A crop region in pixel edges, `left..right` by `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Full-height strip between two columns.
    pub fn columns(image: &PixelBuffer, start: u32, end: u32) -> Self {
        Self::new(start, 0, end, image.height)
    }

    /// Full-width band between two rows.
    pub fn rows(image: &PixelBuffer, start: u32, end: u32) -> Self {
        Self::new(0, start, image.width, end)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Check if the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clip the rectangle to an image of the given size.
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        let right = self.right.min(width);
        let bottom = self.bottom.min(height);
        Self {
            left: self.left.min(right),
            top: self.top.min(bottom),
            right,
            bottom,
        }
    }
}

/// Convert a percentage along an axis into a pixel edge.
///
/// Computes `round(pct / 100 * extent)`, clamped to `[0, extent]`.
pub fn percent_to_pixel(percent: f64, extent: u32) -> u32 {
    let px = (percent / 100.0 * extent as f64).round();
    if px.is_nan() || px <= 0.0 {
        0
    } else {
        (px as u32).min(extent)
    }
}

/// Convert a pair of cut percentages into ordered pixel edges.
pub fn span_to_pixels(start_pct: f64, end_pct: f64, extent: u32) -> (u32, u32) {
    let a = percent_to_pixel(start_pct, extent);
    let b = percent_to_pixel(end_pct, extent);
    (a.min(b), a.max(b))
}

/// Copy the pixels inside `rect` into a new buffer.
///
/// The rectangle is clipped to the image first. An empty rectangle yields an
/// empty buffer; callers that must not produce empty output check
/// [`PixelRect::is_empty`] beforehand.
pub fn crop_to_rect(image: &PixelBuffer, rect: PixelRect) -> PixelBuffer {
    let rect = rect.clamp_to(image.width, image.height);

    if rect == PixelRect::new(0, 0, image.width, image.height) {
        return image.clone();
    }

    let out_width = rect.width();
    let out_height = rect.height();
    let src_stride = image.width as usize * CHANNELS;
    let row_bytes = out_width as usize * CHANNELS;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);
    for y in rect.top..rect.bottom {
        let start = y as usize * src_stride + rect.left as usize * CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    PixelBuffer {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_percent_to_pixel_rounds() {
        assert_eq!(percent_to_pixel(10.0, 1000), 100);
        assert_eq!(percent_to_pixel(33.33, 10), 3);
        assert_eq!(percent_to_pixel(25.0, 10), 3); // 2.5 rounds away from zero
        assert_eq!(percent_to_pixel(0.0, 10), 0);
        assert_eq!(percent_to_pixel(100.0, 10), 10);
    }

    #[test]
    fn test_percent_to_pixel_clamps() {
        assert_eq!(percent_to_pixel(-5.0, 10), 0);
        assert_eq!(percent_to_pixel(150.0, 10), 10);
        assert_eq!(percent_to_pixel(f64::NAN, 10), 0);
    }

    #[test]
    fn test_span_to_pixels_orders_edges() {
        assert_eq!(span_to_pixels(90.0, 60.0, 1000), (600, 900));
        assert_eq!(span_to_pixels(10.0, 40.0, 1000), (100, 400));
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(50, 50);
        let result = crop_to_rect(&img, PixelRect::new(0, 0, 50, 50));
        assert_eq!(result, img);
    }

    #[test]
    fn test_column_crop() {
        let img = test_image(10, 4);
        let result = crop_to_rect(&img, PixelRect::columns(&img, 2, 5));

        assert_eq!(result.dimensions(), (3, 4));
        // First pixel comes from (2, 0); second row starts at (2, 1) = 12
        assert_eq!(result.pixels[0], 2);
        assert_eq!(result.pixels[3 * CHANNELS], 12);
    }

    #[test]
    fn test_row_crop() {
        let img = test_image(5, 10);
        let result = crop_to_rect(&img, PixelRect::rows(&img, 3, 6));

        assert_eq!(result.dimensions(), (5, 3));
        // Value at (0, 3) = 15
        assert_eq!(result.pixels[0], 15);
        assert_eq!(result.pixels.len(), 5 * 3 * CHANNELS);
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let img = test_image(10, 10);
        let result = crop_to_rect(&img, PixelRect::new(8, 8, 20, 20));
        assert_eq!(result.dimensions(), (2, 2));
    }

    #[test]
    fn test_empty_rect() {
        let img = test_image(10, 10);
        let rect = PixelRect::rows(&img, 4, 4);

        assert!(rect.is_empty());
        let result = crop_to_rect(&img, rect);
        assert!(result.is_empty());
    }

    #[test]
    fn test_inverted_rect_is_empty() {
        let rect = PixelRect::new(6, 0, 2, 10);
        assert_eq!(rect.width(), 0);
        assert!(rect.is_empty());
        assert!(rect.clamp_to(10, 10).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
