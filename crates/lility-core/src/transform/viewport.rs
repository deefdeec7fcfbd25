//! Letterbox fitting and pointer-to-image coordinate conversion.
//!
//! The working image is drawn uniformly scaled and centered inside the
//! canvas. Pointer positions arrive in canvas coordinates and are turned into
//! percentages of the image height (horizontal cuts) or width (vertical cuts).

use crate::CutMode;

/// Size of the drawing surface in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of an image inside a canvas: uniform scale plus centering offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Canvas units per image pixel.
    pub scale: f64,
    /// Horizontal margin left of the image.
    pub offset_x: f64,
    /// Vertical margin above the image.
    pub offset_y: f64,
    pub image_width: u32,
    pub image_height: u32,
}

impl Letterbox {
    /// Fit an image into a canvas, preserving aspect ratio.
    ///
    /// Returns `None` when either the canvas or the image has no area, since
    /// no scale can be derived.
    pub fn fit(canvas: CanvasSize, image_width: u32, image_height: u32) -> Option<Self> {
        if image_width == 0 || image_height == 0 {
            return None;
        }
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return None;
        }

        let img_w = image_width as f64;
        let img_h = image_height as f64;
        let scale = (canvas.width / img_w).min(canvas.height / img_h);

        Some(Self {
            scale,
            offset_x: (canvas.width - img_w * scale) / 2.0,
            offset_y: (canvas.height - img_h * scale) / 2.0,
            image_width,
            image_height,
        })
    }

    /// Map a pointer position to a percentage along the axis cut by `mode`.
    ///
    /// The result is not clamped; clicks in the letterbox margin fall
    /// outside `[0, 100]`.
    pub fn pointer_to_percent(&self, mode: CutMode, x: f64, y: f64) -> f64 {
        match mode {
            CutMode::Horizontal => (y - self.offset_y) / self.scale / self.image_height as f64 * 100.0,
            CutMode::Vertical => (x - self.offset_x) / self.scale / self.image_width as f64 * 100.0,
        }
    }

    /// Canvas coordinate of a cut line: a `y` for horizontal cuts, an `x`
    /// for vertical ones.
    pub fn percent_to_canvas(&self, mode: CutMode, percent: f64) -> f64 {
        match mode {
            CutMode::Horizontal => {
                percent / 100.0 * self.image_height as f64 * self.scale + self.offset_y
            }
            CutMode::Vertical => {
                percent / 100.0 * self.image_width as f64 * self.scale + self.offset_x
            }
        }
    }

    /// The rectangle the scaled image occupies inside the canvas.
    pub fn image_rect(&self) -> CanvasRect {
        CanvasRect {
            x: self.offset_x,
            y: self.offset_y,
            width: self.image_width as f64 * self.scale,
            height: self.image_height as f64 * self.scale,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::percent_to_pixel;
    use proptest::prelude::*;

    fn mode_strategy() -> impl Strategy<Value = CutMode> {
        prop_oneof![Just(CutMode::Horizontal), Just(CutMode::Vertical)]
    }

    proptest! {
        /// Property: percent -> canvas -> percent is the identity (up to float error).
        #[test]
        fn prop_canvas_round_trip(
            (cw, ch) in (10.0f64..=4000.0, 10.0f64..=4000.0),
            (iw, ih) in (1u32..=8000, 1u32..=8000),
            mode in mode_strategy(),
            pct in 0.0f64..=100.0,
        ) {
            let lb = Letterbox::fit(CanvasSize::new(cw, ch), iw, ih).unwrap();
            let pos = lb.percent_to_canvas(mode, pct);
            let back = lb.pointer_to_percent(mode, pos, pos);
            prop_assert!((back - pct).abs() < 1e-6, "{} -> {} -> {}", pct, pos, back);
        }

        /// Property: a pointer position converted to a pixel and back moves by
        /// less than one pixel's worth of percent.
        #[test]
        fn prop_pixel_round_trip_within_one_pixel(
            (cw, ch) in (10.0f64..=4000.0, 10.0f64..=4000.0),
            (iw, ih) in (1u32..=8000, 1u32..=8000),
            mode in mode_strategy(),
            (fx, fy) in (0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let lb = Letterbox::fit(CanvasSize::new(cw, ch), iw, ih).unwrap();
            let rect = lb.image_rect();
            let x = rect.x + fx * rect.width;
            let y = rect.y + fy * rect.height;

            let pct = lb.pointer_to_percent(mode, x, y);
            let extent = match mode {
                CutMode::Horizontal => ih,
                CutMode::Vertical => iw,
            };
            let px = percent_to_pixel(pct, extent);
            let back = px as f64 / extent as f64 * 100.0;
            let one_pixel = 100.0 / extent as f64;

            prop_assert!((back - pct).abs() < one_pixel, "{} -> {}px -> {}", pct, px, back);
        }

        /// Property: the drawn image never exceeds the canvas.
        #[test]
        fn prop_image_rect_inside_canvas(
            (cw, ch) in (1.0f64..=4000.0, 1.0f64..=4000.0),
            (iw, ih) in (1u32..=8000, 1u32..=8000),
        ) {
            let lb = Letterbox::fit(CanvasSize::new(cw, ch), iw, ih).unwrap();
            let r = lb.image_rect();
            prop_assert!(r.x >= -1e-9 && r.y >= -1e-9);
            prop_assert!(r.x + r.width <= cw + 1e-6);
            prop_assert!(r.y + r.height <= ch + 1e-6);
        }
    }
}
