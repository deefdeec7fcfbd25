//! Guide-line drawing instructions in canvas coordinates.

use super::image::LoadedImage;
use crate::transform::{CanvasRect, CanvasSize, Letterbox};
use crate::CutMode;

/// Gap between a guide line and its label.
const LABEL_MARGIN: f64 = 10.0;

/// A straight line across the canvas marking one cut.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    pub mode: CutMode,
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// `H1`, `V2`, ...; empty for the hover preview.
    pub label: String,
    /// Top-left anchor of the label.
    pub label_at: (f64, f64),
}

impl GuideLine {
    /// A full-span line for a cut at canvas position `pos` (a `y` for
    /// horizontal cuts, an `x` for vertical ones).
    fn across(canvas: CanvasSize, mode: CutMode, pos: f64, label: String) -> Self {
        match mode {
            CutMode::Horizontal => Self {
                mode,
                from: (0.0, pos),
                to: (canvas.width, pos),
                label,
                label_at: (LABEL_MARGIN, pos - LABEL_MARGIN),
            },
            CutMode::Vertical => Self {
                mode,
                from: (pos, 0.0),
                to: (pos, canvas.height),
                label,
                label_at: (pos + LABEL_MARGIN, LABEL_MARGIN),
            },
        }
    }
}

/// Everything to draw on top of the canvas for the current image.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Where the scaled image sits inside the canvas.
    pub image_rect: CanvasRect,
    pub guides: Vec<GuideLine>,
}

pub(crate) fn build_overlay(image: &LoadedImage, canvas: CanvasSize) -> Option<Overlay> {
    let lb = Letterbox::fit(canvas, image.width(), image.height())?;

    let guides = [CutMode::Horizontal, CutMode::Vertical]
        .into_iter()
        .flat_map(|mode| {
            image
                .cuts(mode)
                .as_slice()
                .iter()
                .enumerate()
                .map(move |(i, &pct)| {
                    let label = format!("{}{}", mode.label_prefix(), i + 1);
                    GuideLine::across(canvas, mode, lb.percent_to_canvas(mode, pct), label)
                })
        })
        .collect();

    Some(Overlay {
        image_rect: lb.image_rect(),
        guides,
    })
}

pub(crate) fn build_hover_guide(canvas: CanvasSize, mode: CutMode, x: f64, y: f64) -> GuideLine {
    let pos = match mode {
        CutMode::Horizontal => y,
        CutMode::Vertical => x,
    };
    GuideLine::across(canvas, mode, pos, String::new())
}
