//! Lility Core - Slice engine
//!
//! This crate provides everything behind the Lility slicer window that does
//! not need a window: the session state of loaded images, conversion of
//! pointer positions into cut percentages, the vertical pre-crop with its
//! single-level undo, batch export of paired horizontal slices, file
//! decode/encode and the settings document.
//!
//! The desktop front end feeds [`session::Event`]s into
//! [`session::Session::handle`] and renders the [`session::Update`] and
//! [`session::Overlay`] values it gets back.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod export;
pub mod naming;
pub mod session;
pub mod transform;

pub use config::{Action, Settings, Shortcut, Theme};
pub use decode::{decode_file, PixelBuffer};
pub use encode::encode_file;
pub use error::SliceError;
pub use export::{export_horizontal_slices, plan_horizontal_slices, save_whole_images, ExportReport};
pub use session::{Event, LoadedImage, Notice, NoticeLevel, Overlay, Redraw, Session, Update};
pub use transform::{CanvasSize, Letterbox, PixelRect};

/// Which axis newly placed cuts run along.
///
/// A horizontal cut is a line across the image at some height; a vertical
/// cut is a line at some column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    #[default]
    Horizontal,
    Vertical,
}

impl CutMode {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            CutMode::Horizontal => CutMode::Vertical,
            CutMode::Vertical => CutMode::Horizontal,
        }
    }

    /// Prefix used for guide labels (`H1`, `V2`, ...).
    pub fn label_prefix(self) -> char {
        match self {
            CutMode::Horizontal => 'H',
            CutMode::Vertical => 'V',
        }
    }
}

impl std::fmt::Display for CutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CutMode::Horizontal => "Horizontal",
            CutMode::Vertical => "Vertical",
        };
        write!(f, "{}", s)
    }
}
