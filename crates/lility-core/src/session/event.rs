//! Input events and the instructions returned for them.

use crate::transform::CanvasSize;

/// A discrete user input the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Primary click on the canvas at `(x, y)`.
    Click { canvas: CanvasSize, x: f64, y: f64 },
    /// Switch between horizontal and vertical cut placement.
    ToggleCutMode,
    NextImage,
    PreviousImage,
    /// Remove the cuts of the current image.
    ClearSlices,
    /// Revert the vertical pre-crop of the current image.
    UndoVerticalCrop,
    /// Drop every loaded image; ignored unless the user confirmed.
    ClearAll { confirmed: bool },
    /// The canvas changed size.
    Resize,
}

/// What the presentation layer must repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Redraw {
    /// Nothing changed.
    #[default]
    None,
    /// Guide lines or labels changed.
    Overlay,
    /// The displayed image itself changed (pixels, selection, or collection).
    Full,
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the status line or a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Update {
    pub redraw: Redraw,
    pub notice: Option<Notice>,
}

impl Update {
    /// Nothing happened.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw(redraw: Redraw) -> Self {
        Self {
            redraw,
            notice: None,
        }
    }

    /// Attach a notice.
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// A rejected input: no repaint, only a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::none().with_notice(Notice::warning(message))
    }

    pub fn is_noop(&self) -> bool {
        self.redraw == Redraw::None && self.notice.is_none()
    }
}
