//! Per-image working state.

use std::path::{Path, PathBuf};

use super::cuts::CutList;
use crate::decode::PixelBuffer;
use crate::CutMode;

/// One imported image and everything placed on it.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    source_path: PathBuf,
    display_name: String,
    pixels: PixelBuffer,
    horizontal: CutList,
    vertical: CutList,
    /// Buffer as it was before the vertical pre-crop, for a single undo.
    snapshot: Option<PixelBuffer>,
    /// Bumped whenever `pixels` is replaced.
    revision: u64,
}

impl LoadedImage {
    pub fn new(source_path: impl Into<PathBuf>, display_name: impl Into<String>, pixels: PixelBuffer) -> Self {
        Self {
            source_path: source_path.into(),
            display_name: display_name.into(),
            pixels,
            horizontal: CutList::new(),
            vertical: CutList::new(),
            snapshot: None,
            revision: 0,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cuts(&self, mode: CutMode) -> &CutList {
        match mode {
            CutMode::Horizontal => &self.horizontal,
            CutMode::Vertical => &self.vertical,
        }
    }

    pub(crate) fn cuts_mut(&mut self, mode: CutMode) -> &mut CutList {
        match mode {
            CutMode::Horizontal => &mut self.horizontal,
            CutMode::Vertical => &mut self.vertical,
        }
    }

    /// Orientation lock: the orientation that already has cuts on this image.
    ///
    /// Placement guarantees at most one list is non-empty, so the lock is
    /// `None` exactly when both lists are empty.
    pub fn lock(&self) -> Option<CutMode> {
        if !self.horizontal.is_empty() {
            Some(CutMode::Horizontal)
        } else if !self.vertical.is_empty() {
            Some(CutMode::Vertical)
        } else {
            None
        }
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&PixelBuffer> {
        self.snapshot.as_ref()
    }

    /// Save a copy of the current buffer unless one is already held.
    /// Returns true if a new snapshot was taken.
    pub(crate) fn take_snapshot(&mut self) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        self.snapshot = Some(self.pixels.clone());
        true
    }

    pub(crate) fn discard_snapshot(&mut self) {
        self.snapshot = None;
    }

    /// Move the snapshot back into the working buffer.
    pub(crate) fn restore_snapshot(&mut self) -> bool {
        match self.snapshot.take() {
            Some(original) => {
                self.replace_pixels(original);
                true
            }
            None => false,
        }
    }

    pub(crate) fn replace_pixels(&mut self, pixels: PixelBuffer) {
        self.pixels = pixels;
        self.revision += 1;
    }

    /// Remove every cut from both lists.
    pub(crate) fn clear_cuts(&mut self) {
        self.horizontal.clear();
        self.vertical.clear();
    }
}
