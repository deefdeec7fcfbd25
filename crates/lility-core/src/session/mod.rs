//! Session state of the slicer and the operations that mutate it.
//!
//! A [`Session`] owns the loaded images, the index of the current one and
//! the global cut mode. Every user action is a method returning an
//! [`Update`]: which part of the canvas to repaint and an optional notice.
//! [`Session::handle`] dispatches the pointer/button [`Event`]s; import and
//! export, which need file paths chosen in dialogs, are separate calls.
//!
//! # Cut lifecycle
//!
//! 1. Clicks append percentages to the horizontal or vertical list of the
//!    current image; the first cut locks out the other orientation.
//! 2. The second vertical cut snapshots the buffer and narrows the image to
//!    the span between the two cuts (the pre-crop), releasing the lock.
//! 3. Horizontal cuts are consumed in pairs by the batch export.

mod cuts;
mod event;
mod image;
mod overlay;

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::decode::{decode_file, DecodeError, PixelBuffer};
use crate::naming::sequence_name;
use crate::transform::{crop_to_rect, span_to_pixels, CanvasSize, Letterbox, PixelRect};
use crate::CutMode;

pub use cuts::{clamp_percent, CutList};
pub use event::{Event, Notice, NoticeLevel, Redraw, Update};
pub use image::LoadedImage;
pub use overlay::{GuideLine, Overlay};

/// Outcome of trying to narrow an image to its two vertical cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreCrop {
    /// The list did not hold exactly two cuts.
    Skipped,
    Applied { start: u32, end: u32 },
    /// Both cuts rounded to the same column.
    Degenerate,
}

/// Files added by an import, and the ones that failed to decode.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub added: usize,
    pub failures: Vec<(PathBuf, DecodeError)>,
}

impl ImportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The working set of images and the global slicing mode.
#[derive(Debug, Clone)]
pub struct Session {
    images: Vec<LoadedImage>,
    current: usize,
    cut_mode: CutMode,
    sequence_start: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            current: 0,
            cut_mode: CutMode::Horizontal,
            sequence_start: 1,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn images(&self) -> &[LoadedImage] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&LoadedImage> {
        self.images.get(self.current)
    }

    pub fn cut_mode(&self) -> CutMode {
        self.cut_mode
    }

    /// Start number offered by the next import prompt.
    pub fn sequence_start(&self) -> u32 {
        self.sequence_start
    }

    /// Orientation lock of the current image.
    pub fn active_slice(&self) -> Option<CutMode> {
        self.current_image().and_then(LoadedImage::lock)
    }

    /// Whether the current image has a vertical pre-crop to revert.
    pub fn can_undo(&self) -> bool {
        self.current_image().is_some_and(LoadedImage::has_snapshot)
    }

    /// Whether more than one image is loaded, so navigation does something.
    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }

    /// Title line for the current image: `"5.png (1/3)"`.
    pub fn caption(&self) -> String {
        match self.current_image() {
            Some(img) => format!(
                "{} ({}/{})",
                img.display_name(),
                self.current + 1,
                self.images.len()
            ),
            None => "No image loaded".to_string(),
        }
    }

    /// Guide lines for the current image inside a canvas of the given size.
    pub fn overlay(&self, canvas: CanvasSize) -> Option<Overlay> {
        overlay::build_overlay(self.current_image()?, canvas)
    }

    /// Dashed preview line following the pointer in the current mode.
    pub fn hover_guide(&self, canvas: CanvasSize, x: f64, y: f64) -> Option<GuideLine> {
        self.current_image()?;
        Some(overlay::build_hover_guide(canvas, self.cut_mode, x, y))
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    /// Apply one input event and report what must be redrawn.
    pub fn handle(&mut self, event: Event) -> Update {
        match event {
            Event::Click { canvas, x, y } => self.place_cut(canvas, x, y),
            Event::ToggleCutMode => self.toggle_cut_mode(),
            Event::NextImage => self.next_image(),
            Event::PreviousImage => self.previous_image(),
            Event::ClearSlices => self.clear_slices(),
            Event::UndoVerticalCrop => self.undo_vertical_crop(),
            Event::ClearAll { confirmed } => self.clear_all(confirmed),
            Event::Resize if self.is_empty() => Update::none(),
            Event::Resize => Update::redraw(Redraw::Full),
        }
    }

    // ------------------------------------------------------------------
    // Import
    // ------------------------------------------------------------------

    /// Decode `paths` from disk and append them, numbering from `start`.
    pub fn import_files<P: AsRef<Path>>(&mut self, paths: &[P], start: u32) -> ImportReport {
        self.import_with(paths, start, |path| decode_file(path))
    }

    /// Append images produced by `decode`, numbering from `start`.
    ///
    /// Each path consumes one sequence number in selection order, including
    /// paths that fail to decode. Failures are collected, not fatal.
    pub fn import_with<P, F>(&mut self, paths: &[P], start: u32, mut decode: F) -> ImportReport
    where
        P: AsRef<Path>,
        F: FnMut(&Path) -> Result<PixelBuffer, DecodeError>,
    {
        let start = start.max(1);
        self.sequence_start = start;

        let mut report = ImportReport::default();
        for (sequence, path) in (start..).zip(paths) {
            let path = path.as_ref();
            match decode(path) {
                Ok(pixels) => {
                    let name = sequence_name(sequence, path);
                    debug!("Imported {} as {}", path.display(), name);
                    self.images.push(LoadedImage::new(path, name, pixels));
                    report.added += 1;
                }
                Err(e) => {
                    warn!("Could not load {}: {}", path.display(), e);
                    report.failures.push((path.to_path_buf(), e));
                }
            }
        }

        if !self.images.is_empty() {
            self.current = 0;
        }
        info!(
            "Import finished: {} added, {} failed, {} loaded",
            report.added,
            report.failures.len(),
            self.images.len()
        );
        report
    }

    // ------------------------------------------------------------------
    // Cut placement
    // ------------------------------------------------------------------

    pub fn toggle_cut_mode(&mut self) -> Update {
        self.cut_mode = self.cut_mode.toggled();
        Update::redraw(Redraw::Overlay)
            .with_notice(Notice::info(format!("{} cut mode", self.cut_mode)))
    }

    pub fn set_cut_mode(&mut self, mode: CutMode) {
        self.cut_mode = mode;
    }

    /// Place a cut where the pointer clicked on a canvas of size `canvas`.
    ///
    /// Rejected with a warning while the other orientation holds the lock.
    /// Positions in the letterbox margin are clamped to the image edge.
    pub fn place_cut(&mut self, canvas: CanvasSize, x: f64, y: f64) -> Update {
        let mode = self.cut_mode;
        let Some(image) = self.images.get_mut(self.current) else {
            return Update::none();
        };

        if let Some(locked) = image.lock() {
            if locked != mode {
                return Update::warning(format!(
                    "Finish the {} cuts first",
                    locked.to_string().to_lowercase()
                ));
            }
        }

        let Some(lb) = Letterbox::fit(canvas, image.width(), image.height()) else {
            return Update::none();
        };
        let Some(percent) = clamp_percent(lb.pointer_to_percent(mode, x, y)) else {
            return Update::none();
        };

        image.cuts_mut(mode).insert(percent);
        debug!(
            "{} cut at {:.2}% on {} ({} placed)",
            mode,
            percent,
            image.display_name(),
            image.cuts(mode).len()
        );

        if mode == CutMode::Vertical && image.cuts(mode).len() == 2 {
            let fresh_snapshot = image.take_snapshot();
            let outcome = pre_crop(image);
            if fresh_snapshot && outcome == PreCrop::Degenerate {
                image.discard_snapshot();
            }
            return Self::pre_crop_update(image, outcome);
        }

        Update::redraw(Redraw::Overlay)
    }

    // ------------------------------------------------------------------
    // Vertical pre-crop
    // ------------------------------------------------------------------

    /// Narrow the current image to the span between its two vertical cuts.
    ///
    /// No-op unless exactly two vertical cuts are placed. Cut placement
    /// calls this automatically; it does not take a snapshot by itself.
    pub fn vertical_pre_crop(&mut self) -> Update {
        match self.images.get_mut(self.current) {
            Some(image) => {
                let outcome = pre_crop(image);
                Self::pre_crop_update(image, outcome)
            }
            None => Update::none(),
        }
    }

    fn pre_crop_update(image: &LoadedImage, outcome: PreCrop) -> Update {
        match outcome {
            PreCrop::Skipped => Update::none(),
            PreCrop::Applied { start, end } => {
                info!(
                    "Vertical crop on {}: columns {}..{}",
                    image.display_name(),
                    start,
                    end
                );
                Update::redraw(Redraw::Full).with_notice(Notice::info(format!(
                    "Vertical crop applied ({} px wide)",
                    end - start
                )))
            }
            PreCrop::Degenerate => {
                Update::redraw(Redraw::Overlay).with_notice(Notice::warning(
                    "Vertical cuts are on the same column; nothing was cropped",
                ))
            }
        }
    }

    /// Restore the buffer saved before the vertical pre-crop.
    pub fn undo_vertical_crop(&mut self) -> Update {
        let Some(image) = self.images.get_mut(self.current) else {
            return Update::none();
        };
        if !image.restore_snapshot() {
            return Update::none();
        }
        image.cuts_mut(CutMode::Vertical).clear();
        info!("Vertical crop undone on {}", image.display_name());
        Update::redraw(Redraw::Full).with_notice(Notice::info("Vertical crop undone"))
    }

    // ------------------------------------------------------------------
    // Navigation and clearing
    // ------------------------------------------------------------------

    pub fn next_image(&mut self) -> Update {
        if self.images.is_empty() {
            return Update::none();
        }
        self.current = (self.current + 1) % self.images.len();
        Update::redraw(Redraw::Full)
    }

    pub fn previous_image(&mut self) -> Update {
        if self.images.is_empty() {
            return Update::none();
        }
        self.current = (self.current + self.images.len() - 1) % self.images.len();
        Update::redraw(Redraw::Full)
    }

    /// Remove both cut lists of the current image. The snapshot is kept.
    pub fn clear_slices(&mut self) -> Update {
        match self.images.get_mut(self.current) {
            Some(image) => {
                image.clear_cuts();
                Update::redraw(Redraw::Overlay).with_notice(Notice::info("Cuts cleared"))
            }
            None => Update::none(),
        }
    }

    /// Drop every image (and with them every snapshot) once confirmed.
    pub fn clear_all(&mut self, confirmed: bool) -> Update {
        if !confirmed || self.images.is_empty() {
            return Update::none();
        }
        let count = self.images.len();
        self.images.clear();
        self.current = 0;
        info!("Cleared {} images", count);
        Update::redraw(Redraw::Full).with_notice(Notice::info("All images removed"))
    }

    /// Clear every image's horizontal cuts, releasing the locks they held.
    pub(crate) fn consume_horizontal_cuts(&mut self) {
        for image in &mut self.images {
            image.cuts_mut(CutMode::Horizontal).clear();
        }
    }
}

/// Crop `image` to its two vertical cuts and clear them.
fn pre_crop(image: &mut LoadedImage) -> PreCrop {
    let Some((start_pct, end_pct)) = image.cuts(CutMode::Vertical).as_span() else {
        return PreCrop::Skipped;
    };

    let (start, end) = span_to_pixels(start_pct, end_pct, image.width());
    image.cuts_mut(CutMode::Vertical).clear();

    if start == end {
        return PreCrop::Degenerate;
    }

    let rect = PixelRect::columns(image.pixels(), start, end);
    let cropped = crop_to_rect(image.pixels(), rect);
    image.replace_pixels(cropped);
    PreCrop::Applied { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::CHANNELS;

    /// Buffer where the red channel encodes the column and green the row.
    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 0, 255]);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    /// Session holding one `width`x`height` image.
    fn session_with(width: u32, height: u32) -> Session {
        let mut session = Session::new();
        let paths = ["scan.png"];
        session.import_with(&paths, 1, |_| Ok(gradient(width, height)));
        session
    }

    /// Canvas the same size as the image: scale 1, no letterbox.
    fn canvas_for(session: &Session) -> CanvasSize {
        let img = session.current_image().unwrap();
        CanvasSize::new(img.width() as f64, img.height() as f64)
    }

    fn click(session: &mut Session, canvas: CanvasSize, x: f64, y: f64) -> Update {
        session.handle(Event::Click { canvas, x, y })
    }

    fn cuts(session: &Session, mode: CutMode) -> Vec<f64> {
        session.current_image().unwrap().cuts(mode).as_slice().to_vec()
    }

    #[test]
    fn test_horizontal_cuts_are_sorted() {
        let mut session = session_with(100, 200);
        let canvas = canvas_for(&session);

        for y in [150.0, 20.0, 100.0] {
            let update = click(&mut session, canvas, 50.0, y);
            assert_eq!(update.redraw, Redraw::Overlay);
        }

        assert_eq!(cuts(&session, CutMode::Horizontal), vec![10.0, 50.0, 75.0]);
        assert_eq!(session.active_slice(), Some(CutMode::Horizontal));
    }

    #[test]
    fn test_click_without_images_is_noop() {
        let mut session = Session::new();
        let update = click(&mut session, CanvasSize::new(100.0, 100.0), 5.0, 5.0);
        assert!(update.is_noop());
    }

    #[test]
    fn test_margin_click_is_clamped() {
        let mut session = session_with(100, 100);
        // 100x100 image in a 100x300 canvas: image spans y 100..200
        let canvas = CanvasSize::new(100.0, 300.0);

        click(&mut session, canvas, 50.0, 10.0);
        click(&mut session, canvas, 50.0, 290.0);

        assert_eq!(cuts(&session, CutMode::Horizontal), vec![0.0, 100.0]);
    }

    #[test]
    fn test_orientation_lock_rejects_vertical_cut() {
        let mut session = session_with(100, 100);
        let canvas = canvas_for(&session);
        click(&mut session, canvas, 10.0, 40.0);

        session.handle(Event::ToggleCutMode);
        let update = click(&mut session, canvas, 30.0, 30.0);

        let notice = update.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Finish the horizontal cuts first");
        assert_eq!(update.redraw, Redraw::None);
        assert!(cuts(&session, CutMode::Vertical).is_empty());
        assert_eq!(cuts(&session, CutMode::Horizontal), vec![40.0]);
    }

    #[test]
    fn test_orientation_lock_rejects_horizontal_cut() {
        let mut session = session_with(100, 100);
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 25.0, 0.0);

        session.set_cut_mode(CutMode::Horizontal);
        let update = click(&mut session, canvas, 0.0, 60.0);

        assert_eq!(
            update.notice.unwrap().message,
            "Finish the vertical cuts first"
        );
        assert!(cuts(&session, CutMode::Horizontal).is_empty());
        assert_eq!(cuts(&session, CutMode::Vertical), vec![25.0]);
    }

    #[test]
    fn test_second_vertical_cut_pre_crops() {
        let mut session = session_with(100, 10);
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);

        click(&mut session, canvas, 70.0, 5.0);
        assert!(!session.can_undo());
        let update = click(&mut session, canvas, 20.0, 5.0);

        assert_eq!(update.redraw, Redraw::Full);
        let img = session.current_image().unwrap();
        assert_eq!(img.pixels().dimensions(), (50, 10));
        // First column of the crop is source column 20
        assert_eq!(img.pixels().pixels[0], 20);
        assert!(img.cuts(CutMode::Vertical).is_empty());
        assert_eq!(session.active_slice(), None);
        assert!(session.can_undo());
        assert_eq!(img.snapshot().unwrap().dimensions(), (100, 10));
    }

    #[test]
    fn test_horizontal_cuts_allowed_after_pre_crop() {
        let mut session = session_with(100, 10);
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 10.0, 5.0);
        click(&mut session, canvas, 60.0, 5.0);

        session.set_cut_mode(CutMode::Horizontal);
        let update = click(&mut session, canvas, 5.0, 5.0);

        assert!(update.notice.is_none());
        assert_eq!(cuts(&session, CutMode::Horizontal).len(), 1);
    }

    #[test]
    fn test_undo_restores_buffer_exactly() {
        let mut session = session_with(64, 8);
        let original = session.current_image().unwrap().pixels().clone();
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 8.0, 1.0);
        click(&mut session, canvas, 40.0, 1.0);
        assert_ne!(session.current_image().unwrap().pixels(), &original);

        let update = session.handle(Event::UndoVerticalCrop);

        assert_eq!(update.redraw, Redraw::Full);
        let img = session.current_image().unwrap();
        assert_eq!(img.pixels(), &original);
        assert!(!img.has_snapshot());
        assert!(!session.can_undo());
        assert_eq!(session.active_slice(), None);
    }

    #[test]
    fn test_undo_without_snapshot_is_noop() {
        let mut session = session_with(10, 10);
        assert!(session.undo_vertical_crop().is_noop());
        assert!(Session::new().undo_vertical_crop().is_noop());
    }

    #[test]
    fn test_undo_after_two_pre_crops_restores_first_buffer() {
        let mut session = session_with(100, 4);
        let original = session.current_image().unwrap().pixels().clone();
        session.set_cut_mode(CutMode::Vertical);

        let canvas = canvas_for(&session);
        click(&mut session, canvas, 10.0, 1.0);
        click(&mut session, canvas, 90.0, 1.0);
        let canvas = canvas_for(&session);
        click(&mut session, canvas, 20.0, 1.0);
        click(&mut session, canvas, 60.0, 1.0);
        assert_eq!(session.current_image().unwrap().width(), 40);

        session.undo_vertical_crop();
        assert_eq!(session.current_image().unwrap().pixels(), &original);
    }

    #[test]
    fn test_degenerate_vertical_span_leaves_image_alone() {
        let mut session = session_with(100, 10);
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);

        click(&mut session, canvas, 30.0, 1.0);
        let update = click(&mut session, canvas, 30.2, 1.0);

        assert_eq!(update.notice.unwrap().level, NoticeLevel::Warning);
        let img = session.current_image().unwrap();
        assert_eq!(img.width(), 100);
        assert!(img.cuts(CutMode::Vertical).is_empty());
        assert!(!img.has_snapshot());
        assert_eq!(session.active_slice(), None);
    }

    #[test]
    fn test_vertical_pre_crop_requires_two_cuts() {
        let mut session = session_with(100, 10);
        assert!(session.vertical_pre_crop().is_noop());

        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 30.0, 1.0);
        assert!(session.vertical_pre_crop().is_noop());
        assert_eq!(session.current_image().unwrap().width(), 100);
    }

    #[test]
    fn test_clear_slices_keeps_snapshot() {
        let mut session = session_with(100, 10);
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 10.0, 1.0);
        click(&mut session, canvas, 50.0, 1.0);
        session.set_cut_mode(CutMode::Horizontal);
        click(&mut session, canvas, 1.0, 3.0);

        let update = session.handle(Event::ClearSlices);

        assert_eq!(update.redraw, Redraw::Overlay);
        assert_eq!(session.active_slice(), None);
        assert!(session.can_undo());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut session = Session::new();
        let paths = ["a.png", "b.png", "c.png"];
        session.import_with(&paths, 1, |_| Ok(gradient(2, 2)));

        session.handle(Event::PreviousImage);
        assert_eq!(session.current_index(), 2);
        session.handle(Event::NextImage);
        assert_eq!(session.current_index(), 0);
        session.handle(Event::NextImage);
        assert_eq!(session.caption(), "2.png (2/3)");
    }

    #[test]
    fn test_navigation_without_images_is_noop() {
        let mut session = Session::new();
        assert!(session.next_image().is_noop());
        assert!(session.previous_image().is_noop());
        assert_eq!(session.caption(), "No image loaded");
    }

    #[test]
    fn test_lock_is_per_image() {
        let mut session = Session::new();
        let paths = ["a.png", "b.png"];
        session.import_with(&paths, 1, |_| Ok(gradient(10, 10)));
        let canvas = CanvasSize::new(10.0, 10.0);
        click(&mut session, canvas, 5.0, 5.0);

        session.next_image();
        session.set_cut_mode(CutMode::Vertical);
        let update = click(&mut session, canvas, 5.0, 5.0);

        assert!(update.notice.is_none());
        assert_eq!(session.active_slice(), Some(CutMode::Vertical));
    }

    #[test]
    fn test_import_renames_in_selection_order() {
        let mut session = Session::new();
        let paths = ["/in/b.JPG", "/in/a.png", "/in/c.bmp"];

        let report = session.import_with(&paths, 5, |_| Ok(gradient(3, 3)));

        assert_eq!(report.added, 3);
        assert!(report.is_complete());
        let names: Vec<_> = session.images().iter().map(|i| i.display_name()).collect();
        assert_eq!(names, vec!["5.jpg", "6.png", "7.bmp"]);
        assert_eq!(session.sequence_start(), 5);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_import_failure_is_reported_and_skipped() {
        let mut session = Session::new();
        let paths = ["good1.png", "broken.png", "good2.png"];

        let report = session.import_with(&paths, 1, |path| {
            if path == Path::new("broken.png") {
                Err(DecodeError::CorruptedFile("bad header".to_string()))
            } else {
                Ok(gradient(2, 2))
            }
        });

        assert_eq!(report.added, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, PathBuf::from("broken.png"));
        let names: Vec<_> = session.images().iter().map(|i| i.display_name()).collect();
        assert_eq!(names, vec!["1.png", "3.png"]);
    }

    #[test]
    fn test_import_start_is_at_least_one() {
        let mut session = Session::new();
        session.import_with(&["x.png"], 0, |_| Ok(gradient(1, 1)));
        assert_eq!(session.images()[0].display_name(), "1.png");
    }

    #[test]
    fn test_import_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("Photo.PNG");
        crate::encode::encode_file(&gradient(4, 2), &good).unwrap();
        let missing = dir.path().join("missing.png");

        let mut session = Session::new();
        let report = session.import_files(&[good.clone(), missing], 9);

        assert_eq!(report.added, 1);
        assert_eq!(report.failures.len(), 1);
        let img = session.current_image().unwrap();
        assert_eq!(img.display_name(), "9.png");
        assert_eq!(img.source_path(), good.as_path());
        assert_eq!(img.pixels(), &gradient(4, 2));
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut session = session_with(10, 10);
        assert!(session.handle(Event::ClearAll { confirmed: false }).is_noop());
        assert_eq!(session.image_count(), 1);
    }

    #[test]
    fn test_clear_all_discards_everything() {
        let mut session = Session::new();
        let paths = ["a.png", "b.png", "c.png"];
        session.import_with(&paths, 1, |_| Ok(gradient(20, 4)));
        session.next_image();
        session.next_image();
        let canvas = canvas_for(&session);
        session.set_cut_mode(CutMode::Vertical);
        click(&mut session, canvas, 2.0, 1.0);
        click(&mut session, canvas, 12.0, 1.0);
        assert!(session.can_undo());

        let update = session.handle(Event::ClearAll { confirmed: true });

        assert_eq!(update.redraw, Redraw::Full);
        assert_eq!(session.image_count(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(!session.can_undo());
        assert!(session.images().iter().all(|i| !i.has_snapshot()));
    }

    #[test]
    fn test_overlay_and_hover_follow_current_image() {
        let mut session = session_with(100, 100);
        let canvas = canvas_for(&session);
        click(&mut session, canvas, 0.0, 25.0);

        let overlay = session.overlay(canvas).unwrap();
        assert_eq!(overlay.guides.len(), 1);
        assert_eq!(overlay.guides[0].label, "H1");

        let hover = session.hover_guide(canvas, 40.0, 60.0).unwrap();
        assert_eq!(hover.from, (0.0, 60.0));
        assert!(Session::new().hover_guide(canvas, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_resize_requests_full_redraw() {
        assert!(Session::new().handle(Event::Resize).is_noop());
        let mut session = session_with(4, 4);
        assert_eq!(session.handle(Event::Resize).redraw, Redraw::Full);
    }

    #[test]
    fn test_toggle_cut_mode_reports_mode() {
        let mut session = Session::new();
        let update = session.handle(Event::ToggleCutMode);
        assert_eq!(session.cut_mode(), CutMode::Vertical);
        assert_eq!(update.notice.unwrap().message, "Vertical cut mode");
    }
}
