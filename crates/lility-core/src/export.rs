//! Batch writers: horizontal slices and whole-image saves.
//!
//! Planning is pure and validated up front; writing continues past
//! per-file failures, which are collected in an [`ExportReport`].

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::encode::{encode_file, EncodeError};
use crate::error::SliceError;
use crate::naming::slice_file_name;
use crate::session::Session;
use crate::transform::{crop_to_rect, span_to_pixels, PixelRect};
use crate::CutMode;

/// Why a single output file was not written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Both cuts of a pair rounded to the same row.
    #[error("slice {file_name} has no rows (cuts at row {row})")]
    EmptySlice { file_name: String, row: u32 },
}

/// One horizontal band to crop out of an image and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceJob {
    /// Index into [`Session::images`].
    pub image_index: usize,
    pub rect: PixelRect,
    pub file_name: String,
}

/// Files written by a batch, and the ones that failed.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, ExportError)>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("Saved {} files", self.written.len())
        } else {
            format!(
                "Saved {} files, {} failed",
                self.written.len(),
                self.failures.len()
            )
        }
    }

    fn record(&mut self, path: PathBuf, result: Result<(), ExportError>) {
        match result {
            Ok(()) => self.written.push(path),
            Err(e) => {
                warn!("Could not write {}: {}", path.display(), e);
                self.failures.push((path, e));
            }
        }
    }
}

/// Turn every image's paired horizontal cuts into crop jobs.
///
/// Images whose list is empty or of odd length are skipped. Fails when no
/// image is loaded or none has a usable list.
pub fn plan_horizontal_slices(session: &Session) -> Result<Vec<SliceJob>, SliceError> {
    if session.is_empty() {
        return Err(SliceError::NoImages);
    }

    let mut jobs = Vec::new();
    for (image_index, image) in session.images().iter().enumerate() {
        let cuts = image.cuts(CutMode::Horizontal);
        if !cuts.is_paired() {
            continue;
        }
        for (k, (start_pct, end_pct)) in cuts.pairs().enumerate() {
            let (start, end) = span_to_pixels(start_pct, end_pct, image.height());
            jobs.push(SliceJob {
                image_index,
                rect: PixelRect::rows(image.pixels(), start, end),
                file_name: slice_file_name(image.display_name(), k + 1),
            });
        }
    }

    if jobs.is_empty() {
        return Err(SliceError::NoPairedCuts);
    }
    Ok(jobs)
}

/// Crop and write every planned slice into `dir`, then clear the
/// horizontal cuts of every image.
pub fn export_horizontal_slices(
    session: &mut Session,
    dir: &Path,
) -> Result<ExportReport, SliceError> {
    let jobs = plan_horizontal_slices(session)?;

    let mut report = ExportReport::default();
    for job in &jobs {
        let path = dir.join(&job.file_name);
        let image = &session.images()[job.image_index];
        let result = if job.rect.is_empty() {
            Err(ExportError::EmptySlice {
                file_name: job.file_name.clone(),
                row: job.rect.top,
            })
        } else {
            let slice = crop_to_rect(image.pixels(), job.rect);
            encode_file(&slice, &path).map_err(ExportError::from)
        };
        report.record(path, result);
    }

    session.consume_horizontal_cuts();
    info!(
        "Slice export to {}: {} written, {} failed",
        dir.display(),
        report.written.len(),
        report.failures.len()
    );
    Ok(report)
}

/// Write every loaded image's current buffer to `dir/{display_name}`.
pub fn save_whole_images(session: &Session, dir: &Path) -> Result<ExportReport, SliceError> {
    if session.is_empty() {
        return Err(SliceError::NoImages);
    }

    let mut report = ExportReport::default();
    for image in session.images() {
        let path = dir.join(image.display_name());
        let result = encode_file(image.pixels(), &path).map_err(ExportError::from);
        report.record(path, result);
    }

    info!(
        "Saved images to {}: {} written, {} failed",
        dir.display(),
        report.written.len(),
        report.failures.len()
    );
    Ok(report)
}
