//! Validation errors for batch operations.
//!
//! These abort an action before any state is mutated or any file is
//! written. Per-item failures inside a batch are not errors of this kind;
//! they are collected in the batch reports instead.

use thiserror::Error;

/// A batch action was refused because its preconditions do not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Nothing has been imported yet.
    #[error("No images loaded")]
    NoImages,

    /// No image carries a non-empty, even number of horizontal cuts.
    #[error("Add horizontal cuts in pairs before slicing")]
    NoPairedCuts,
}
