//! Output and display file names.
//!
//! Imported files are renamed to `{sequence}{ext}`; horizontal slices are
//! written as `{stem}_corte_{n}{ext}`.

use std::path::Path;

/// Infix between the display stem and the slice number.
pub const SLICE_INFIX: &str = "_corte_";

/// Display name for an imported file: the sequence number plus the source
/// file's extension, lowercased (`Photo.JPG` with sequence 5 → `5.jpg`).
pub fn sequence_name(sequence: u32, source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{}.{}", sequence, ext.to_string_lossy().to_lowercase()),
        None => sequence.to_string(),
    }
}

/// Split a display name into its stem and extension (dot included).
///
/// `"5.png"` → `("5", ".png")`; a name without an extension yields an
/// empty extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}

/// File name for the `index`-th (1-based) horizontal slice of an image.
pub fn slice_file_name(display_name: &str, index: usize) -> String {
    let (stem, ext) = split_name(display_name);
    format!("{}{}{}{}", stem, SLICE_INFIX, index, ext)
}
