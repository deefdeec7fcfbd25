//! Image encoding for Lility.
//!
//! Crops and whole images are written back in the format named by the
//! output file's extension (PNG, JPEG, BMP or GIF).

mod file;

pub use file::{encode_file, encode_to_vec, format_for_path, EncodeError};
