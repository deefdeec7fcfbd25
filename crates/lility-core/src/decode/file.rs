//! File decoding with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, Orientation, PixelBuffer};

/// Read and decode an image file into an RGBA buffer.
///
/// The format is sniffed from the file contents, not the extension, so a
/// mislabelled `.jpg` that is really a PNG still loads.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, and the errors of
/// [`decode_bytes`] otherwise.
pub fn decode_file(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes)
}

/// Decode encoded image bytes into an RGBA buffer, applying EXIF orientation.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized,
/// `DecodeError::CorruptedFile` if decoding fails part-way, and
/// `DecodeError::Empty` if the image has a zero dimension.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat(
            "unrecognized file signature".to_string(),
        ));
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(e) => DecodeError::InvalidFormat(e.to_string()),
        e => DecodeError::CorruptedFile(e.to_string()),
    })?;

    let rgba = apply_orientation(img, orientation).into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty { width, height });
    }

    Ok(PixelBuffer::from_rgba_image(rgba))
}

/// EXIF orientation of encoded bytes; `Normal` when there is no EXIF data.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
