use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors on the upload path, from file read through decode.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("dropped file has no readable contents")]
    EmptyDrop,
}

/// Decodes any format the image crate understands into an RGBA buffer.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, UploadError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("decoded image: {width}x{height}");
    Ok(PixelBuffer::new(width, height, rgba.into_raw()))
}

pub fn decode_path(path: &Path) -> Result<PixelBuffer, UploadError> {
    let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    decode_bytes(&bytes)
}

/// Opens the native file picker for an image to upload.
pub fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
        .pick_file()
}

/// Takes the first file dropped onto the window this frame, if any, and
/// tries to decode it. Files dropped from memory (no path) are supported.
pub fn take_dropped_image(ctx: &egui::Context) -> Option<Result<PixelBuffer, UploadError>> {
    let file = ctx
        .input(|i| i.raw.dropped_files.first().cloned())?;
    Some(if let Some(bytes) = &file.bytes {
        decode_bytes(bytes)
    } else if let Some(path) = &file.path {
        decode_path(path)
    } else {
        log::warn!("dropped file {:?} has no bytes and no path", file.name);
        Err(UploadError::EmptyDrop)
    })
}
