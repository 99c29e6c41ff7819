use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Default name offered in the save dialog.
pub const EXPORT_FILENAME: &str = "color-by-number.png";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write PNG: {0}")]
    Write(#[from] image::ImageError),
}

/// Writes the visible pixels to `path` as a PNG. Pure export: no app state
/// changes.
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    image::save_buffer(
        path,
        buffer.as_rgba_bytes(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    log::info!("exported {}x{} PNG to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}

/// Opens the native save dialog, pre-filled with [`EXPORT_FILENAME`].
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name(EXPORT_FILENAME)
        .save_file()
}
