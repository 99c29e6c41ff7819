use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::buffer::PixelBuffer;

/// Owns the GPU texture mirroring the display buffer.
///
/// Pixels are uploaded with nearest filtering so individual pixels stay
/// crisp when the canvas is zoomed in.
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
}

impl Default for CanvasTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Drops the texture, e.g. when a new image replaces the old one.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    /// Returns the texture for `buffer`, re-uploading the pixels when
    /// `dirty` is set or no texture exists yet. The handle is cheap to
    /// clone; it shares the underlying texture.
    pub fn sync(&mut self, ctx: &Context, buffer: &PixelBuffer, dirty: bool) -> TextureHandle {
        match &mut self.handle {
            Some(handle) => {
                if dirty {
                    handle.set(color_image(buffer), TextureOptions::NEAREST);
                }
                handle.clone()
            }
            None => {
                let handle = ctx.load_texture("canvas", color_image(buffer), TextureOptions::NEAREST);
                self.handle = Some(handle.clone());
                handle
            }
        }
    }
}

fn color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [buffer.width() as usize, buffer.height() as usize],
        buffer.as_rgba_bytes(),
    )
}
