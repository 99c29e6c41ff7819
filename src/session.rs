use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::{extract_palette, PALETTE_CAP};
use crate::posterize::{posterize, DEFAULT_LEVELS};
use crate::progress::{PaintEvent, ProgressError, ProgressLog};

/// Errors reported back to the user from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no image loaded, upload one first")]
    NoImage,
}

/// The three buffers belonging to one loaded picture.
#[derive(Debug, Clone)]
struct LoadedCanvas {
    /// Decoded pixels, never written after upload. Reveal mode reads from
    /// here.
    original: PixelBuffer,
    /// The posterized base. Progress keys come from this buffer and redraw
    /// resets the display to it.
    outline: PixelBuffer,
    /// What the user sees. Clicks change single pixels here.
    display: PixelBuffer,
    /// Set whenever `display` changed and the texture needs a re-upload.
    dirty: bool,
}

/// Whether an image has been uploaded yet. Nothing but upload is meaningful
/// while `Empty`, and no code path can touch pixels before decode completed.
#[derive(Debug, Clone, Default)]
enum Canvas {
    #[default]
    Empty,
    Loaded(LoadedCanvas),
}

/// What a canvas click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The pixel now shows the selected palette color.
    Painted(Rgb),
    /// Reveal mode put the original image's color back.
    Revealed(Rgb),
    /// Paint mode with no palette selection; nothing happened.
    NoSelection,
    /// The click landed outside the image (or no image is loaded).
    OutOfBounds,
}

/// All mutable application state, owned by the top-level app and handed to
/// the panels. There are no globals; every handler goes through here.
pub struct Session {
    canvas: Canvas,
    /// Posterization level count, kept in the UI-enforced 2..=32 range.
    pub levels: u8,
    /// When set, clicks restore the original image instead of painting.
    pub reveal: bool,
    selected: Option<Rgb>,
    palette: Vec<Rgb>,
    progress: ProgressLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::Empty,
            levels: DEFAULT_LEVELS,
            reveal: false,
            selected: None,
            palette: Vec::new(),
            progress: ProgressLog::new(),
        }
    }

    /// Installs a freshly decoded image, discarding the previous picture,
    /// its progress and the color selection.
    pub fn install_image(&mut self, decoded: PixelBuffer) {
        log::info!(
            "installing image: {}x{}",
            decoded.width(),
            decoded.height()
        );
        let outline = decoded.clone();
        let display = decoded.clone();
        self.canvas = Canvas::Loaded(LoadedCanvas {
            original: decoded,
            outline,
            display,
            dirty: true,
        });
        self.selected = None;
        self.palette.clear();
        self.progress.clear();
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.canvas, Canvas::Loaded(_))
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match &self.canvas {
            Canvas::Empty => None,
            Canvas::Loaded(canvas) => Some((canvas.display.width(), canvas.display.height())),
        }
    }

    /// The visible pixels, once an image is loaded.
    pub fn display(&self) -> Option<&PixelBuffer> {
        match &self.canvas {
            Canvas::Empty => None,
            Canvas::Loaded(canvas) => Some(&canvas.display),
        }
    }

    /// True once per display change; the caller re-uploads the texture.
    pub fn take_dirty(&mut self) -> bool {
        match &mut self.canvas {
            Canvas::Empty => false,
            Canvas::Loaded(canvas) => std::mem::take(&mut canvas.dirty),
        }
    }

    /// Rebuilds the outline: snapshots the original, posterizes it at the
    /// current level count and re-extracts the palette. The display resets
    /// to the fresh outline; recorded progress stays and can be replayed
    /// with [`Session::redraw`].
    pub fn create_outline(&mut self) -> Result<(), SessionError> {
        let Canvas::Loaded(canvas) = &mut self.canvas else {
            return Err(SessionError::NoImage);
        };
        let mut outline = canvas.original.clone();
        posterize(&mut outline, self.levels);
        self.palette = extract_palette(&outline, PALETTE_CAP);
        canvas.display = outline.clone();
        canvas.outline = outline;
        canvas.dirty = true;
        log::info!(
            "outline created with {} levels, {} palette colors",
            self.levels,
            self.palette.len()
        );
        Ok(())
    }

    /// Palette of the current outline, first-seen order, display-capped.
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn select_color(&mut self, color: Rgb) {
        self.selected = Some(color);
    }

    pub fn selected(&self) -> Option<Rgb> {
        self.selected
    }

    pub fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    /// Applies a click at buffer coordinates (x, y).
    ///
    /// The progress key is always the outline's color at the pixel, which a
    /// click never changes; only the display buffer is written.
    pub fn click(&mut self, x: u32, y: u32) -> ClickOutcome {
        let Canvas::Loaded(canvas) = &mut self.canvas else {
            return ClickOutcome::OutOfBounds;
        };
        let (Some(target), Some(original)) =
            (canvas.outline.rgb_at(x, y), canvas.original.rgb_at(x, y))
        else {
            return ClickOutcome::OutOfBounds;
        };

        if self.reveal {
            canvas.display.set_rgb(x, y, original);
            canvas.dirty = true;
            self.progress.record(target, PaintEvent::new(x, y, original));
            ClickOutcome::Revealed(original)
        } else {
            let Some(chosen) = self.selected else {
                return ClickOutcome::NoSelection;
            };
            canvas.display.set_rgb(x, y, chosen);
            canvas.dirty = true;
            self.progress.record(target, PaintEvent::new(x, y, chosen));
            ClickOutcome::Painted(chosen)
        }
    }

    /// Resets the display to the outline and replays every recorded event,
    /// per color then per insertion.
    pub fn redraw(&mut self) {
        let Canvas::Loaded(canvas) = &mut self.canvas else {
            return;
        };
        canvas.display = canvas.outline.clone();
        for (_, events) in self.progress.iter() {
            for event in events {
                if !canvas.display.set_rgb(event.x, event.y, event.color) {
                    log::warn!(
                        "recorded paint at ({}, {}) is outside the {}x{} image, skipping",
                        event.x,
                        event.y,
                        canvas.display.width(),
                        canvas.display.height()
                    );
                }
            }
        }
        canvas.dirty = true;
    }

    /// Serializes the progress log for the host key-value store.
    pub fn save_progress(&self) -> Result<String, ProgressError> {
        self.progress.to_json()
    }

    /// Replaces the progress log wholesale with a persisted one and redraws.
    /// On a parse error nothing changes.
    pub fn load_progress(&mut self, json: &str) -> Result<(), ProgressError> {
        let loaded = ProgressLog::from_json(json)?;
        log::info!("loaded progress with {} events", loaded.event_count());
        self.progress = loaded;
        self.redraw();
        Ok(())
    }
}
