#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod color;
pub mod export;
pub mod palette;
pub mod panels;
pub mod posterize;
pub mod progress;
pub mod session;
pub mod texture;
pub mod upload;

pub use app::ColorByNumberApp;
pub use buffer::PixelBuffer;
pub use color::Rgb;
pub use palette::{extract_palette, PALETTE_CAP};
pub use posterize::{posterize, DEFAULT_LEVELS, MAX_LEVELS, MIN_LEVELS};
pub use progress::{PaintEvent, ProgressError, ProgressLog, STORAGE_KEY};
pub use session::{ClickOutcome, Session, SessionError};
