use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::export;
use crate::panels;
use crate::posterize::{DEFAULT_LEVELS, MAX_LEVELS, MIN_LEVELS};
use crate::progress::STORAGE_KEY;
use crate::session::Session;
use crate::texture::CanvasTexture;
use crate::upload::{self, UploadError};

/// UI settings restored across runs through the eframe storage layer.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    levels: u8,
    reveal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            reveal: false,
        }
    }
}

/// Outcome of the last user-triggered action, shown in the tools panel.
/// Stands in for the original's blocking alert boxes.
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Top-level eframe application: owns the session and the UI glue.
pub struct ColorByNumberApp {
    pub session: Session,
    pub texture: CanvasTexture,
    pub status: Option<Status>,
}

impl ColorByNumberApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut session = Session::new();
        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
        {
            // restored values stay inside the range posterize expects
            session.levels = settings.levels.clamp(MIN_LEVELS, MAX_LEVELS);
            session.reveal = settings.reveal;
        }
        Self {
            session,
            texture: CanvasTexture::new(),
            status: None,
        }
    }

    pub fn upload_via_dialog(&mut self) {
        let Some(path) = upload::pick_image_file() else {
            return;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match upload::decode_path(&path) {
            Ok(buffer) => self.accept_image(buffer, &name),
            Err(err) => self.report_upload_error(err),
        }
    }

    fn accept_image(&mut self, buffer: PixelBuffer, name: &str) {
        self.texture.clear();
        self.session.install_image(buffer);
        self.status = Some(Status::ok(format!("Loaded {name}")));
    }

    fn report_upload_error(&mut self, err: UploadError) {
        log::error!("upload failed: {err}");
        self.status = Some(Status::error(err.to_string()));
    }

    pub fn create_outline(&mut self) {
        match self.session.create_outline() {
            Ok(()) => {
                self.status = Some(Status::ok(format!(
                    "Outline created, {} palette colors",
                    self.session.palette().len()
                )));
            }
            Err(err) => self.status = Some(Status::error(err.to_string())),
        }
    }

    pub fn save_progress(&mut self, frame: &mut eframe::Frame) {
        if !self.session.is_loaded() {
            return;
        }
        let json = match self.session.save_progress() {
            Ok(json) => json,
            Err(err) => {
                log::error!("save failed: {err}");
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };
        match frame.storage_mut() {
            Some(storage) => {
                storage.set_string(STORAGE_KEY, json);
                storage.flush();
                self.status = Some(Status::ok("Progress saved"));
            }
            None => self.status = Some(Status::error("persistence is not available")),
        }
    }

    pub fn load_progress(&mut self, frame: &mut eframe::Frame) {
        if !self.session.is_loaded() {
            return;
        }
        let Some(json) = frame
            .storage()
            .and_then(|storage| storage.get_string(STORAGE_KEY))
        else {
            // nothing saved yet: silent no-op
            return;
        };
        match self.session.load_progress(&json) {
            Ok(()) => self.status = Some(Status::ok("Progress loaded")),
            Err(err) => {
                log::error!("load failed: {err}");
                self.status = Some(Status::error(err.to_string()));
            }
        }
    }

    pub fn export_png(&mut self) {
        if !self.session.is_loaded() {
            return;
        }
        let Some(path) = export::pick_export_path() else {
            return;
        };
        let result = match self.session.display() {
            Some(buffer) => export::export_png(buffer, &path),
            None => return,
        };
        match result {
            Ok(()) => self.status = Some(Status::ok(format!("Exported {}", path.display()))),
            Err(err) => {
                log::error!("export failed: {err}");
                self.status = Some(Status::error(err.to_string()));
            }
        }
    }
}

impl eframe::App for ColorByNumberApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = Settings {
            levels: self.session.levels,
            reveal: self.session.reveal,
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(dropped) = upload::take_dropped_image(ctx) {
            match dropped {
                Ok(buffer) => self.accept_image(buffer, "dropped image"),
                Err(err) => self.report_upload_error(err),
            }
        }

        panels::tools_panel(self, ctx, frame);
        panels::central_panel(self, ctx);
    }
}
