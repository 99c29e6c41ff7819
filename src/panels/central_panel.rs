use crate::app::ColorByNumberApp;

pub fn central_panel(app: &mut ColorByNumberApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some((width, height)) = app.session.dimensions() else {
            ui.centered_and_justified(|ui| {
                ui.label("Upload an image to start.");
            });
            return;
        };

        let dirty = app.session.take_dirty();
        let texture = match app.session.display() {
            Some(buffer) => app.texture.sync(ctx, buffer, dirty),
            None => return,
        };

        let scale = fit_scale(ui.available_size(), width, height);
        let size = egui::vec2(width as f32 * scale, height as f32 * scale);
        let response = ui.add(
            egui::Image::new((texture.id(), size)).sense(egui::Sense::click()),
        );

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                // Viewport position -> buffer pixel: subtract the image
                // origin, undo the zoom, floor.
                let local = (pos - response.rect.min) / scale;
                if local.x >= 0.0 && local.y >= 0.0 {
                    let outcome = app.session.click(local.x as u32, local.y as u32);
                    log::debug!(
                        "click at ({}, {}) -> {outcome:?}",
                        local.x as u32,
                        local.y as u32
                    );
                }
            }
        }
    });
}

/// Largest scale that fits the image into `avail`, snapped down to a whole
/// multiple when zooming in so the pixel grid stays square on screen.
fn fit_scale(avail: egui::Vec2, width: u32, height: u32) -> f32 {
    let scale = (avail.x / width as f32).min(avail.y / height as f32);
    if !scale.is_finite() || scale <= 0.0 {
        1.0
    } else if scale >= 1.0 {
        scale.floor()
    } else {
        scale
    }
}
