use egui::{Color32, Stroke, Vec2};

use crate::app::ColorByNumberApp;
use crate::color::Rgb;
use crate::posterize::{MAX_LEVELS, MIN_LEVELS};

const SWATCH_SIZE: Vec2 = Vec2::splat(24.0);

pub fn tools_panel(app: &mut ColorByNumberApp, ctx: &egui::Context, frame: &mut eframe::Frame) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading("Color by number");
            ui.add_space(4.0);

            if ui.button("Upload image…").clicked() {
                app.upload_via_dialog();
            }
            ui.label("…or drop an image onto the window.");
            ui.separator();

            // Slider and numeric field edit the same backing value, so they
            // can never disagree.
            ui.label("Colors");
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut app.session.levels, MIN_LEVELS..=MAX_LEVELS)
                        .show_value(false),
                );
                ui.add(egui::DragValue::new(&mut app.session.levels).range(MIN_LEVELS..=MAX_LEVELS));
            });
            if ui.button("Create outline").clicked() {
                app.create_outline();
            }
            ui.checkbox(&mut app.session.reveal, "Reveal mode");
            ui.separator();

            palette_swatches(app, ui);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save progress").clicked() {
                    app.save_progress(frame);
                }
                if ui.button("Load progress").clicked() {
                    app.load_progress(frame);
                }
            });
            if ui.button("Export PNG").clicked() {
                app.export_png();
            }

            if let Some(status) = &app.status {
                ui.separator();
                let color = if status.is_error {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().text_color()
                };
                ui.label(egui::RichText::new(&status.message).color(color));
            }
        });
}

fn palette_swatches(app: &mut ColorByNumberApp, ui: &mut egui::Ui) {
    ui.label("Palette");
    let palette: Vec<Rgb> = app.session.palette().to_vec();
    if palette.is_empty() {
        ui.small("Create an outline to extract a palette.");
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for color in palette {
            let selected = app.session.selected() == Some(color);
            let stroke = if selected {
                Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                Stroke::new(1.0, Color32::from_gray(96))
            };
            let swatch = egui::Button::new("")
                .fill(color.to_color32())
                .stroke(stroke)
                .min_size(SWATCH_SIZE);
            if ui.add(swatch).clicked() {
                app.session.select_color(color);
            }
        }
    });
}
