#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (run with `RUST_LOG=debug` for more).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Color by Number",
        native_options,
        Box::new(|cc| Ok(Box::new(color_by_number::ColorByNumberApp::new(cc)))),
    )
}
