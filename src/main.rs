mod app;
mod config;
mod content;
mod data;
mod nav;
mod state;
mod style;
mod view;

use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let index = match data::chapter_index() {
        Ok(index) => index,
        Err(e) => {
            log::error!("invalid chapter index: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config::Config::create_default() {
        log::warn!("could not create default config: {e}");
    }
    let config = config::Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Security Cube"),
        ..Default::default()
    };

    eframe::run_native(
        "Security Cube",
        options,
        Box::new(move |cc| Ok(Box::new(app::CubeDocs::new(cc, index, config)))),
    )
}
