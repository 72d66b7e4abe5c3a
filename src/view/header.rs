// Top bar: title, external links, theme toggle

use crate::app::CubeDocs;
use crate::style::{self, Theme};
use eframe::egui;

const PROJECT_URL: &str = "https://github.com/XOTaichi/Security-Cube-Artifact";

impl CubeDocs {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(style::HEADER_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("Security Cube").strong().size(18.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = match self.theme {
                            Theme::Dark => "☀",
                            Theme::Light => "🌙",
                        };
                        if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                            self.toggle_theme();
                        }

                        ui.separator();
                        ui.hyperlink_to("Artifact", PROJECT_URL);
                        ui.hyperlink_to("Code", PROJECT_URL);
                        ui.hyperlink_to("Paper", PROJECT_URL);
                    });
                });
            });
    }
}
