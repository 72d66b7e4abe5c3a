// Content pane - skeleton, rendered page, or failure notice

use crate::app::CubeDocs;
use crate::content::LoadState;
use crate::style;
use crate::view::MarkdownView;
use eframe::egui;

impl CubeDocs {
    pub(crate) fn render_content(&self, ui: &mut egui::Ui) {
        match self.loader.state() {
            LoadState::Idle => {}
            LoadState::Pending => render_skeleton(ui, self.theme),
            LoadState::Loaded(page) => {
                egui::ScrollArea::vertical()
                    .id_salt("content_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(style::CONTENT_MAX_WIDTH.min(ui.available_width()));
                        ui.add_space(8.0);
                        ui.weak(format!("{} / {}", page.section, page.page));
                        ui.add_space(4.0);
                        let view = MarkdownView::new(
                            &self.syntax_set,
                            &self.theme_set,
                            self.theme,
                            self.config.font.body_size,
                            self.config.font.code_size,
                        );
                        view.show(ui, &page.source.markdown);
                        ui.add_space(24.0);
                    });
            }
            LoadState::Failed {
                section,
                page,
                error,
            } => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Page unavailable").size(20.0).strong());
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::RED, error.to_string());
                    ui.add_space(4.0);
                    ui.weak(format!("Requested: {section}/{page}"));
                });
            }
        }
    }
}

/// Grey placeholder bars shown while a resolution is in flight.
fn render_skeleton(ui: &mut egui::Ui, theme: style::Theme) {
    ui.add_space(16.0);
    let fill = style::skeleton_fill(theme);
    let width = style::CONTENT_MAX_WIDTH.min(ui.available_width());

    // Title bar, then body lines of varying length.
    let title = ui.allocate_space(egui::vec2(width * 0.4, 24.0)).1;
    ui.painter().rect_filled(title, 4, fill);
    ui.add_space(style::SKELETON_LINE_GAP * 1.5);

    for i in 0..style::SKELETON_LINES {
        let fraction = match i % 4 {
            0 => 0.95,
            1 => 0.85,
            2 => 0.9,
            _ => 0.6,
        };
        let rect = ui
            .allocate_space(egui::vec2(width * fraction, style::SKELETON_LINE_HEIGHT))
            .1;
        ui.painter().rect_filled(rect, 4, fill);
        ui.add_space(style::SKELETON_LINE_GAP);
    }

    ui.spinner();
}
