use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// --- Sizing ---
pub const HEADER_HEIGHT: f32 = 36.0;
pub const CONTENT_MAX_WIDTH: f32 = 860.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 160.0;
pub const SIDEBAR_MAX: f32 = 420.0;

// --- Skeleton placeholder ---
pub const SKELETON_LINES: usize = 8;
pub const SKELETON_LINE_HEIGHT: f32 = 14.0;
pub const SKELETON_LINE_GAP: f32 = 10.0;

/// Accent color for the active navigation link.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

pub fn code_background(theme: Theme) -> egui::Color32 {
    match theme {
        Theme::Dark => egui::Color32::from_rgb(30, 34, 42),
        Theme::Light => egui::Color32::from_rgb(240, 240, 245),
    }
}

pub fn skeleton_fill(theme: Theme) -> egui::Color32 {
    match theme {
        Theme::Dark => egui::Color32::from_gray(55),
        Theme::Light => egui::Color32::from_gray(220),
    }
}

/// Syntect theme matching the UI theme.
pub fn syntect_theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "base16-ocean.dark",
        Theme::Light => "base16-ocean.light",
    }
}

// --- Helper functions ---

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
