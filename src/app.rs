// Application state and frame loop

use std::cell::RefCell;
use std::sync::Arc;

use eframe::egui;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

use crate::config::Config;
use crate::content::{builtin_registry, ContentLoader};
use crate::nav::NavIndex;
use crate::state::{ExpansionState, SelectionState};
use crate::style::{self, Theme};

pub struct CubeDocs {
    pub(crate) index: NavIndex,
    pub(crate) selection: SelectionState,
    pub(crate) expansion: ExpansionState,
    pub(crate) loader: ContentLoader,
    pub(crate) theme: Theme,
    pub(crate) config: Config,
    pub(crate) syntax_set: SyntaxSet,
    pub(crate) theme_set: ThemeSet,
}

impl CubeDocs {
    pub fn new(cc: &eframe::CreationContext<'_>, index: NavIndex, config: Config) -> Self {
        let theme = if config.theme.mode == "light" {
            Theme::Light
        } else {
            Theme::Dark
        };

        let selection = SelectionState::new(config.nav.default_chapter());
        let expansion = ExpansionState::with_expanded(config.nav.expanded_groups.iter().cloned());

        let provider = Arc::new(builtin_registry());
        let mut loader = ContentLoader::new(cc.egui_ctx.clone(), provider);
        loader.request(selection.active());

        Self {
            index,
            selection,
            expansion,
            loader,
            theme,
            config,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Selects a chapter and restarts content resolution for it.
    pub(crate) fn select_chapter(&mut self, section: &str, page: Option<&str>) {
        self.selection.select_chapter(section, page);
        self.loader.request(self.selection.active());
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme.mode = match self.theme {
            Theme::Dark => "dark".to_string(),
            Theme::Light => "light".to_string(),
        };
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }
    }
}

impl eframe::App for CubeDocs {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.loader.pump();

        // Deferred actions; the sidebar borrows self immutably while rendering
        let next_selection: RefCell<Option<(String, Option<String>)>> = RefCell::new(None);
        let toggled_group: RefCell<Option<String>> = RefCell::new(None);

        self.render_header(ctx);

        let sidebar = egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(self.config.panel.sidebar_width)
            .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
            .show(ctx, |ui| {
                self.render_sidebar(ui, &next_selection, &toggled_group);
            });
        self.config.panel.sidebar_width = sidebar.response.rect.width();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_content(ui);
        });

        // Apply deferred actions
        if let Some(identity) = toggled_group.into_inner() {
            self.expansion.toggle_group(&identity);
        }
        if let Some((section, page)) = next_selection.into_inner() {
            self.select_chapter(&section, page.as_deref());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            log::warn!("failed to save config: {e}");
        }
    }
}
