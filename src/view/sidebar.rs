// Sidebar rendering - walks the navigation forest

use std::cell::RefCell;

use crate::app::CubeDocs;
use crate::nav::{group_identity, NavNode};
use crate::style;
use eframe::egui;

/// Deferred chapter pick: (section key, page key or None for the overview).
type NextSelection = RefCell<Option<(String, Option<String>)>>;

impl CubeDocs {
    pub(crate) fn render_sidebar(
        &self,
        ui: &mut egui::Ui,
        next_selection: &NextSelection,
        toggled_group: &RefCell<Option<String>>,
    ) {
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_salt("sidebar_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width());

                for section in self.index.sections() {
                    let is_overview_active = self.selection.active().section == section.key
                        && self.selection.active().page.is_none();
                    let color = if is_overview_active {
                        style::ACCENT
                    } else {
                        ui.visuals().text_color()
                    };
                    let response = style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(&section.title)
                            .strong()
                            .size(15.0)
                            .color(color),
                        egui::Sense::click(),
                    );
                    if response.clicked() {
                        *next_selection.borrow_mut() = Some((section.key.clone(), None));
                    }

                    let mut path: Vec<&str> = Vec::new();
                    self.render_nodes(
                        ui,
                        &section.key,
                        &section.children,
                        &mut path,
                        next_selection,
                        toggled_group,
                    );
                    ui.add_space(8.0);
                }
            });
    }

    fn render_nodes<'a>(
        &self,
        ui: &mut egui::Ui,
        section_key: &str,
        nodes: &'a [NavNode],
        path: &mut Vec<&'a str>,
        next_selection: &NextSelection,
        toggled_group: &RefCell<Option<String>>,
    ) {
        for node in nodes {
            match node {
                NavNode::Page { title, key } => {
                    let is_active = self.selection.is_active(section_key, key);
                    let color = if is_active {
                        style::ACCENT
                    } else {
                        ui.visuals().text_color()
                    };
                    let response = style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(title).color(color),
                        egui::Sense::click(),
                    );
                    if response.clicked() {
                        *next_selection.borrow_mut() =
                            Some((section_key.to_string(), Some(key.clone())));
                    }
                }
                NavNode::Group {
                    title,
                    key,
                    children,
                } => {
                    path.push(key);
                    let identity = group_identity(section_key, path);
                    let expanded = self.expansion.is_expanded(&identity);

                    let arrow = if expanded { "⏷" } else { "⏵" };
                    let response = style::truncated_label_with_sense(
                        ui,
                        format!("{arrow} {title}"),
                        egui::Sense::click(),
                    );
                    if response.clicked() {
                        *toggled_group.borrow_mut() = Some(identity.clone());
                    }

                    // Collapsed groups are not walked at all, so a page can
                    // stay active while every ancestor group is folded away.
                    if expanded {
                        ui.indent(identity, |ui| {
                            self.render_nodes(
                                ui,
                                section_key,
                                children,
                                path,
                                next_selection,
                                toggled_group,
                            );
                        });
                    }
                    path.pop();
                }
            }
        }
    }
}
