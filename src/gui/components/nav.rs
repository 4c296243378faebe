// src/gui/components/nav.rs
//
// Top bar: back button for detail pages, the tab strip, refresh.

use eframe::egui;

use crate::gui::{actions, app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.heading("⚽ Premier League");
        ui.separator();

        let can_back = !app.state.gui.history.is_empty();
        if ui.add_enabled(can_back, egui::Button::new("⬅ Back")).clicked() && app.state.gui.back() {
            logf!("UI: Back → {:?}", app.route());
        }

        let cur = app.route().kind();
        for page in router::tabs() {
            let selected = page.kind() == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                if let Some(route) = page.tab_route() {
                    app.navigate(route);
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let busy = app.is_loading();
            if ui.add_enabled(!busy, egui::Button::new("⟳ Refresh")).clicked() {
                actions::load::refresh(app);
            }
        });
    });
}
