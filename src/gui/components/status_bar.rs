// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.spinner();
        }
        let msg = app.status.lock().map(|s| s.clone()).unwrap_or_default();
        ui.label(msg);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let opts = &app.state.options.api;
            ui.weak(format!("League {} · {}", opts.league_id, opts.season));
            ui.separator();
            ui.weak(format!("★ {}", app.favorites.len()));
        });
    });
}
