// src/gui/components/favorites_panel.rs
//
// Right-hand list of favorites. Click opens the team; ✕ removes it.

use eframe::egui;

use crate::{
    config::options::Route,
    gui::{actions, app::App},
    views::team::initials,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Favorites");
    ui.separator();

    if app.favorites.is_empty() {
        ui.weak("No favorite teams yet. Use ☆ on a team to add one.");
        return;
    }

    let mut open: Option<String> = None;
    let mut remove: Option<(String, String)> = None;

    egui::ScrollArea::vertical()
        .id_salt("favorites_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for fav in app.favorites.teams() {
                ui.horizontal(|ui| {
                    ui.monospace(initials(&fav.str_team));
                    if ui.link(&fav.str_team).clicked() {
                        open = Some(fav.id_team.clone());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove").clicked() {
                            remove = Some((fav.id_team.clone(), fav.str_team.clone()));
                        }
                    });
                });
            }
        });

    if let Some(id) = open {
        app.navigate(Route::Team(id));
    }
    if let Some((id, name)) = remove {
        actions::favorites::remove(app, &id, &name);
    }
}
