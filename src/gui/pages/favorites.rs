// src/gui/pages/favorites.rs
use eframe::egui;

use crate::{
    api::Team,
    config::options::{PageKind, Route},
    gui::{actions, app::App, components::data_table::{self, RowAction, TableView}},
    loader::PageData,
    table,
    views::favorites::available,
};

use super::{header, wrong_data, Page};

pub struct FavoritesPage;
pub static PAGE: FavoritesPage = FavoritesPage;

enum Act {
    Open(String),
    Add(String),
    Remove(String, String),
    Clear,
}

impl Page for FavoritesPage {
    fn kind(&self) -> PageKind { PageKind::Favorites }
    fn title(&self) -> &'static str { "Favorites" }
    fn tab_route(&self) -> Option<Route> { Some(Route::Favorites) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Favorites(teams) = data else { return wrong_data(ui, self) };

        header(ui, "Favorite Teams", "Kept on this computer; shared with the command-line tool.");

        let mut act: Option<Act> = None;

        // Current favorites
        ui.horizontal(|ui| {
            ui.strong(format!("Your favorites ({})", app.favorites.len()));
            if !app.favorites.is_empty() && ui.small_button("Clear all").clicked() {
                act = Some(Act::Clear);
            }
        });
        let grid = table::favorites_table(app.favorites.teams());
        let view = TableView { widths: &[80.0, 200.0, 160.0], ..TableView::new("favorites_table") };
        if app.favorites.is_empty() {
            ui.weak("No favorite teams yet. Add some below.");
        } else {
            egui::ScrollArea::vertical().id_salt("favorites_current").max_height(220.0).show(ui, |ui| {
                if let Some(RowAction::Open(id)) = data_table::draw(ui, &view, &grid) {
                    act = Some(Act::Open(id));
                }
            });
            ui.horizontal_wrapped(|ui| {
                for f in app.favorites.teams() {
                    if ui.small_button(format!("✕ {}", f.str_team)).clicked() {
                        act = Some(Act::Remove(f.id_team.clone(), f.str_team.clone()));
                    }
                }
            });
        }

        ui.separator();

        // Teams that can still be added
        ui.horizontal(|ui| {
            ui.strong("Add teams");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.favorites_search)
                    .hint_text("search")
                    .desired_width(180.0),
            );
        });
        let addable: Vec<&Team> = available(teams, app.favorites.teams(), &app.state.gui.favorites_search);
        if addable.is_empty() {
            ui.weak(if teams.is_empty() { "Teams could not be loaded." } else { "Nothing left to add." });
        }
        egui::ScrollArea::vertical().id_salt("favorites_available").show(ui, |ui| {
            egui::Grid::new("favorites_available_grid").num_columns(2).striped(true).show(ui, |ui| {
                for t in &addable {
                    if ui.link(&t.str_team).clicked() {
                        act = Some(Act::Open(t.id_team.clone()));
                    }
                    if ui.small_button("☆ Add").clicked() {
                        act = Some(Act::Add(t.id_team.clone()));
                    }
                    ui.end_row();
                }
            });
        });

        match act {
            Some(Act::Open(id)) => app.navigate(Route::Team(id)),
            Some(Act::Add(id)) => {
                if let Some(team) = teams.iter().find(|t| t.id_team == id) {
                    actions::favorites::toggle(app, team);
                }
            }
            Some(Act::Remove(id, name)) => actions::favorites::remove(app, &id, &name),
            Some(Act::Clear) => actions::favorites::clear(app),
            None => {}
        }
    }
}
