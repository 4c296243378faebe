// src/gui/pages/teams.rs
use eframe::egui;

use crate::{
    api::Team,
    config::options::{PageKind, Route},
    gui::{actions, app::App, components::data_table::{self, RowAction, TableView}},
    loader::PageData,
    table,
    views::teams::{filter_and_sort, TeamFilter, TeamSort},
};

use super::{header, wrong_data, Page};

pub struct TeamsPage;
pub static PAGE: TeamsPage = TeamsPage;

/// Search box plus sort/filter selectors. Returns true when anything changed.
fn draw_controls(ui: &mut egui::Ui, app: &mut App) -> bool {
    let q = &mut app.state.gui.teams_query;
    let before = q.clone();
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(egui::TextEdit::singleline(&mut q.search).hint_text("team or short name").desired_width(180.0));

        egui::ComboBox::from_id_salt("teams_sort")
            .selected_text(match q.sort { TeamSort::Name => "Sort: Name", TeamSort::Founded => "Sort: Founded" })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut q.sort, TeamSort::Name, "Name");
                ui.selectable_value(&mut q.sort, TeamSort::Founded, "Founded");
            });

        ui.selectable_value(&mut q.filter, TeamFilter::All, "All teams");
        ui.selectable_value(&mut q.filter, TeamFilter::Favorites, "★ Favorites");
    });
    let changed = *q != before;
    if changed {
        logd!("UI: teams query → {:?}", q);
    }
    changed
}

impl Page for TeamsPage {
    fn kind(&self) -> PageKind { PageKind::Teams }
    fn title(&self) -> &'static str { "Teams" }
    fn tab_route(&self) -> Option<Route> { Some(Route::Teams) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Teams(teams) = data else { return wrong_data(ui, self) };

        header(ui, "Teams", "Premier League clubs. Click a row for details, ☆ to favorite.");
        draw_controls(ui, app);
        ui.separator();

        let shown: Vec<&Team> = filter_and_sort(teams, &app.state.gui.teams_query, app.favorites.teams());
        ui.weak(format!("{} of {} team(s)", shown.len(), teams.len()));
        let grid = table::teams_table(shown.iter().copied());

        if ui.small_button("Copy table").clicked() {
            actions::copy(app, ui.ctx(), &grid);
        }

        let favorites = &app.favorites;
        let is_fav = |id: &str| favorites.is_favorite(id);
        let view = TableView {
            widths: &[70.0, 180.0, 60.0, 70.0, 200.0, 80.0, 160.0],
            numeric: &[3, 5],
            starred: Some(&is_fav),
            ..TableView::new("teams_table")
        };
        match data_table::draw(ui, &view, &grid) {
            Some(RowAction::Open(id)) => app.navigate(Route::Team(id)),
            Some(RowAction::Star(id)) => {
                if let Some(team) = teams.iter().find(|t| t.id_team == id) {
                    actions::favorites::toggle(app, team);
                }
            }
            None => {}
        }
    }
}
