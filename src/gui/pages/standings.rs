// src/gui/pages/standings.rs
use eframe::egui::{self, Color32};

use crate::{
    config::options::{PageKind, Route},
    gui::{actions, app::App, components::data_table::{self, RowAction, TableView}},
    loader::PageData,
    table,
    views::{standings::Standings, team::initials},
};

use super::{header, wrong_data, Page};

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

const ZONE_COL: usize = 12;
const FORM_COL: usize = 11;

fn cell_color(col: usize, cell: &str) -> Option<Color32> {
    match col {
        ZONE_COL => match cell {
            "Champions League"  => Some(Color32::from_rgb(0x64, 0xB4, 0xFF)),
            "Europa League"     => Some(Color32::from_rgb(0xFF, 0xA5, 0x00)),
            "Conference League" => Some(Color32::from_rgb(0x3C, 0xB3, 0x71)),
            "Relegation"        => Some(Color32::from_rgb(0xDC, 0x61, 0x49)),
            _ => None,
        },
        FORM_COL => Some(Color32::from_rgb(0xF0, 0xD2, 0x3C)),
        _ => None,
    }
}

impl Page for StandingsPage {
    fn kind(&self) -> PageKind { PageKind::Standings }
    fn title(&self) -> &'static str { "Standings" }
    fn tab_route(&self) -> Option<Route> { Some(Route::Standings) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Standings(standings) = data else { return wrong_data(ui, self) };

        let season = app.state.options.api.season.clone();
        header(ui, "Standings", &format!("Premier League table {season}"));

        match standings {
            Standings::Table(rows) => {
                if let Some(leader) = standings.leader() {
                    ui.label(format!("League leader: {} ({} pts)", leader.str_team, leader.int_points));
                }
                let grid = table::standings_table(rows);
                if ui.small_button("Copy table").clicked() {
                    actions::copy(app, ui.ctx(), &grid);
                }
                let view = TableView {
                    widths: &[44.0, 180.0, 36.0, 36.0, 36.0, 36.0, 40.0, 40.0, 44.0, 44.0, 60.0, 70.0, 140.0],
                    numeric: &[0, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                    color: Some(&cell_color),
                    ..TableView::new("standings_table")
                };
                if let Some(RowAction::Open(id)) = data_table::draw(ui, &view, &grid) {
                    if !id.is_empty() {
                        app.navigate(Route::Team(id));
                    }
                }
            }
            Standings::Unavailable { teams } => {
                ui.colored_label(
                    Color32::from_rgb(0xF0, 0xD2, 0x3C),
                    "Standings data is not available for this season from the API.",
                );
                ui.weak("Teams in the league are listed below without statistics.");
                ui.separator();
                let mut open = None;
                egui::ScrollArea::vertical().id_salt("standings_teams").show(ui, |ui| {
                    for team in teams {
                        ui.horizontal(|ui| {
                            ui.monospace(initials(&team.str_team));
                            if ui.link(&team.str_team).clicked() {
                                open = Some(team.id_team.clone());
                            }
                        });
                    }
                });
                if let Some(id) = open {
                    app.navigate(Route::Team(id));
                }
            }
        }
    }
}
