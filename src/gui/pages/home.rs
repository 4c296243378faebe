// src/gui/pages/home.rs
use eframe::egui::{self, RichText};

use crate::{
    api::{Event, Present},
    config::options::{PageKind, Route},
    gui::{actions, app::App, components::match_card},
    loader::PageData,
    time::today_wib,
    views::team::initials,
};

use super::{header, wrong_data, Page};

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

fn stat_card(ui: &mut egui::Ui, value: &str, title: &str, note: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.label(RichText::new(value).size(24.0).strong());
        ui.label(title);
        ui.weak(note);
    });
}

/// Titled column of match cards; returns the clicked event id.
fn match_column(ui: &mut egui::Ui, title: &str, events: &[Event]) -> Option<String> {
    let mut open = None;
    ui.vertical(|ui| {
        ui.strong(title);
        if events.is_empty() {
            ui.weak("No matches.");
        }
        for e in events {
            if match_card::draw(ui, e) {
                open = Some(e.id_event.clone());
            }
        }
    });
    open
}

impl Page for HomePage {
    fn kind(&self) -> PageKind { PageKind::Home }
    fn title(&self) -> &'static str { "Home" }
    fn tab_route(&self) -> Option<Route> { Some(Route::Home) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Home(home) = data else { return wrong_data(ui, self) };
        let dash = home.dashboard(&app.state.options.api.season, app.favorites.len(), today_wib());

        let mut go: Option<Route> = None;
        let mut star: Option<String> = None;

        egui::ScrollArea::vertical().id_salt("home_scroll").show(ui, |ui| {
            let league_name = dash.league.map(|l| l.str_league.as_str()).filter(|s| !s.is_empty());
            header(ui, league_name.unwrap_or("Premier League"), "Teams, fixtures and results at a glance");

            ui.horizontal_wrapped(|ui| {
                stat_card(ui, &dash.stats.total_teams.to_string(), "Total Teams", "Premier League teams");
                stat_card(ui, &dash.stats.active_season, "Active Season", "Current season");
                stat_card(ui, &dash.stats.favorites.to_string(), "Favorite Teams", "Your favorites");
                stat_card(ui, &dash.stats.matches_today.to_string(), "Matches Today", "Games today (WIB)");
            });

            if let Some(league) = dash.league {
                ui.add_space(8.0);
                egui::CollapsingHeader::new("About the league").id_salt("home_league").show(ui, |ui| {
                    egui::Grid::new("home_league_grid").num_columns(2).show(ui, |ui| {
                        for (k, v) in [
                            ("Country", league.str_country.present()),
                            ("Founded", league.int_formed_year.present()),
                            ("Current season", league.str_current_season.present()),
                        ] {
                            if let Some(v) = v {
                                ui.label(k);
                                ui.label(v);
                                ui.end_row();
                            }
                        }
                    });
                    if let Some(site) = league.str_website.present() {
                        ui.hyperlink_to(site, crate::views::team::link_url(site));
                    }
                    if let Some(desc) = league.str_description_en.present() {
                        ui.label(desc);
                    }
                });
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.strong("Teams");
                if ui.link("View all →").clicked() {
                    go = Some(Route::Teams);
                }
            });
            egui::Grid::new("home_teams").num_columns(3).spacing([12.0, 6.0]).show(ui, |ui| {
                for (i, team) in dash.teams.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let on = app.favorites.is_favorite(&team.id_team);
                        if ui.small_button(if on { "★" } else { "☆" }).clicked() {
                            star = Some(team.id_team.clone());
                        }
                        ui.monospace(initials(&team.str_team));
                        if ui.link(&team.str_team).clicked() {
                            go = Some(Route::Team(team.id_team.clone()));
                        }
                    });
                    if i % 3 == 2 { ui.end_row(); }
                }
            });

            ui.add_space(10.0);
            ui.horizontal_top(|ui| {
                let picks = [
                    match_column(ui, "Recent results", dash.recent),
                    match_column(ui, "Upcoming", dash.upcoming),
                    match_column(ui, "Earlier this season", dash.previous_season),
                ];
                if let Some(id) = picks.into_iter().flatten().next() {
                    go = Some(Route::Match(id));
                }
            });
            if ui.link("Full schedule →").clicked() {
                go = Some(Route::Schedule);
            }
        });

        if let Some(id) = star {
            if let Some(team) = home.teams.iter().find(|t| t.id_team == id) {
                actions::favorites::toggle(app, team);
            }
        }
        if let Some(route) = go {
            app.navigate(route);
        }
    }
}
