// src/gui/pages/team_detail.rs
use eframe::egui::{self, RichText};

use crate::{
    api::{Event, Present},
    config::{consts::TEAM_MATCHES_SHOWN, options::{PageKind, Route}},
    gui::{actions, app::App, components::match_card},
    loader::PageData,
    views::team::{format_capacity, initials, social_links},
};

use super::{wrong_data, Page};

pub struct TeamDetailPage;
pub static PAGE: TeamDetailPage = TeamDetailPage;

fn fixtures(ui: &mut egui::Ui, title: &str, events: &[Event]) -> Option<String> {
    let mut open = None;
    ui.vertical(|ui| {
        ui.strong(title);
        if events.is_empty() {
            ui.weak("No matches.");
        }
        for e in events.iter().take(TEAM_MATCHES_SHOWN) {
            if match_card::draw(ui, e) {
                open = Some(e.id_event.clone());
            }
        }
    });
    open
}

impl Page for TeamDetailPage {
    fn kind(&self) -> PageKind { PageKind::TeamDetail }
    fn title(&self) -> &'static str { "Team" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Team(detail) = data else { return wrong_data(ui, self) };

        let Some(team) = detail.team.as_ref() else {
            ui.add_space(20.0);
            ui.heading("Team not found");
            ui.label("The team you're looking for doesn't exist or has been removed.");
            if ui.button("Back to Teams").clicked() {
                app.navigate(Route::Teams);
            }
            return;
        };

        let mut open_match: Option<String> = None;
        let mut toggle = false;

        egui::ScrollArea::vertical().id_salt("team_scroll").show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(initials(&team.str_team)).size(28.0).monospace().strong());
                ui.vertical(|ui| {
                    ui.heading(&team.str_team);
                    let sub: Vec<&str> = [team.str_team_short.present(), team.str_alternate.present()]
                        .into_iter()
                        .flatten()
                        .collect();
                    if !sub.is_empty() {
                        ui.weak(sub.join(" · "));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let on = app.favorites.is_favorite(&team.id_team);
                    let label = if on { "★ Remove from favorites" } else { "☆ Add to favorites" };
                    if ui.button(label).clicked() {
                        toggle = true;
                    }
                });
            });
            ui.separator();

            egui::Grid::new("team_info").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
                let capacity = format_capacity(team.int_stadium_capacity.present());
                let rows = [
                    ("Founded", team.int_formed_year.present()),
                    ("League", team.str_league.present()),
                    ("Stadium", team.str_stadium.present()),
                    ("Location", team.str_stadium_location.present()),
                    ("Capacity", capacity.as_deref()),
                    ("Manager", team.str_manager.present()),
                    ("Country", team.str_country.present()),
                ];
                for (k, v) in rows {
                    if let Some(v) = v {
                        ui.label(k);
                        ui.label(v);
                        ui.end_row();
                    }
                }
            });

            let links = social_links(team);
            if !links.is_empty() {
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for link in &links {
                        ui.hyperlink_to(link.name, &link.url);
                    }
                });
            }

            if let Some(desc) = team.str_description_en.present() {
                ui.add_space(6.0);
                egui::CollapsingHeader::new("About").id_salt("team_about").default_open(true).show(ui, |ui| {
                    ui.label(desc);
                });
            }

            ui.add_space(10.0);
            ui.horizontal_top(|ui| {
                let picks = [
                    fixtures(ui, "Recent matches", &detail.last),
                    fixtures(ui, "Upcoming matches", &detail.next),
                ];
                open_match = picks.into_iter().flatten().next();
            });
        });

        if toggle {
            actions::favorites::toggle(app, team);
        }
        if let Some(id) = open_match {
            app.navigate(Route::Match(id));
        }
    }
}
