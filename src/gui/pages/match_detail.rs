// src/gui/pages/match_detail.rs
use eframe::egui::{self, Color32, RichText};

use crate::{
    api::Present,
    config::options::{PageKind, Route},
    gui::{app::App, components::match_card::status_color},
    loader::PageData,
    time::to_wib_display,
    views::{
        matches::{split_details, stat_share, winner, MatchStatus, Winner},
        team::link_url,
    },
};

use super::{wrong_data, Page};

pub struct MatchDetailPage;
pub static PAGE: MatchDetailPage = MatchDetailPage;

const WIN: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);

impl Page for MatchDetailPage {
    fn kind(&self) -> PageKind { PageKind::MatchDetail }
    fn title(&self) -> &'static str { "Match" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Match(detail) = data else { return wrong_data(ui, self) };

        let Some(ev) = detail.event.as_ref() else {
            ui.add_space(20.0);
            ui.heading("Match not found");
            ui.label("The match you're looking for doesn't exist or has been removed.");
            if ui.button("Back to Schedule").clicked() {
                app.navigate(Route::Schedule);
            }
            return;
        };

        let status = MatchStatus::of(ev);
        let w = winner(ev);
        let mut open_team: Option<String> = None;

        egui::ScrollArea::vertical().id_salt("match_scroll").show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&ev.str_league);
                if let Some(round) = ev.int_round.present() {
                    ui.weak(format!("· Round {round}"));
                }
                ui.label(RichText::new(status.to_string()).color(status_color(&status)).strong());
            });

            // Scoreline
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let home = RichText::new(&ev.str_home_team).size(20.0);
                let home = if w == Some(Winner::Home) { home.color(WIN).strong() } else { home };
                if ui.link(home).clicked() && !ev.id_home_team.is_empty() {
                    open_team = Some(ev.id_home_team.clone());
                }
                ui.label(RichText::new(ev.score_line()).size(24.0).monospace().strong());
                let away = RichText::new(&ev.str_away_team).size(20.0);
                let away = if w == Some(Winner::Away) { away.color(WIN).strong() } else { away };
                if ui.link(away).clicked() && !ev.id_away_team.is_empty() {
                    open_team = Some(ev.id_away_team.clone());
                }
            });
            if w == Some(Winner::Draw) {
                ui.weak("Draw");
            }
            ui.separator();

            egui::Grid::new("match_info").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
                ui.label("Kickoff (WIB)");
                ui.label(to_wib_display(&ev.date_event, ev.str_time.as_deref()));
                ui.end_row();
                for (k, v) in [
                    ("Venue", ev.str_venue.present()),
                    ("City", ev.str_city.present()),
                    ("Season", Some(ev.str_season.as_str()).filter(|s| !s.is_empty())),
                    ("Spectators", ev.int_spectators.present()),
                ] {
                    if let Some(v) = v {
                        ui.label(k);
                        ui.label(v);
                        ui.end_row();
                    }
                }
            });

            // Goals and cards, home | away
            let details = [
                ("Goals", &ev.str_home_goal_details, &ev.str_away_goal_details),
                ("Red cards", &ev.str_home_red_cards, &ev.str_away_red_cards),
                ("Yellow cards", &ev.str_home_yellow_cards, &ev.str_away_yellow_cards),
            ];
            for (title, home, away) in details {
                let (h, a) = (split_details(home.present()), split_details(away.present()));
                if h.is_empty() && a.is_empty() { continue; }
                ui.add_space(6.0);
                ui.strong(title);
                egui::Grid::new(("match_details", title)).num_columns(2).spacing([40.0, 2.0]).show(ui, |ui| {
                    for i in 0..h.len().max(a.len()) {
                        ui.label(h.get(i).map(String::as_str).unwrap_or(""));
                        ui.label(a.get(i).map(String::as_str).unwrap_or(""));
                        ui.end_row();
                    }
                });
            }

            if let (Some(hf), Some(af)) = (ev.str_home_formation.present(), ev.str_away_formation.present()) {
                ui.add_space(6.0);
                ui.label(format!("Formations: {hf} vs {af}"));
            }

            ui.add_space(10.0);
            ui.strong("Match statistics");
            if detail.stats.is_empty() {
                ui.weak("No statistics available for this match.");
            }
            for stat in &detail.stats {
                let share = stat_share(stat);
                ui.horizontal(|ui| {
                    ui.label(format!("{:>3}", share.home));
                    ui.add(
                        egui::ProgressBar::new(share.home_pct / 100.0)
                            .desired_width(220.0)
                            .text(format!("{} · {} total", share.name, share.total())),
                    );
                    ui.label(format!("{:<3}", share.away));
                });
            }

            if let Some(video) = ev.str_video.present() {
                ui.add_space(8.0);
                ui.hyperlink_to("▶ Highlights", link_url(video));
            }
        });

        if let Some(id) = open_team {
            app.navigate(Route::Team(id));
        }
    }
}
