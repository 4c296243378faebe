// src/gui/components/match_card.rs
//
// One fixture as a clickable card: kickoff in WIB, teams, score or "vs",
// status. Returns true when clicked.

use eframe::egui::{self, Color32, RichText, Sense};

use crate::{
    api::{Event, Present},
    time::to_wib_display,
    views::matches::{winner, MatchStatus, Winner},
};

pub fn status_color(status: &MatchStatus) -> Color32 {
    match status {
        MatchStatus::Finished  => Color32::from_rgb(0x3C, 0xB3, 0x71),
        MatchStatus::Upcoming  => Color32::from_rgb(0x64, 0xB4, 0xFF),
        MatchStatus::Postponed => Color32::from_rgb(0xDC, 0x61, 0x49),
        MatchStatus::Other(_) | MatchStatus::Scheduled => Color32::GRAY,
    }
}

fn side(name: &str, won: bool) -> RichText {
    let rt = RichText::new(name);
    if won { rt.strong().color(Color32::from_rgb(0x3C, 0xB3, 0x71)) } else { rt }
}

pub fn draw(ui: &mut egui::Ui, event: &Event) -> bool {
    let status = MatchStatus::of(event);
    let w = winner(event);

    let resp = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(420.0));
            ui.horizontal(|ui| {
                ui.small(to_wib_display(&event.date_event, event.str_time.as_deref()));
                if let Some(round) = event.int_round.present() {
                    ui.small(format!("· Round {round}"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(RichText::new(status.to_string()).color(status_color(&status)));
                });
            });
            ui.horizontal(|ui| {
                ui.label(side(&event.str_home_team, w == Some(Winner::Home)));
                ui.label(RichText::new(event.score_line()).monospace().strong());
                ui.label(side(&event.str_away_team, w == Some(Winner::Away)));
            });
            if let Some(venue) = event.str_venue.present() {
                ui.small(format!("📍 {venue}"));
            }
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    resp.clicked()
}

/// One-line variant for dense lists.
pub fn draw_compact(ui: &mut egui::Ui, event: &Event) -> bool {
    let status = MatchStatus::of(event);
    let text = format!(
        "{}  {} {} {}",
        to_wib_display(&event.date_event, event.str_time.as_deref()),
        event.str_home_team,
        event.score_line(),
        event.str_away_team
    );
    ui.horizontal(|ui| {
        let clicked = ui.link(text).clicked();
        ui.small(RichText::new(status.to_string()).color(status_color(&status)));
        clicked
    })
    .inner
}
