// src/gui/pages/schedule.rs
use eframe::egui;

use crate::{
    api::Event,
    config::options::{PageKind, Route},
    gui::{actions, app::App, components::match_card},
    loader::PageData,
    time::{date_display, shift_weeks, today_wib, week_bounds},
    views::schedule::{group_by_date, ScheduleTab},
};

use super::{header, wrong_data, Page};

pub struct SchedulePage;
pub static PAGE: SchedulePage = SchedulePage;

/// Date-grouped list; returns the clicked event id.
fn grouped(ui: &mut egui::Ui, events: &[Event], compact: bool, empty: &str) -> Option<String> {
    if events.is_empty() {
        ui.weak(empty);
        return None;
    }
    let mut open = None;
    for (day, list) in group_by_date(events) {
        ui.add_space(6.0);
        ui.strong(format!("{} · {} match(es)", date_display(day), list.len()));
        for e in list {
            let clicked = if compact { match_card::draw_compact(ui, e) } else { match_card::draw(ui, e) };
            if clicked {
                open = Some(e.id_event.clone());
            }
        }
    }
    open
}

impl Page for SchedulePage {
    fn kind(&self) -> PageKind { PageKind::Schedule }
    fn title(&self) -> &'static str { "Schedule" }
    fn tab_route(&self) -> Option<Route> { Some(Route::Schedule) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData) {
        let PageData::Schedule(schedule) = data else { return wrong_data(ui, self) };

        header(ui, "Schedule", "Premier League fixtures and results. Times are WIB (UTC+7).");

        let gui = &mut app.state.gui;
        let names = schedule.team_names();
        let mut refresh = false;

        ui.horizontal_wrapped(|ui| {
            let current = gui.schedule_team.clone().unwrap_or_else(|| s!("All teams"));
            egui::ComboBox::from_id_salt("schedule_team")
                .selected_text(current)
                .height(400.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut gui.schedule_team, None, "All teams");
                    for n in &names {
                        ui.selectable_value(&mut gui.schedule_team, Some(n.clone()), n);
                    }
                });

            ui.separator();
            ui.selectable_value(&mut gui.schedule_tab, ScheduleTab::Upcoming, "Upcoming");
            ui.selectable_value(&mut gui.schedule_tab, ScheduleTab::Previous, "Previous");
            ui.selectable_value(&mut gui.schedule_tab, ScheduleTab::Week, "Week");
            ui.separator();
            ui.checkbox(&mut gui.schedule_compact, "Compact");
            if ui.button("⟳ Refresh").clicked() {
                refresh = true;
            }
        });

        let view = schedule.for_team(gui.schedule_team.as_deref());
        ui.weak(format!("{} previous · {} upcoming", view.previous.len(), view.upcoming.len()));
        ui.separator();

        let compact = gui.schedule_compact;
        let mut open: Option<String> = None;

        match gui.schedule_tab {
            ScheduleTab::Upcoming => {
                egui::ScrollArea::vertical().id_salt("schedule_upcoming").show(ui, |ui| {
                    open = grouped(ui, &view.upcoming, compact, "No upcoming matches.");
                });
            }
            ScheduleTab::Previous => {
                egui::ScrollArea::vertical().id_salt("schedule_previous").show(ui, |ui| {
                    open = grouped(ui, &view.previous, compact, "No previous matches.");
                });
            }
            ScheduleTab::Week => {
                let (start, end) = week_bounds(gui.schedule_week);
                ui.horizontal(|ui| {
                    if ui.button("◀ Previous week").clicked() {
                        gui.schedule_week = shift_weeks(gui.schedule_week, -1);
                    }
                    if ui.button("This week").clicked() {
                        gui.schedule_week = today_wib();
                    }
                    if ui.button("Next week ▶").clicked() {
                        gui.schedule_week = shift_weeks(gui.schedule_week, 1);
                    }
                    ui.label(format!("{} – {}", date_display(start), date_display(end)));
                });
                let week = view.week(gui.schedule_week);
                egui::ScrollArea::vertical().id_salt("schedule_week").show(ui, |ui| {
                    open = grouped(ui, &week, compact, "No matches this week.");
                });
            }
        }

        if refresh {
            actions::load::refresh(app);
        } else if let Some(id) = open {
            app.navigate(Route::Match(id));
        }
    }
}
