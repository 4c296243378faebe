// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::{PageKind, Route},
    gui::app::App,
    loader::PageData,
};

pub mod favorites;
pub mod home;
pub mod match_detail;
pub mod schedule;
pub mod standings;
pub mod team_detail;
pub mod teams;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Where the tab strip sends you. Detail pages are not tabs.
    fn tab_route(&self) -> Option<Route> { None }

    /// Draw the page from its loaded data. Navigation and favorites go
    /// through `app` directly; `data` is a separate handle so both can be used.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App, data: &PageData);
}

/// Shown when the cached data is for a different page shape (should not happen).
pub(crate) fn wrong_data(ui: &mut egui::Ui, page: &dyn Page) {
    loge!("UI: {} got data for another page", page.title());
    ui.colored_label(egui::Color32::RED, "Unexpected data for this page. Try Refresh.");
}

/// Heading plus a muted subtitle, as every page starts.
pub(crate) fn header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    if !subtitle.is_empty() {
        ui.weak(subtitle);
    }
    ui.add_space(6.0);
}
