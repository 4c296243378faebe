// src/gui/actions/copy.rs
use eframe::egui;

use crate::{gui::app::App, table::{self, TableData}};

/// Put `data` on the clipboard as TSV (pastes cleanly into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context, data: &TableData) {
    if data.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = table::to_delimited(data, '\t');
    logf!("Copy: page={:?}, rows={}", app.route().kind(), data.nrows());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", data.nrows()));
}
