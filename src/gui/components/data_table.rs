// src/gui/components/data_table.rs
//
// Draws a `TableData` grid. Purely a view: it reports what the user clicked
// and leaves navigation / favorites to the caller.

use eframe::egui::{self, Align, Color32, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::TableData;

/// What happened on a row, by row key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    Open(String),
    Star(String),
}

pub struct TableView<'a> {
    pub id_salt: &'a str,
    /// Per-column starting widths; missing entries get 80.
    pub widths: &'a [f32],
    /// Columns drawn centered (counts, scores).
    pub numeric: &'a [usize],
    /// When set, a leading ★/☆ column toggles favorites by row key.
    pub starred: Option<&'a dyn Fn(&str) -> bool>,
    /// Optional per-cell text color.
    pub color: Option<&'a dyn Fn(usize, &str) -> Option<Color32>>,
}

impl<'a> TableView<'a> {
    pub fn new(id_salt: &'a str) -> Self {
        Self { id_salt, widths: &[], numeric: &[], starred: None, color: None }
    }
}

fn tune_scrollbars(ui: &mut egui::Ui) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;           // reserve space instead of overlaying content
    s.bar_width = 10.0;
    s.bar_inner_margin = 7.0;
    s.bar_outer_margin = 0.0;
    s.handle_min_length = 48.0;
    s.foreground_color = true;
    let visuals = &mut ui.style_mut().visuals;
    visuals.extreme_bg_color = visuals.panel_fill;
}

pub fn draw(ui: &mut egui::Ui, view: &TableView<'_>, data: &TableData) -> Option<RowAction> {
    if data.is_empty() {
        ui.weak("No data.");
        return None;
    }

    tune_scrollbars(ui);

    let cols = data.ncols();
    let mut action = None;

    let mut table = TableBuilder::new(ui)
        .id_salt(view.id_salt)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));

    if view.starred.is_some() {
        table = table.column(Column::exact(24.0));
    }
    for ci in 0..cols {
        let w = view.widths.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            if view.starred.is_some() {
                header.col(|ui| { ui.label(""); });
            }
            for (ci, h) in data.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if view.numeric.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(22.0, data.nrows(), |mut row| {
                let ri = row.index();
                let key = data.key(ri).unwrap_or_default();

                if let Some(is_starred) = view.starred {
                    row.col(|ui| {
                        let on = is_starred(key);
                        let star = if on { "★" } else { "☆" };
                        let resp = ui
                            .add(egui::Button::new(star).frame(false))
                            .on_hover_text(if on { "Remove from favorites" } else { "Add to favorites" });
                        if resp.clicked() {
                            action = Some(RowAction::Star(s!(key)));
                        }
                    });
                }

                let Some(cells) = data.rows.get(ri) else { return };
                for (ci, cell) in cells.iter().enumerate().take(cols) {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if let Some(c) = view.color.and_then(|f| f(ci, cell)) {
                            rt = rt.color(c);
                        }
                        let label = egui::Label::new(rt).sense(Sense::click()).selectable(false);
                        let resp = if view.numeric.contains(&ci) {
                            ui.centered_and_justified(|ui| ui.add(label)).inner
                        } else {
                            ui.add(label)
                        };
                        let resp = resp.on_hover_cursor(CursorIcon::PointingHand);
                        if resp.clicked() {
                            action = Some(RowAction::Open(s!(key)));
                        }
                    });
                }
            });
        });

    action
}
