// src/table.rs
//
// Flat table projection shared by the GUI grid and the CLI printers.
// Each row carries a key (team or event id) so a click or a pipe can get
// back to the record.

use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::api::{Event, FavoriteTeam, Present, Team, TeamStanding};
use crate::time::to_wib_display;
use crate::views::{
    matches::MatchStatus,
    standings::{form, win_percentage, zone},
    team::format_capacity,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Parallel to `rows`.
    pub keys: Vec<String>,
}

impl TableData {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
            keys: Vec::new(),
        }
    }

    pub fn push(&mut self, key: &str, row: Vec<String>) {
        self.keys.push(s!(key));
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn key(&self, row: usize) -> Option<&str> {
        self.keys.get(row).map(String::as_str)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

/* ---------------- Projections ---------------- */

fn opt(v: &Option<String>) -> String {
    s!(v.present().unwrap_or(""))
}

pub fn teams_table<'a>(teams: impl IntoIterator<Item = &'a Team>) -> TableData {
    let mut t = TableData::new(&["ID", "Team", "Short", "Founded", "Stadium", "Capacity", "Manager"]);
    for team in teams {
        t.push(&team.id_team, vec![
            team.id_team.clone(),
            team.str_team.clone(),
            opt(&team.str_team_short),
            opt(&team.int_formed_year),
            opt(&team.str_stadium),
            format_capacity(team.int_stadium_capacity.present()).unwrap_or_default(),
            opt(&team.str_manager),
        ]);
    }
    t
}

pub fn events_table<'a>(events: impl IntoIterator<Item = &'a Event>) -> TableData {
    let mut t = TableData::new(&["ID", "Kickoff (WIB)", "Round", "Home", "Score", "Away", "Venue", "Status"]);
    for e in events {
        t.push(&e.id_event, vec![
            e.id_event.clone(),
            to_wib_display(&e.date_event, e.str_time.as_deref()),
            opt(&e.int_round),
            e.str_home_team.clone(),
            e.score_line(),
            e.str_away_team.clone(),
            opt(&e.str_venue),
            MatchStatus::of(e).to_string(),
        ]);
    }
    t
}

pub fn standings_table(rows: &[TeamStanding]) -> TableData {
    let mut t = TableData::new(&[
        "Rank", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Win %", "Form", "Zone",
    ]);
    let num = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
    for r in rows {
        let form_str: String = form(r.str_form.as_deref()).into_iter().map(|f| f.letter()).collect();
        t.push(&r.id_team, vec![
            r.int_rank.to_string(),
            r.str_team.clone(),
            r.int_played.to_string(),
            r.int_win.to_string(),
            num(r.int_draw),
            r.int_loss.to_string(),
            num(r.int_goals_for),
            num(r.int_goals_against),
            r.int_goal_difference.map(|n| format!("{n:+}")).unwrap_or_default(),
            r.int_points.to_string(),
            win_percentage(r.int_win, r.int_played),
            form_str,
            zone(r.int_rank).map(|z| z.to_string()).unwrap_or_default(),
        ]);
    }
    t
}

pub fn favorites_table(favs: &[FavoriteTeam]) -> TableData {
    let mut t = TableData::new(&["ID", "Team", "Added"]);
    for f in favs {
        t.push(&f.id_team, vec![
            f.id_team.clone(),
            f.str_team.clone(),
            f.date_added.format("%Y-%m-%d %H:%M UTC").to_string(),
        ]);
    }
    t
}

/// Two-column key/value listing (team or league details).
pub fn fields_table(fields: &[(&str, String)]) -> TableData {
    let mut t = TableData::new(&["Field", "Value"]);
    for (k, v) in fields.iter().filter(|(_, v)| !v.is_empty()) {
        t.push(k, vec![s!(*k), v.clone()]);
    }
    t
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn to_delimited(t: &TableData, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, &t.headers, sep);
    for r in &t.rows {
        let _ = write_row(&mut buf, r, sep);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Space-padded columns, header underlined.
pub fn to_text(t: &TableData) -> String {
    let width = |i: usize| {
        t.rows
            .iter()
            .filter_map(|r| r.get(i))
            .chain(t.headers.get(i))
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
    };
    let widths: Vec<usize> = (0..t.ncols()).map(width).collect();

    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        join!(padded.join("  ").trim_end(), "\n")
    };

    let mut out = line(&t.headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&rule));
    for r in &t.rows {
        out.push_str(&line(r));
    }
    out
}

/// Array of objects keyed by header.
pub fn to_json(t: &TableData) -> String {
    let rows: Vec<Value> = t
        .rows
        .iter()
        .map(|r| {
            let obj: Map<String, Value> = t
                .headers
                .iter()
                .zip(r)
                .map(|(h, c)| (h.clone(), Value::String(c.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();
    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| s!("[]"))
}

pub fn render(t: &TableData, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => to_text(t),
        OutputFormat::Csv => to_delimited(t, ','),
        OutputFormat::Tsv => to_delimited(t, '\t'),
        OutputFormat::Json => join!(to_json(t), "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> TableData {
        let mut t = TableData::new(&["Team", "Note"]);
        t.push("1", vec![s!("Arsenal"), s!("say \"hi\", ok")]);
        t.push("2", vec![s!("Spurs"), s!("")]);
        t
    }

    #[test]
    fn csv_quotes_what_needs_quoting() {
        assert_eq!(
            to_delimited(&small(), ','),
            "Team,Note\nArsenal,\"say \"\"hi\"\", ok\"\nSpurs,\n"
        );
        // commas are harmless in TSV
        assert_eq!(to_delimited(&small(), '\t').lines().nth(1), Some("Arsenal\t\"say \"\"hi\"\", ok\""));
    }

    #[test]
    fn text_is_aligned() {
        let mut t = TableData::new(&["A", "Bee"]);
        t.push("k", vec![s!("long cell"), s!("x")]);
        assert_eq!(to_text(&t), "A          Bee\n---------  ---\nlong cell  x\n");
    }

    #[test]
    fn json_objects_keyed_by_header() {
        let v: Value = serde_json::from_str(&to_json(&small())).unwrap();
        assert_eq!(v[0]["Team"], "Arsenal");
        assert_eq!(v[1]["Note"], "");
        assert_eq!(small().key(1), Some("2"));
    }

    #[test]
    fn standings_row_projection() {
        let row = TeamStanding {
            int_rank: 19,
            id_team: s!("7"),
            str_team: s!("Ipswich"),
            int_played: 10,
            int_win: 1,
            int_loss: 5,
            int_draw: Some(4),
            int_goal_difference: Some(-9),
            str_form: Some(s!("LDLLW")),
            ..TeamStanding::default()
        };
        let t = standings_table(&[row]);
        let r = &t.rows[0];
        assert_eq!(r[4], "4");
        assert_eq!(r[6], "");
        assert_eq!(r[8], "-9");
        assert_eq!(r[10], "0.100");
        assert_eq!(r[11], "LDLLW");
        assert_eq!(r[12], "Relegation");
    }
}
