// tests/teams_view.rs
use chrono::{TimeZone, Utc};

use pl_portal::api::{FavoriteTeam, Team};
use pl_portal::table::{self, OutputFormat};
use pl_portal::views::teams::{filter_and_sort, TeamFilter, TeamSort, TeamsQuery};

fn team(id: &str, name: &str, short: &str, year: &str) -> Team {
    Team {
        id_team: id.into(),
        str_team: name.into(),
        str_team_short: Some(short.into()),
        int_formed_year: Some(year.into()),
        ..Team::default()
    }
}

fn league() -> Vec<Team> {
    vec![
        team("133610", "Chelsea", "CHE", "1905"),
        team("133604", "Arsenal", "ARS", "1886"),
        team("133615", "Manchester United", "MUN", "1878"),
        team("133613", "Manchester City", "MCI", "1880"),
    ]
}

#[test]
fn search_hits_short_names_case_insensitively() {
    let teams = league();
    let q = TeamsQuery { search: "man".into(), ..TeamsQuery::default() };
    let names: Vec<&str> = filter_and_sort(&teams, &q, &[]).iter().map(|t| t.str_team.as_str()).collect();
    assert_eq!(names, vec!["Manchester City", "Manchester United"]);

    let q = TeamsQuery { search: "ars".into(), ..TeamsQuery::default() };
    assert_eq!(filter_and_sort(&teams, &q, &[]).len(), 1);
}

#[test]
fn founded_sort_and_favorites_filter() {
    let teams = league();
    let q = TeamsQuery { sort: TeamSort::Founded, ..TeamsQuery::default() };
    let ids: Vec<&str> = filter_and_sort(&teams, &q, &[]).iter().map(|t| t.id_team.as_str()).collect();
    assert_eq!(ids, vec!["133615", "133613", "133604", "133610"]);

    let added = Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap();
    let favs = vec![FavoriteTeam::from_team(&teams[0], added)];
    let q = TeamsQuery { filter: TeamFilter::Favorites, ..TeamsQuery::default() };
    let shown = filter_and_sort(&teams, &q, &favs);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].str_team, "Chelsea");
}

#[test]
fn teams_table_renders_as_csv() {
    let teams = league();
    let q = TeamsQuery::default();
    let t = table::teams_table(filter_and_sort(&teams, &q, &[]));
    let csv = table::render(&t, OutputFormat::Csv);
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("ID,Team,Short,Founded"));
    assert!(lines.next().unwrap().starts_with("133604,Arsenal,ARS,1886"));
    assert_eq!(csv.lines().count(), 5);
}
