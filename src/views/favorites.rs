// src/views/favorites.rs
use crate::api::{FavoriteTeam, Team};

/// Teams that can still be added, optionally narrowed by name / short name.
pub fn available<'a>(teams: &'a [Team], favorites: &[FavoriteTeam], search: &str) -> Vec<&'a Team> {
    let needle = search.trim().to_lowercase();
    teams
        .iter()
        .filter(|t| !favorites.iter().any(|f| f.id_team == t.id_team))
        .filter(|t| {
            needle.is_empty()
                || t.str_team.to_lowercase().contains(&needle)
                || t.str_team_short.as_deref().is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Full team records for the favorites, in favorites order. Favorites whose
/// team is not in `teams` are skipped.
pub fn favorite_teams<'a>(teams: &'a [Team], favorites: &[FavoriteTeam]) -> Vec<&'a Team> {
    favorites
        .iter()
        .filter_map(|f| teams.iter().find(|t| t.id_team == f.id_team))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn team(id: &str, name: &str, short: &str) -> Team {
        Team { id_team: s!(id), str_team: s!(name), str_team_short: Some(s!(short)), ..Team::default() }
    }

    #[test]
    fn available_excludes_favorites_and_searches() {
        let teams = vec![team("1", "Arsenal", "ARS"), team("2", "Chelsea", "CHE"), team("3", "Everton", "EVE")];
        let favs = vec![FavoriteTeam::from_team(&teams[0], Utc::now())];

        let names: Vec<&str> = available(&teams, &favs, "").iter().map(|t| t.str_team.as_str()).collect();
        assert_eq!(names, ["Chelsea", "Everton"]);

        let names: Vec<&str> = available(&teams, &favs, "eve").iter().map(|t| t.str_team.as_str()).collect();
        assert_eq!(names, ["Everton"]);

        assert!(available(&teams, &favs, "ars").is_empty());
    }

    #[test]
    fn favorite_teams_follow_favorites_order() {
        let teams = vec![team("1", "Arsenal", "ARS"), team("2", "Chelsea", "CHE")];
        let now = Utc::now();
        let favs = vec![
            FavoriteTeam::from_team(&teams[1], now),
            FavoriteTeam::from_team(&team("9", "Gone", "GON"), now),
            FavoriteTeam::from_team(&teams[0], now),
        ];
        let ids: Vec<&str> = favorite_teams(&teams, &favs).iter().map(|t| t.id_team.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}
