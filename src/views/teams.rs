// src/views/teams.rs
use crate::api::{FavoriteTeam, Team};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamSort {
    #[default]
    Name,
    Founded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamFilter {
    #[default]
    All,
    Favorites,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamsQuery {
    pub search: String,
    pub sort: TeamSort,
    pub filter: TeamFilter,
}

/// Case-insensitive substring match over the team's names.
pub fn matches_search(team: &Team, needle_lower: &str) -> bool {
    if needle_lower.is_empty() { return true; }
    let hit = |s: &str| s.to_lowercase().contains(needle_lower);
    hit(&team.str_team)
        || team.str_team_short.as_deref().is_some_and(hit)
        || team.str_alternate.as_deref().is_some_and(hit)
}

/// Search, then favorites filter, then sort. Sorting is stable.
pub fn filter_and_sort<'a>(
    teams: &'a [Team],
    query: &TeamsQuery,
    favorites: &[FavoriteTeam],
) -> Vec<&'a Team> {
    let needle = query.search.trim().to_lowercase();
    let mut out: Vec<&Team> = teams
        .iter()
        .filter(|t| matches_search(t, &needle))
        .filter(|t| match query.filter {
            TeamFilter::All => true,
            TeamFilter::Favorites => favorites.iter().any(|f| f.id_team == t.id_team),
        })
        .collect();

    match query.sort {
        TeamSort::Name => out.sort_by_key(|t| t.str_team.to_lowercase()),
        TeamSort::Founded => out.sort_by_key(|t| t.formed_year()),
    }
    out
}
