// src/config/state.rs
use chrono::NaiveDate;

use super::options::{AppOptions, Route};
use crate::views::{schedule::ScheduleTab, teams::TeamsQuery};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Where we are now
    pub route: Route,
    /// Back stack for detail pages
    pub history: Vec<Route>,

    /// Teams page: search / sort / favorites-only
    pub teams_query: TeamsQuery,

    /// Schedule page: team filter ("all" when None), tab and week anchor
    pub schedule_team: Option<String>,
    pub schedule_tab: ScheduleTab,
    pub schedule_week: NaiveDate,
    pub schedule_compact: bool,

    /// Favorites page: search over teams that can still be added
    pub favorites_search: String,
}

impl GuiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            route: Route::Home,
            history: Vec::new(),
            teams_query: TeamsQuery::default(),
            schedule_team: None,
            schedule_tab: ScheduleTab::Upcoming,
            schedule_week: today,
            schedule_compact: false,
            favorites_search: s!(),
        }
    }

    /// Go somewhere new. Detail pages push the current route so Back works;
    /// top-level tabs reset the stack.
    pub fn navigate(&mut self, to: Route) {
        if to == self.route { return; }
        match to {
            Route::Team(_) | Route::Match(_) => {
                let prev = std::mem::replace(&mut self.route, to);
                self.history.push(prev);
            }
            _ => {
                self.history.clear();
                self.route = to;
            }
        }
    }

    /// Pop the back stack. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => { self.route = prev; true }
            None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions, today: NaiveDate) -> Self {
        Self { options, gui: GuiState::new(today) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 17).unwrap()
    }

    #[test]
    fn detail_routes_stack_and_tabs_reset() {
        let mut gui = GuiState::new(day());
        gui.navigate(Route::Teams);
        gui.navigate(Route::Team(s!("133604")));
        gui.navigate(Route::Match(s!("2052711")));
        assert_eq!(gui.history, vec![Route::Teams, Route::Team(s!("133604"))]);

        assert!(gui.back());
        assert_eq!(gui.route, Route::Team(s!("133604")));

        gui.navigate(Route::Standings);
        assert!(gui.history.is_empty());
        assert!(!gui.back());
        assert_eq!(gui.route, Route::Standings);
    }
}
