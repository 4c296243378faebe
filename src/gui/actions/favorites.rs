// src/gui/actions/favorites.rs
//
// Store mutations with user feedback. The store itself notifies its
// subscribers; these only add the toasts.

use crate::{api::Team, favorites::Toggled, gui::app::App};

pub fn toggle(app: &mut App, team: &Team) {
    match app.favorites.toggle(team) {
        Ok(Toggled::Added) => {
            logf!("UI: favorite + {}", team.str_team);
            app.toasts.success(format!("{} added to favorites", team.str_team));
        }
        Ok(Toggled::Removed) => {
            logf!("UI: favorite - {}", team.str_team);
            app.toasts.success(format!("{} removed from favorites", team.str_team));
        }
        Err(e) => {
            loge!("UI: favorite toggle failed for {}: {}", team.id_team, e);
            app.toasts.error(format!("Failed to update favorites: {e}"));
        }
    }
}

/// Remove by id (the side panel only has the stored record, not a full team).
pub fn remove(app: &mut App, team_id: &str, name: &str) {
    match app.favorites.remove(team_id) {
        Ok(true) => app.toasts.success(format!("{name} removed from favorites")),
        Ok(false) => logd!("UI: {} was not a favorite", team_id),
        Err(e) => {
            loge!("UI: favorite remove failed for {}: {}", team_id, e);
            app.toasts.error(format!("Failed to remove favorite: {e}"));
        }
    }
}

pub fn clear(app: &mut App) {
    let n = app.favorites.len();
    match app.favorites.clear() {
        Ok(()) => app.toasts.success(format!("Cleared {n} favorite(s)")),
        Err(e) => {
            loge!("UI: favorites clear failed: {}", e);
            app.toasts.error(format!("Failed to clear favorites: {e}"));
        }
    }
}
