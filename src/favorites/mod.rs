// src/favorites/mod.rs
//
// Favorite teams live as one JSON array under a single storage key.
// `Favorites` is the thin repository over that key; `FavoritesStore` owns the
// current list for a running front end and tells subscribers when it changes.

pub mod storage;
pub mod store;

use chrono::Utc;

use crate::api::{FavoriteTeam, Team};
use crate::config::consts::FAVORITES_KEY;
use crate::error::StoreError;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{FavoritesStore, SubscriptionId, Toggled};

pub struct Favorites<S: Storage> {
    storage: S,
}

impl<S: Storage> Favorites<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S { &self.storage }

    /// Stored favorites in insertion order. A missing key, a read failure or
    /// a value that is not a favorites array all read as empty.
    pub fn list(&self) -> Vec<FavoriteTeam> {
        let raw = match self.storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                loge!("Favorites: read failed: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<FavoriteTeam>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                loge!("Favorites: stored value is not a favorites list: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, list: &[FavoriteTeam]) -> Result<(), StoreError> {
        let json = serde_json::to_string(list)?;
        self.storage.set_item(FAVORITES_KEY, &json)
    }

    /// Append `team` unless its id is already stored. Returns false for a duplicate.
    pub fn add(&self, team: &Team) -> Result<bool, StoreError> {
        let mut list = self.list();
        if list.iter().any(|f| f.id_team == team.id_team) {
            return Ok(false);
        }
        list.push(FavoriteTeam::from_team(team, Utc::now()));
        self.save(&list)?;
        logf!("Favorites: added {} ({})", team.str_team, team.id_team);
        Ok(true)
    }

    /// Drop every entry with `team_id`. Returns whether anything was removed.
    pub fn remove(&self, team_id: &str) -> Result<bool, StoreError> {
        let list = self.list();
        let before = list.len();
        let kept: Vec<FavoriteTeam> = list.into_iter().filter(|f| f.id_team != team_id).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.save(&kept)?;
        logf!("Favorites: removed {}", team_id);
        Ok(true)
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.list().iter().any(|f| f.id_team == team_id)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove_item(FAVORITES_KEY)?;
        logf!("Favorites: cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id_team: s!(id),
            str_team: s!(name),
            str_badge: Some(join!("https://img/", id, ".png")),
            ..Team::default()
        }
    }

    #[test]
    fn add_is_append_if_absent() {
        let favs = Favorites::new(MemoryStorage::new());
        assert!(favs.add(&team("133604", "Arsenal")).unwrap());
        assert!(favs.add(&team("133602", "Liverpool")).unwrap());
        assert!(!favs.add(&team("133604", "Arsenal")).unwrap());

        let list = favs.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].str_team, "Arsenal");
        assert_eq!(list[0].str_team_badge.as_deref(), Some("https://img/133604.png"));
        assert_eq!(list[1].str_team, "Liverpool");
    }

    #[test]
    fn remove_reports_whether_anything_went() {
        let favs = Favorites::new(MemoryStorage::new());
        favs.add(&team("1", "A")).unwrap();
        assert!(!favs.remove("2").unwrap());
        assert!(favs.remove("1").unwrap());
        assert!(!favs.contains("1"));
        assert!(favs.list().is_empty());
    }

    #[test]
    fn corrupt_value_reads_as_empty() {
        let st = MemoryStorage::new();
        st.set_item(FAVORITES_KEY, "{not json").unwrap();
        let favs = Favorites::new(st);
        assert!(favs.list().is_empty());
        // and the next write replaces it
        assert!(favs.add(&team("1", "A")).unwrap());
        assert_eq!(favs.list().len(), 1);
    }

    #[test]
    fn stored_json_uses_api_field_names() {
        let favs = Favorites::new(MemoryStorage::new());
        favs.add(&team("133604", "Arsenal")).unwrap();
        let raw = favs.storage().get_item(FAVORITES_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &v[0];
        assert_eq!(first["idTeam"], "133604");
        assert_eq!(first["strTeam"], "Arsenal");
        assert_eq!(first["strTeamBadge"], "https://img/133604.png");
        assert!(first["dateAdded"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn clear_removes_the_key() {
        let favs = Favorites::new(MemoryStorage::new());
        favs.add(&team("1", "A")).unwrap();
        favs.clear().unwrap();
        assert_eq!(favs.storage().get_item(FAVORITES_KEY).unwrap(), None);
    }
}
