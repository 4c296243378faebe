// src/favorites/store.rs
//
// The one owner of the favorites list in a running front end. Views read
// `teams()` and compare `revision()`; anything that needs a push gets one
// through `subscribe`.

use crate::api::{FavoriteTeam, Team};
use crate::error::StoreError;

use super::{Favorites, Storage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

type Listener = Box<dyn FnMut(&[FavoriteTeam]) + Send>;

pub struct FavoritesStore<S: Storage> {
    repo: Favorites<S>,
    teams: Vec<FavoriteTeam>,
    revision: u64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl<S: Storage> FavoritesStore<S> {
    /// Load the current list from `storage`.
    pub fn open(storage: S) -> Self {
        let repo = Favorites::new(storage);
        let teams = repo.list();
        logd!("Favorites: opened with {} team(s)", teams.len());
        Self { repo, teams, revision: 0, next_id: 0, listeners: Vec::new() }
    }

    pub fn teams(&self) -> &[FavoriteTeam] { &self.teams }

    pub fn len(&self) -> usize { self.teams.len() }

    pub fn is_empty(&self) -> bool { self.teams.is_empty() }

    pub fn is_favorite(&self, team_id: &str) -> bool {
        self.teams.iter().any(|f| f.id_team == team_id)
    }

    /// Bumped on every change the store observes.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn subscribe(&mut self, listener: impl FnMut(&[FavoriteTeam]) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.teams = self.repo.list();
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.teams);
        }
    }

    pub fn add(&mut self, team: &Team) -> Result<bool, StoreError> {
        let added = self.repo.add(team)?;
        if added {
            self.changed();
        } else {
            // already stored, maybe by another process: catch the cache up
            self.reload();
        }
        Ok(added)
    }

    pub fn remove(&mut self, team_id: &str) -> Result<bool, StoreError> {
        let removed = self.repo.remove(team_id)?;
        if removed {
            self.changed();
        } else {
            self.reload();
        }
        Ok(removed)
    }

    /// Decides against what storage holds now, not the cached list, so a
    /// team another process already added gets removed rather than re-added.
    pub fn toggle(&mut self, team: &Team) -> Result<Toggled, StoreError> {
        self.reload();
        if self.is_favorite(&team.id_team) {
            self.remove(&team.id_team)?;
            Ok(Toggled::Removed)
        } else {
            self.add(team)?;
            Ok(Toggled::Added)
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        let had_any = !self.teams.is_empty();
        self.repo.clear()?;
        if had_any {
            self.changed();
        }
        Ok(())
    }

    /// Re-read storage (another process may have written it). Subscribers
    /// hear about it only when the list actually differs.
    pub fn reload(&mut self) -> bool {
        let fresh = self.repo.list();
        if fresh == self.teams {
            return false;
        }
        logd!("Favorites: storage changed outside this store ({} → {})", self.teams.len(), fresh.len());
        self.changed();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::favorites::{FileStorage, MemoryStorage};

    fn team(id: &str) -> Team {
        Team { id_team: s!(id), str_team: join!("Team ", id), ..Team::default() }
    }

    #[test]
    fn toggle_flips_and_notifies() {
        let mut store = FavoritesStore::open(MemoryStorage::new());
        let seen = Arc::new(Mutex::new(Vec::<usize>::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |teams| sink.lock().unwrap().push(teams.len()));

        assert_eq!(store.toggle(&team("1")).unwrap(), Toggled::Added);
        assert!(store.is_favorite("1"));
        assert_eq!(store.toggle(&team("1")).unwrap(), Toggled::Removed);
        assert!(!store.is_favorite("1"));

        assert_eq!(*seen.lock().unwrap(), vec![1, 0]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn no_op_mutations_stay_quiet() {
        let mut store = FavoritesStore::open(MemoryStorage::new());
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        assert!(!store.remove("missing").unwrap());
        store.clear().unwrap();
        assert!(!store.reload());
        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn toggle_sees_writes_from_another_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = FavoritesStore::open(FileStorage::in_dir(dir.path()));
        let mut gui = FavoritesStore::open(FileStorage::in_dir(dir.path()));

        cli.add(&team("1")).unwrap();
        assert!(!gui.is_favorite("1"));

        assert_eq!(gui.toggle(&team("1")).unwrap(), Toggled::Removed);
        assert!(!gui.is_favorite("1"));
        assert_eq!(gui.revision(), 2);
        assert!(cli.reload());
        assert!(cli.is_empty());
    }

    #[test]
    fn duplicate_add_refreshes_a_stale_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = FavoritesStore::open(FileStorage::in_dir(dir.path()));
        let mut gui = FavoritesStore::open(FileStorage::in_dir(dir.path()));

        cli.add(&team("1")).unwrap();
        assert!(!gui.add(&team("1")).unwrap());
        assert!(gui.is_favorite("1"));
        assert_eq!(gui.revision(), 1);

        cli.remove("1").unwrap();
        assert!(!gui.remove("1").unwrap());
        assert!(gui.is_empty());
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = FavoritesStore::open(MemoryStorage::new());
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.add(&team("1")).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add(&team("2")).unwrap();
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
