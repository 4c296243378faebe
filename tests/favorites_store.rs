// tests/favorites_store.rs
use std::sync::{Arc, Mutex};

use pl_portal::api::Team;
use pl_portal::favorites::{Favorites, FavoritesStore, FileStorage, Storage, Toggled};

fn team(id: &str, name: &str) -> Team {
    Team { id_team: id.into(), str_team: name.into(), str_badge: Some(format!("https://x/{id}.png")), ..Team::default() }
}

#[test]
fn favorites_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FavoritesStore::open(FileStorage::in_dir(dir.path()));
        assert!(store.add(&team("133604", "Arsenal")).unwrap());
        assert!(store.add(&team("133610", "Chelsea")).unwrap());
        assert!(!store.add(&team("133604", "Arsenal")).unwrap());
    }
    let store = FavoritesStore::open(FileStorage::in_dir(dir.path()));
    let names: Vec<&str> = store.teams().iter().map(|f| f.str_team.as_str()).collect();
    assert_eq!(names, vec!["Arsenal", "Chelsea"]);
    assert_eq!(store.teams()[0].badge(), Some("https://x/133604.png"));
}

#[test]
fn second_store_sees_writes_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut gui = FavoritesStore::open(FileStorage::in_dir(dir.path()));
    let mut cli = FavoritesStore::open(FileStorage::in_dir(dir.path()));

    let heard = Arc::new(Mutex::new(Vec::<usize>::new()));
    let sink = Arc::clone(&heard);
    gui.subscribe(move |teams| sink.lock().unwrap().push(teams.len()));

    assert!(!gui.reload());
    assert_eq!(cli.toggle(&team("133604", "Arsenal")).unwrap(), Toggled::Added);
    assert!(gui.reload());
    assert!(gui.is_favorite("133604"));

    cli.clear().unwrap();
    assert!(gui.reload());
    assert!(!gui.reload());
    assert_eq!(*heard.lock().unwrap(), vec![1, 0]);
}

#[test]
fn truncated_storage_file_does_not_block_favorites() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("storage.json"), "{truncated").unwrap();

    let mut store = FavoritesStore::open(FileStorage::in_dir(dir.path()));
    assert!(store.is_empty());
    assert!(store.add(&team("133604", "Arsenal")).unwrap());
    store.clear().unwrap();
    assert!(store.add(&team("133610", "Chelsea")).unwrap());

    let reopened = FavoritesStore::open(FileStorage::in_dir(dir.path()));
    assert_eq!(reopened.teams().len(), 1);
    assert!(dir.path().join("storage.json.bad").exists());
}

#[test]
fn corrupt_file_reads_as_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::in_dir(dir.path());
    storage.set_item("premier_league_favorite_teams", "{not a list").unwrap();

    let favs = Favorites::new(storage);
    assert!(favs.list().is_empty());
    assert!(favs.add(&team("133612", "Liverpool")).unwrap());
    assert_eq!(favs.list().len(), 1);
    assert!(favs.remove("133612").unwrap());
    assert!(!favs.remove("133612").unwrap());
}
