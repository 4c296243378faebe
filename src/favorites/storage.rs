// src/favorites/storage.rs
//
// String key/value storage with local-storage semantics: values are opaque
// strings, a missing key reads as None.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::consts::STORAGE_FILE;
use crate::error::StoreError;

pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process storage; nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.lock().unwrap_or_else(|p| p.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(|p| p.into_inner());
        items.insert(s!(key), s!(value));
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(|p| p.into_inner());
        items.remove(key);
        Ok(())
    }
}

/// Distinguishes temp files of writers inside one process.
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// One JSON object file mapping keys to string values.
/// Read on every access so other processes' writes are picked up;
/// written through a per-writer temp file + rename, so readers never see a
/// half-written file.
///
/// There is no cross-process lock: two writers racing on read-modify-write
/// (GUI and CLI saving at the same instant) can lose one of the updates.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// `<dir>/storage.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self { path: dir.join(STORAGE_FILE) }
    }

    /// A file that is not a JSON string map is moved to `storage.json.bad`
    /// and read as empty, so the next write starts clean.
    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&text) {
            Ok(map) => Ok(map),
            Err(e) => {
                let bad = self.path.with_extension("json.bad");
                loge!("Storage: {} is corrupt ({}), moving it to {}", self.path.display(), e, bad.display());
                fs::rename(&self.path, &bad)?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = self.path.with_extension(format!("json.{}.{}.tmp", process::id(), seq));
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(serde_json::to_string_pretty(map)?.as_bytes())?;
            f.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(s!(key), s!(value));
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let st = FileStorage::in_dir(&dir.path().join("nested"));

        assert_eq!(st.get_item("k").unwrap(), None);
        st.set_item("k", "[1,2]").unwrap();
        st.set_item("other", "x").unwrap();
        assert_eq!(st.get_item("k").unwrap().as_deref(), Some("[1,2]"));

        st.remove_item("k").unwrap();
        assert_eq!(st.get_item("k").unwrap(), None);
        assert_eq!(st.get_item("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn second_handle_sees_first_handles_writes() {
        let dir = tempfile::tempdir().unwrap();
        let a = FileStorage::in_dir(dir.path());
        let b = FileStorage::in_dir(dir.path());
        a.set_item("k", "v").unwrap();
        assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn corrupt_file_is_moved_aside_and_writable_again() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(STORAGE_FILE);
        fs::write(&file, "{truncated").unwrap();

        let st = FileStorage::in_dir(dir.path());
        assert_eq!(st.get_item("k").unwrap(), None);
        assert_eq!(fs::read_to_string(dir.path().join("storage.json.bad")).unwrap(), "{truncated");

        st.set_item("k", "v").unwrap();
        assert_eq!(st.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn writes_leave_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let st = FileStorage::in_dir(dir.path());
        for i in 0..3 {
            st.set_item("k", &i.to_string()).unwrap();
        }
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![STORAGE_FILE]);
    }
}
