//! Entity handlers over the JSON data files.
//!
//! Every mutation loads the whole collection, applies a single change and
//! rewrites the file. Referential cleanup (folder and tag deletion) is a
//! linear pass over bookmarks.json done here, not by the storage layer.

mod bookmarks;
mod folders;
mod history;
mod settings;
mod tags;

use crate::error::{LinkError, Result};
use crate::models::{Bookmark, Folder, Settings, Tag};
use crate::search::SearchHistory;
use crate::storage::{
    Storage, BOOKMARKS_FILE, FOLDERS_FILE, SEARCH_HISTORY_FILE, SETTINGS_FILE, TAGS_FILE,
};
use std::path::{Path, PathBuf};

pub struct LinkStore {
    storage: Storage,
}

impl LinkStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Storage::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.storage.data_dir()
    }

    pub(crate) fn load_bookmarks(&self) -> Vec<Bookmark> {
        self.storage.read_json(BOOKMARKS_FILE, Vec::new())
    }

    pub(crate) fn load_folders(&self) -> Vec<Folder> {
        self.storage.read_json(FOLDERS_FILE, Vec::new())
    }

    pub(crate) fn load_tags(&self) -> Vec<Tag> {
        self.storage.read_json(TAGS_FILE, Vec::new())
    }

    pub(crate) fn load_settings(&self) -> Settings {
        self.storage.read_json(SETTINGS_FILE, Settings::default())
    }

    pub(crate) fn save_bookmarks(&self, bookmarks: &[Bookmark], message: &str) -> Result<()> {
        self.save(BOOKMARKS_FILE, bookmarks, message)
    }

    pub(crate) fn save_folders(&self, folders: &[Folder], message: &str) -> Result<()> {
        self.save(FOLDERS_FILE, folders, message)
    }

    pub(crate) fn save_tags(&self, tags: &[Tag], message: &str) -> Result<()> {
        self.save(TAGS_FILE, tags, message)
    }

    pub(crate) fn load_search_history(&self) -> SearchHistory {
        self.storage
            .read_json(SEARCH_HISTORY_FILE, SearchHistory::default())
    }

    pub(crate) fn save_search_history(&self, history: &SearchHistory, message: &str) -> Result<()> {
        self.save(SEARCH_HISTORY_FILE, history, message)
    }

    pub(crate) fn save_settings(&self, settings: &Settings, message: &str) -> Result<()> {
        self.save(SETTINGS_FILE, settings, message)
    }

    fn save<T: serde::Serialize + ?Sized>(
        &self,
        filename: &str,
        data: &T,
        message: &str,
    ) -> Result<()> {
        if self.storage.write_json(filename, data) {
            Ok(())
        } else {
            Err(LinkError::write_failure(message))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LinkStore;
    use tempfile::TempDir;

    pub struct TestEnv {
        pub store: LinkStore,
        _dir: TempDir,
    }

    impl TestEnv {
        pub fn new() -> Self {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let store = LinkStore::open(dir.path());
            Self { store, _dir: dir }
        }
    }
}
