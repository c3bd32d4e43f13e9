use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const BOOKMARKS_FILE: &str = "bookmarks.json";
pub const FOLDERS_FILE: &str = "folders.json";
pub const TAGS_FILE: &str = "tags.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const SEARCH_HISTORY_FILE: &str = "search_history.json";

/// Whole-file JSON persistence under a single data directory.
///
/// Reads never fail: a missing or malformed file yields the caller's default.
/// Writes overwrite the file wholesale and report success as a flag.
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    pub fn data_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    pub fn read_json<T: DeserializeOwned>(&self, filename: &str, default: T) -> T {
        if let Err(e) = self.ensure_data_dir() {
            log::warn!("Could not create data directory {:?}: {}", self.data_dir, e);
        }

        let path = self.data_path(filename);
        if !path.exists() {
            return default;
        }

        let mut bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Error reading {}: {}", filename, e);
                return default;
            }
        };

        match simd_json::serde::from_slice::<T>(&mut bytes) {
            Ok(value) => {
                log::debug!("Loaded {}", filename);
                value
            }
            Err(e) => {
                log::warn!("Error parsing {}, using default: {}", filename, e);
                default
            }
        }
    }

    pub fn write_json<T: Serialize + ?Sized>(&self, filename: &str, data: &T) -> bool {
        if let Err(e) = self.ensure_data_dir() {
            log::error!("Error writing {}: {}", filename, e);
            return false;
        }

        let content = match serde_json::to_string_pretty(data) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Error serializing {}: {}", filename, e);
                return false;
            }
        };

        match fs::write(self.data_path(filename), content) {
            Ok(()) => {
                log::debug!("Saved {}", filename);
                true
            }
            Err(e) => {
                log::error!("Error writing {}: {}", filename, e);
                false
            }
        }
    }
}
