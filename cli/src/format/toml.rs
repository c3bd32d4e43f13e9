use crate::format::traits::RecordFormat;
use linkcollection::error::{LinkError, Result};
use serde::Serialize;

/// TOML cannot hold a bare array at the top level, so records are
/// rendered one table at a time.
pub struct TomlRecord<'a, T>(pub &'a T);

impl<T: Serialize> RecordFormat for TomlRecord<'_, T> {
    fn render(&self) -> Result<String> {
        toml::to_string_pretty(self.0).map_err(|e| LinkError::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkcollection::models::{Bookmark, Settings};

    #[test]
    fn test_toml_skips_missing_last_visited() {
        let bookmark = Bookmark {
            id: "b1".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        let out = TomlRecord(&bookmark).render().unwrap();
        assert!(out.contains("url = \"https://example.com\""));
        assert!(!out.contains("lastVisited"));
    }

    #[test]
    fn test_toml_settings() {
        let out = TomlRecord(&Settings::default()).render().unwrap();
        assert!(out.contains("autoFetchIcon = true"));
        assert!(out.contains("theme = \"light\""));
    }
}
