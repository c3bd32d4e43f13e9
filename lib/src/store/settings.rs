use super::LinkStore;
use crate::error::Result;
use crate::models::{Settings, SettingsPatch};

impl LinkStore {
    pub fn get_settings(&self) -> Settings {
        self.load_settings()
    }

    /// Merge `patch` into the stored settings; only settings.json is written
    pub fn update_settings(&self, patch: SettingsPatch) -> Result<Settings> {
        let mut settings = self.load_settings();
        settings.apply(patch);

        self.save_settings(&settings, "Failed to save settings")?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{SettingsPatch, Theme, ViewMode};
    use crate::store::test_support::TestEnv;

    #[test]
    fn test_get_settings_defaults_when_absent() {
        let env = TestEnv::new();
        let settings = env.store.get_settings();
        assert_eq!(settings.view_mode, ViewMode::Card);
        assert!(!env.store.data_dir().join("settings.json").exists());
    }

    #[test]
    fn test_update_settings_persists() {
        let env = TestEnv::new();
        env.store
            .update_settings(SettingsPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .unwrap();

        let reloaded = env.store.get_settings();
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.view_mode, ViewMode::Card);
    }

    #[test]
    fn test_update_settings_touches_only_settings_file() {
        let env = TestEnv::new();
        let current = env.store.get_settings();
        env.store
            .update_settings(SettingsPatch::from(&current))
            .unwrap();

        let dir = env.store.data_dir();
        assert!(dir.join("settings.json").exists());
        assert!(!dir.join("bookmarks.json").exists());
        assert!(!dir.join("folders.json").exists());
        assert!(!dir.join("tags.json").exists());
    }
}
