use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A browser the user registered for opening bookmarks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Browser {
    pub name: String,
    pub path: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Per-installation preferences, stored as a single object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Name of an entry in `available_browsers`, or a path to an executable
    pub default_browser: String,
    pub available_browsers: Vec<Browser>,
    pub view_mode: ViewMode,
    pub sidebar_collapsed: bool,
    pub theme: Theme,
    pub language: Language,
    pub auto_fetch_icon: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_browser: String::new(),
            available_browsers: Vec::new(),
            view_mode: ViewMode::Card,
            sidebar_collapsed: false,
            theme: Theme::Light,
            language: Language::En,
            auto_fetch_icon: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub default_browser: Option<String>,
    pub available_browsers: Option<Vec<Browser>>,
    pub view_mode: Option<ViewMode>,
    pub sidebar_collapsed: Option<bool>,
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub auto_fetch_icon: Option<bool>,
}

impl From<&Settings> for SettingsPatch {
    fn from(s: &Settings) -> Self {
        Self {
            default_browser: Some(s.default_browser.clone()),
            available_browsers: Some(s.available_browsers.clone()),
            view_mode: Some(s.view_mode),
            sidebar_collapsed: Some(s.sidebar_collapsed),
            theme: Some(s.theme),
            language: Some(s.language),
            auto_fetch_icon: Some(s.auto_fetch_icon),
        }
    }
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.default_browser {
            self.default_browser = v;
        }
        if let Some(v) = patch.available_browsers {
            self.available_browsers = v;
        }
        if let Some(v) = patch.view_mode {
            self.view_mode = v;
        }
        if let Some(v) = patch.sidebar_collapsed {
            self.sidebar_collapsed = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.language {
            self.language = v;
        }
        if let Some(v) = patch.auto_fetch_icon {
            self.auto_fetch_icon = v;
        }
    }

    /// Executable path for the default browser, if one is configured.
    ///
    /// A name registered in `available_browsers` resolves to its path;
    /// anything else is taken as a path as-is.
    pub fn default_browser_path(&self) -> Option<String> {
        if self.default_browser.is_empty() {
            return None;
        }
        let path = self
            .available_browsers
            .iter()
            .find(|b| b.name == self.default_browser)
            .map(|b| b.path.clone())
            .unwrap_or_else(|| self.default_browser.clone());
        Some(path).filter(|p| !p.is_empty())
    }
}

macro_rules! lowercase_enum_str {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $($ty::$variant => $text,)+
                };
                f.write_str(s)
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    other => Err(format!("invalid {}: '{}'", stringify!($ty), other)),
                }
            }
        }
    };
}

lowercase_enum_str!(ViewMode { Card => "card", List => "list" });
lowercase_enum_str!(Theme { Light => "light", Dark => "dark" });
lowercase_enum_str!(Language { En => "en", Zh => "zh" });

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.view_mode, ViewMode::Card);
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.language, Language::En);
        assert!(s.auto_fetch_icon);
        assert!(!s.sidebar_collapsed);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(s.theme, Theme::Dark);
        assert!(s.auto_fetch_icon);
    }

    #[test]
    fn test_apply_patch() {
        let mut s = Settings::default();
        s.apply(SettingsPatch {
            view_mode: Some(ViewMode::List),
            sidebar_collapsed: Some(true),
            ..Default::default()
        });
        assert_eq!(s.view_mode, ViewMode::List);
        assert!(s.sidebar_collapsed);
        assert_eq!(s.theme, Theme::Light);
    }

    #[test]
    fn test_patch_from_current_is_identity() {
        let mut s = Settings::default();
        s.theme = Theme::Dark;
        let before = s.clone();
        s.apply(SettingsPatch::from(&before));
        assert_eq!(s, before);
    }

    #[rstest]
    #[case("", vec![], None)]
    #[case("/usr/bin/firefox", vec![], Some("/usr/bin/firefox"))]
    #[case("Chrome", vec![("Chrome", "/opt/chrome")], Some("/opt/chrome"))]
    #[case("Chrome", vec![("Chrome", "")], None)]
    fn test_default_browser_path(
        #[case] default_browser: &str,
        #[case] browsers: Vec<(&str, &str)>,
        #[case] expected: Option<&str>,
    ) {
        let s = Settings {
            default_browser: default_browser.to_string(),
            available_browsers: browsers
                .into_iter()
                .map(|(name, path)| Browser {
                    name: name.to_string(),
                    path: path.to_string(),
                    icon: String::new(),
                })
                .collect(),
            ..Default::default()
        };
        assert_eq!(s.default_browser_path().as_deref(), expected);
    }

    #[rstest]
    #[case("card", Ok(ViewMode::Card))]
    #[case("LIST", Ok(ViewMode::List))]
    fn test_view_mode_from_str(#[case] input: &str, #[case] expected: Result<ViewMode, String>) {
        assert_eq!(input.parse::<ViewMode>(), expected);
    }

    #[test]
    fn test_theme_from_str_rejects_unknown() {
        assert!("blue".parse::<Theme>().is_err());
    }
}
