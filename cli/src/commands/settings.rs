use super::misc::OutputOptions;
use super::{AppContext, LinkCommand};
use linkcollection::error::{LinkError, Result};
use linkcollection::models::{Browser, SettingsPatch};

#[derive(Debug, Clone)]
pub enum SettingsCommand {
    Show(OutputOptions),
    Set(SettingsPatch),
    AddBrowser {
        name: String,
        path: String,
        icon: String,
    },
    RemoveBrowser {
        name: String,
    },
}

fn is_empty(patch: &SettingsPatch) -> bool {
    patch.default_browser.is_none()
        && patch.available_browsers.is_none()
        && patch.view_mode.is_none()
        && patch.sidebar_collapsed.is_none()
        && patch.theme.is_none()
        && patch.language.is_none()
        && patch.auto_fetch_icon.is_none()
}

impl LinkCommand for SettingsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            SettingsCommand::Show(output) => {
                let settings = ctx.store.get_settings();
                output.output_format().print_settings(&settings)
            }
            SettingsCommand::Set(patch) => {
                if is_empty(patch) {
                    return Err(LinkError::InvalidInput(
                        "No settings given to change".to_string(),
                    ));
                }
                ctx.store.update_settings(patch.clone())?;
                eprintln!("✓ Settings updated");
                Ok(())
            }
            SettingsCommand::AddBrowser { name, path, icon } => {
                if name.trim().is_empty() || path.trim().is_empty() {
                    return Err(LinkError::InvalidInput(
                        "Browser name and path are required".to_string(),
                    ));
                }
                let mut browsers = ctx.store.get_settings().available_browsers;
                let browser = Browser {
                    name: name.clone(),
                    path: path.clone(),
                    icon: icon.clone(),
                };
                match browsers.iter_mut().find(|b| b.name == *name) {
                    Some(existing) => *existing = browser,
                    None => browsers.push(browser),
                }
                ctx.store.update_settings(SettingsPatch {
                    available_browsers: Some(browsers),
                    ..Default::default()
                })?;
                eprintln!("✓ Registered browser {}", name);
                Ok(())
            }
            SettingsCommand::RemoveBrowser { name } => {
                let settings = ctx.store.get_settings();
                let mut browsers = settings.available_browsers;
                let before = browsers.len();
                browsers.retain(|b| b.name != *name);
                if browsers.len() == before {
                    return Err(LinkError::InvalidInput(format!(
                        "No browser named {}",
                        name
                    )));
                }

                // A default pointing at the removed entry falls back to the system browser
                let default_browser =
                    (settings.default_browser == *name).then(String::new);
                ctx.store.update_settings(SettingsPatch {
                    available_browsers: Some(browsers),
                    default_browser,
                    ..Default::default()
                })?;
                eprintln!("✓ Removed browser {}", name);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use linkcollection::models::Theme;

    #[test]
    fn test_set_theme() {
        let env = TestEnv::new();
        SettingsCommand::Set(SettingsPatch {
            theme: Some(Theme::Dark),
            ..Default::default()
        })
        .execute(&env.ctx())
        .unwrap();

        let settings = env.store.get_settings();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.auto_fetch_icon);
    }

    #[test]
    fn test_set_nothing_is_rejected() {
        let env = TestEnv::new();
        let result = SettingsCommand::Set(SettingsPatch::default()).execute(&env.ctx());
        assert!(matches!(result, Err(LinkError::InvalidInput(_))));
    }

    #[test]
    fn test_add_browser_replaces_same_name() {
        let env = TestEnv::new();
        for path in ["/usr/bin/firefox", "/opt/firefox/firefox"] {
            SettingsCommand::AddBrowser {
                name: "Firefox".to_string(),
                path: path.to_string(),
                icon: String::new(),
            }
            .execute(&env.ctx())
            .unwrap();
        }

        let browsers = env.store.get_settings().available_browsers;
        assert_eq!(browsers.len(), 1);
        assert_eq!(browsers[0].path, "/opt/firefox/firefox");
    }

    #[test]
    fn test_remove_default_browser_resets_default() {
        let env = TestEnv::new();
        SettingsCommand::AddBrowser {
            name: "Firefox".to_string(),
            path: "/usr/bin/firefox".to_string(),
            icon: String::new(),
        }
        .execute(&env.ctx())
        .unwrap();
        env.store
            .update_settings(SettingsPatch {
                default_browser: Some("Firefox".to_string()),
                ..Default::default()
            })
            .unwrap();

        SettingsCommand::RemoveBrowser {
            name: "Firefox".to_string(),
        }
        .execute(&env.ctx())
        .unwrap();

        let settings = env.store.get_settings();
        assert!(settings.available_browsers.is_empty());
        assert!(settings.default_browser.is_empty());
    }

    #[test]
    fn test_remove_unknown_browser() {
        let env = TestEnv::new();
        let result = SettingsCommand::RemoveBrowser {
            name: "Lynx".to_string(),
        }
        .execute(&env.ctx());
        assert!(matches!(result, Err(LinkError::InvalidInput(_))));
    }
}
