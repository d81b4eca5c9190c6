use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sidenav_menu::{FooterItem, MenuGroup, MenuModel, MenuSubGroup};

use super::errors::BootstrapError;

/// Environment variable naming the frontend config file.
pub(crate) const CONFIG_ENV_VAR: &str = "SIDENAV_CONFIG";

const DEFAULT_TITLE: &str = "Buildbot";
const DEFAULT_BASE_URL: &str = "http://localhost:8010/";

/// Frontend configuration supplied by the deployment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct FrontendConfig {
    pub(crate) title: String,
    pub(crate) base_url: String,
    /// Plugin key to plugin-specific configuration.
    pub(crate) plugins: BTreeMap<String, serde_json::Value>,
    /// Setting key (`<group>.<item>`) to deployment default.
    pub(crate) ui_default_config: BTreeMap<String, serde_json::Value>,
    pub(crate) menu: MenuModel,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            base_url: String::from(DEFAULT_BASE_URL),
            plugins: BTreeMap::new(),
            ui_default_config: BTreeMap::new(),
            menu: default_menu(),
        }
    }
}

impl FrontendConfig {
    /// Return the panel title, falling back to the config title.
    pub(crate) fn app_title(&self) -> &str {
        if self.menu.app_title.is_empty() {
            &self.title
        } else {
            &self.menu.app_title
        }
    }
}

/// Resolve the config file location from CLI arguments and environment.
///
/// The first positional argument wins over the environment variable.
pub(crate) fn config_path_from(
    mut args: impl Iterator<Item = String>,
    env_value: Option<String>,
) -> Option<PathBuf> {
    args.next()
        .or(env_value)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the frontend config, degrading to built-in defaults on failure.
pub(crate) fn load_frontend_config() -> FrontendConfig {
    let path = config_path_from(
        std::env::args().skip(1),
        std::env::var(CONFIG_ENV_VAR).ok(),
    );
    let Some(path) = path else {
        log::info!("no frontend config given, using built-in menu");
        return FrontendConfig::default();
    };

    match load_config_from_path(&path) {
        Ok(config) => {
            log::info!("frontend config loaded from {}", path.display());
            config
        },
        Err(err) => {
            log::warn!(
                "frontend config {} unusable, using defaults: {err}",
                path.display()
            );
            FrontendConfig::default()
        },
    }
}

pub(crate) fn load_config_from_path(
    path: &Path,
) -> Result<FrontendConfig, BootstrapError> {
    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

fn default_menu() -> MenuModel {
    MenuModel {
        app_title: String::from(DEFAULT_TITLE),
        groups: vec![
            MenuGroup::link("home", "Home", "/").with_icon("home"),
            MenuGroup::container(
                "builds",
                "Builds",
                vec![
                    MenuSubGroup::link("builders", "Builders", "/builders"),
                    MenuSubGroup::link("workers", "Workers", "/workers"),
                    MenuSubGroup::link(
                        "buildrequests",
                        "Build Requests",
                        "/buildrequests",
                    ),
                    MenuSubGroup::link(
                        "pendingbuildrequests",
                        "Pending Buildrequests",
                        "/pendingbuildrequests",
                    ),
                ],
            )
            .with_icon("cogs"),
            MenuGroup::link("changes", "Changes", "/changes")
                .with_icon("exchange"),
            MenuGroup::link("about", "About", "/about").with_icon("info"),
        ],
        footer_items: vec![
            FooterItem::new("Settings", "/settings"),
            FooterItem::new("About", "/about"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{FrontendConfig, config_path_from, load_config_from_path};
    use crate::bootstrap::errors::BootstrapError;

    #[test]
    fn given_cli_argument_and_env_when_resolved_then_argument_wins() {
        let args = vec![String::from("/etc/console.json")].into_iter();

        let path = config_path_from(args, Some(String::from("/tmp/env.json")));

        assert_eq!(path, Some(PathBuf::from("/etc/console.json")));
    }

    #[test]
    fn given_only_env_when_resolved_then_env_path_used() {
        let path = config_path_from(
            std::iter::empty(),
            Some(String::from("/tmp/env.json")),
        );

        assert_eq!(path, Some(PathBuf::from("/tmp/env.json")));
        assert_eq!(
            config_path_from(std::iter::empty(), Some(String::from("  "))),
            None
        );
    }

    #[test]
    fn given_default_config_when_built_then_menu_has_builds_container() {
        let config = FrontendConfig::default();

        let builds = config
            .menu
            .group("builds")
            .expect("default menu should contain builds");

        assert!(builds.is_expandable());
        assert_eq!(builds.sub_groups.len(), 4);
        assert_eq!(config.menu.footer_items.len(), 2);
        assert!(config.menu.duplicate_names().is_empty());
        assert_eq!(config.app_title(), "Buildbot");
    }

    #[test]
    fn given_partial_json_when_loaded_then_missing_fields_take_defaults() {
        let root =
            TempDir::new().expect("temporary directory should be created");
        let path = root.path().join("config.json");
        let payload = r#"{
            "title": "CI",
            "plugins": {"waterfall_view": {}},
            "menu": {
                "groups": [
                    {"name": "home", "caption": "Home", "route": "/"},
                    {
                        "name": "builds",
                        "caption": "Builds",
                        "subGroups": [
                            {"name": "builders", "caption": "Builders", "route": "/builders"}
                        ]
                    }
                ]
            }
        }"#;
        fs::write(&path, payload).expect("config payload should be written");

        let config =
            load_config_from_path(&path).expect("config should parse");

        assert_eq!(config.title, "CI");
        assert_eq!(config.app_title(), "CI");
        assert_eq!(config.base_url, "http://localhost:8010/");
        assert!(config.plugins.contains_key("waterfall_view"));
        assert_eq!(config.menu.groups.len(), 2);
        assert_eq!(config.menu.groups[1].sub_groups.len(), 1);
        assert!(config.menu.footer_items.is_empty());
    }

    #[test]
    fn given_broken_json_when_loaded_then_json_error_returned() {
        let root =
            TempDir::new().expect("temporary directory should be created");
        let path = root.path().join("config.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let err = load_config_from_path(&path)
            .expect_err("broken config should fail");

        assert!(matches!(err, BootstrapError::Json(_)));
    }

    #[test]
    fn given_missing_file_when_loaded_then_io_error_returned() {
        let err = load_config_from_path(&PathBuf::from(
            "/nonexistent/sidenav/config.json",
        ))
        .expect_err("missing config should fail");

        assert!(matches!(err, BootstrapError::Io(_)));
    }
}
