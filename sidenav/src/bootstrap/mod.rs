//! Client bootstrap: frontend config, settings, plugins and data endpoints
//! resolved once before the first frame.

mod config;
mod endpoints;
mod errors;
mod plugins;

pub(crate) use config::{FrontendConfig, load_frontend_config};
pub(crate) use endpoints::Endpoints;
pub(crate) use plugins::{PluginAsset, resolve_plugin_assets};

use crate::settings::{
    SettingsError, SettingsLoad, SettingsLoadStatus, SettingsRegistry,
    load_settings,
};

/// Everything the shell needs after startup.
#[derive(Debug)]
pub(crate) struct Bootstrap {
    pub(crate) config: FrontendConfig,
    pub(crate) endpoints: Option<Endpoints>,
    pub(crate) plugins: Vec<PluginAsset>,
    pub(crate) settings: SettingsRegistry,
}

impl Bootstrap {
    /// Load config and persisted settings from their default locations.
    pub(crate) fn load() -> Self {
        Self::from_parts(load_frontend_config(), load_settings())
    }

    /// Assemble the bootstrap from an already loaded config and settings.
    ///
    /// Settings resolve in three layers: registered defaults, then the
    /// deployment defaults from the config, then persisted user values.
    pub(crate) fn from_parts(
        config: FrontendConfig,
        persisted: Result<SettingsLoad, SettingsError>,
    ) -> Self {
        for name in config.menu.duplicate_names() {
            log::warn!("menu entry `{name}` is not unique");
        }

        let endpoints = match Endpoints::from_base_url(&config.base_url) {
            Ok(endpoints) => {
                log::info!(
                    "data endpoints: rest {} websocket {}",
                    endpoints.rest(),
                    endpoints.websocket()
                );
                Some(endpoints)
            },
            Err(err) => {
                log::warn!("base url `{}` rejected: {err}", config.base_url);
                None
            },
        };

        let plugins = resolve_plugin_assets(&config.plugins);

        let mut settings = SettingsRegistry::with_builtin_groups();
        settings.apply_default_overrides(&config.ui_default_config);
        match persisted {
            Ok(load) => {
                let (persisted, status) = load.into_parts();
                match status {
                    SettingsLoadStatus::Loaded => {
                        settings.apply_user_values(persisted.values);
                    },
                    SettingsLoadStatus::Missing => {
                        log::debug!("no persisted settings yet");
                    },
                    SettingsLoadStatus::Invalid(message) => {
                        log::warn!("settings file invalid: {message}");
                    },
                }
            },
            Err(err) => log::warn!("settings read failed: {err}"),
        }

        Self {
            config,
            endpoints,
            plugins,
            settings,
        }
    }
}
