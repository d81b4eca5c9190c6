use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// User setting values as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedSettings {
    #[serde(default)]
    pub(crate) values: BTreeMap<String, String>,
}

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: PersistedSettings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: PersistedSettings,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (PersistedSettings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn save_settings(
    settings: &PersistedSettings,
) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                PersistedSettings::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<PersistedSettings>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            PersistedSettings::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_settings_to_path(
    path: &Path,
    settings: &PersistedSettings,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("sidenav")
            .join("settings.json");
    }

    std::env::temp_dir().join("sidenav").join("settings.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
