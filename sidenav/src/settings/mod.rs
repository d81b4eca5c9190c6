//! User settings: an explicit registry of setting groups plus its on-disk
//! persistence.

mod errors;
mod registry;
mod storage;

pub(crate) use errors::SettingsError;
pub(crate) use registry::{ChoiceEntry, SettingsRegistry};
pub(crate) use storage::{
    PersistedSettings, SettingsLoad, SettingsLoadStatus, load_settings,
    save_settings,
};
