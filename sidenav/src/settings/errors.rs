use thiserror::Error;

/// Errors emitted while registering, updating, or persisting settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// Filesystem operation failed.
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
    /// A setting group with the same name was already registered.
    #[error("setting group `{name}` is already registered")]
    DuplicateGroup { name: String },
    /// No registered setting matches the key.
    #[error("unknown setting `{key}`")]
    UnknownSetting { key: String },
    /// The value is not one of the registered choices.
    #[error("`{value}` is not a valid choice for `{key}`")]
    InvalidChoice { key: String, value: String },
}
