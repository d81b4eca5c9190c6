/// Intent events emitted by the settings presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsIntent {
    /// A choice was picked for the setting `key`.
    ChoiceSelected { key: String, value: String },
    /// Persisting user values finished.
    SaveCompleted,
    /// Persisting user values failed.
    SaveFailed(String),
}

/// Effect events produced by the settings reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEffect {
    SaveCompleted,
    SaveFailed(String),
}

/// Settings event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    Intent(SettingsIntent),
    Effect(SettingsEffect),
}
