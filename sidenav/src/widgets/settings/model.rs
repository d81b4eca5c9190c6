use crate::settings::ChoiceEntry;

/// Read-only snapshot of the settings page.
#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel<'a> {
    pub(crate) entries: Vec<ChoiceEntry<'a>>,
    pub(crate) is_saving: bool,
    pub(crate) last_error: Option<&'a str>,
}
