use std::collections::BTreeMap;

use sidenav_menu::{
    ExpansionPolicy, POLICY_SETTING_CAPTION, POLICY_SETTING_GROUP,
    POLICY_SETTING_KEY, POLICY_SETTING_NAME,
};

use super::errors::SettingsError;

/// A single user-facing setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingItem {
    /// Value restricted to a fixed list of labels.
    Choice {
        name: String,
        caption: String,
        choices: Vec<String>,
        default_value: String,
    },
}

impl SettingItem {
    fn name(&self) -> &str {
        match self {
            SettingItem::Choice { name, .. } => name,
        }
    }
}

/// Named group of settings registered once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingGroup {
    pub(crate) name: String,
    pub(crate) caption: Option<String>,
    pub(crate) items: Vec<SettingItem>,
}

/// Read-only row describing a registered choice and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChoiceEntry<'a> {
    pub(crate) key: String,
    /// Group caption, or the group name when it has none.
    pub(crate) group: &'a str,
    pub(crate) caption: &'a str,
    pub(crate) choices: &'a [String],
    pub(crate) value: &'a str,
}

/// Explicit settings registry threaded through the app.
///
/// Keys are `<group>.<item>`. A key resolves to the user value when one was
/// set and to the registered default otherwise.
#[derive(Debug, Default)]
pub(crate) struct SettingsRegistry {
    groups: Vec<SettingGroup>,
    values: BTreeMap<String, String>,
}

impl SettingsRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in group registered.
    pub(crate) fn with_builtin_groups() -> Self {
        let mut registry = Self::new();
        for group in builtin_groups() {
            if let Err(err) = registry.register_setting_group(group) {
                log::warn!("builtin settings registration failed: {err}");
            }
        }
        registry
    }

    /// Register a group. Each group name may be registered once.
    pub(crate) fn register_setting_group(
        &mut self,
        group: SettingGroup,
    ) -> Result<(), SettingsError> {
        if self.groups.iter().any(|known| known.name == group.name) {
            return Err(SettingsError::DuplicateGroup { name: group.name });
        }

        log::debug!(
            "registered setting group {} with {} item(s)",
            group.name,
            group.items.len()
        );
        self.groups.push(group);
        Ok(())
    }

    /// Return the current value of a choice setting.
    pub(crate) fn choice_value(&self, key: &str) -> Option<&str> {
        let item = self.find_item(key)?;
        match item {
            SettingItem::Choice { default_value, .. } => Some(
                self.values
                    .get(key)
                    .map(String::as_str)
                    .unwrap_or(default_value),
            ),
        }
    }

    /// Set a choice value selected by the user.
    pub(crate) fn set_choice_value(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), SettingsError> {
        let item = self.find_item(key).ok_or_else(|| {
            SettingsError::UnknownSetting {
                key: key.to_owned(),
            }
        })?;

        match item {
            SettingItem::Choice { choices, .. } => {
                if !choices.iter().any(|choice| choice == value) {
                    return Err(SettingsError::InvalidChoice {
                        key: key.to_owned(),
                        value: value.to_owned(),
                    });
                }
            },
        }

        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    /// Replace registered defaults with deployment-provided ones.
    ///
    /// Entries naming unknown settings or illegal choices are skipped.
    pub(crate) fn apply_default_overrides(
        &mut self,
        overrides: &BTreeMap<String, serde_json::Value>,
    ) {
        for (key, value) in overrides {
            let Some(value) = value.as_str() else {
                log::warn!("ignoring non-string default for {key}");
                continue;
            };
            let Some(item) = self.find_item_mut(key) else {
                log::warn!("ignoring default for unknown setting {key}");
                continue;
            };

            match item {
                SettingItem::Choice {
                    choices,
                    default_value,
                    ..
                } => {
                    if choices.iter().any(|choice| choice == value) {
                        *default_value = value.to_owned();
                    } else {
                        log::warn!(
                            "ignoring default `{value}` for {key}: \
                             not a registered choice"
                        );
                    }
                },
            }
        }
    }

    /// Apply persisted user values, skipping stale or illegal entries.
    pub(crate) fn apply_user_values(
        &mut self,
        values: BTreeMap<String, String>,
    ) {
        for (key, value) in values {
            if let Err(err) = self.set_choice_value(&key, &value) {
                log::warn!("ignoring persisted setting: {err}");
            }
        }
    }

    /// Return values explicitly chosen by the user, for persistence.
    pub(crate) fn user_values(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    /// Return every registered choice with its current value.
    pub(crate) fn choice_entries(&self) -> Vec<ChoiceEntry<'_>> {
        let mut entries = Vec::new();
        for group in &self.groups {
            for item in &group.items {
                match item {
                    SettingItem::Choice {
                        name,
                        caption,
                        choices,
                        default_value,
                    } => {
                        let key = setting_key(&group.name, name);
                        let value = self
                            .values
                            .get(&key)
                            .map(String::as_str)
                            .unwrap_or(default_value);
                        entries.push(ChoiceEntry {
                            key,
                            group: group
                                .caption
                                .as_deref()
                                .unwrap_or(&group.name),
                            caption,
                            choices,
                            value,
                        });
                    },
                }
            }
        }
        entries
    }

    /// Return the sidebar expansion policy currently in effect.
    pub(crate) fn expansion_policy(&self) -> ExpansionPolicy {
        ExpansionPolicy::from_setting(self.choice_value(POLICY_SETTING_KEY))
    }

    fn find_item(&self, key: &str) -> Option<&SettingItem> {
        let (group_name, item_name) = key.split_once('.')?;
        self.groups
            .iter()
            .find(|group| group.name == group_name)?
            .items
            .iter()
            .find(|item| item.name() == item_name)
    }

    fn find_item_mut(&mut self, key: &str) -> Option<&mut SettingItem> {
        let (group_name, item_name) = key.split_once('.')?;
        self.groups
            .iter_mut()
            .find(|group| group.name == group_name)?
            .items
            .iter_mut()
            .find(|item| item.name() == item_name)
    }
}

/// Build the `<group>.<item>` key of a setting.
pub(crate) fn setting_key(group: &str, item: &str) -> String {
    format!("{group}.{item}")
}

fn builtin_groups() -> Vec<SettingGroup> {
    vec![SettingGroup {
        name: String::from(POLICY_SETTING_GROUP),
        caption: None,
        items: vec![SettingItem::Choice {
            name: String::from(POLICY_SETTING_NAME),
            caption: String::from(POLICY_SETTING_CAPTION),
            choices: ExpansionPolicy::choices(),
            default_value: ExpansionPolicy::default().label().to_owned(),
        }],
    }]
}
