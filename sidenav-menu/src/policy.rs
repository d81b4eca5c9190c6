use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Settings group that owns the expansion policy choice.
pub const POLICY_SETTING_GROUP: &str = "Home";
/// Item name of the expansion policy choice within its group.
pub const POLICY_SETTING_NAME: &str = "sidebar_menu_groups_expand_behavior";
/// Fully qualified `<group>.<item>` key of the expansion policy choice.
pub const POLICY_SETTING_KEY: &str =
    "Home.sidebar_menu_groups_expand_behavior";
/// Human readable caption shown next to the choice.
pub const POLICY_SETTING_CAPTION: &str =
    "Sidebar menu groups expansion behavior";

const EXPAND_ON_CLICK_LABEL: &str = "Expand on click";
const EXPAND_ALWAYS_LABEL: &str = "Always expand";

/// How groups with sub-groups are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionPolicy {
    /// Only the group the user clicked is expanded.
    #[default]
    ExpandOnClick,
    /// Every group is permanently expanded and ignores clicks.
    ExpandAlways,
}

/// Error returned when a settings value names no known policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sidebar expansion policy: {value}")]
pub struct PolicyParseError {
    value: String,
}

impl ExpansionPolicy {
    /// Every legal policy, in the order the choices are offered.
    pub const ALL: [ExpansionPolicy; 2] =
        [ExpansionPolicy::ExpandOnClick, ExpansionPolicy::ExpandAlways];

    /// Return the settings label stored for this policy.
    pub fn label(self) -> &'static str {
        match self {
            ExpansionPolicy::ExpandOnClick => EXPAND_ON_CLICK_LABEL,
            ExpansionPolicy::ExpandAlways => EXPAND_ALWAYS_LABEL,
        }
    }

    /// Return the choice labels in registration order.
    pub fn choices() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|policy| policy.label().to_owned())
            .collect()
    }

    /// Resolve a raw settings value, falling back to the default policy
    /// when the value is missing or unrecognized.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("{err}; using {}", Self::default());
                Self::default()
            }),
        }
    }
}

impl FromStr for ExpansionPolicy {
    type Err = PolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.label() == value)
            .ok_or_else(|| PolicyParseError {
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for ExpansionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpansionPolicy, POLICY_SETTING_GROUP, POLICY_SETTING_KEY};

    #[test]
    fn given_registered_labels_when_parsed_then_matching_policy_returned() {
        assert_eq!(
            "Expand on click".parse::<ExpansionPolicy>(),
            Ok(ExpansionPolicy::ExpandOnClick)
        );
        assert_eq!(
            "Always expand".parse::<ExpansionPolicy>(),
            Ok(ExpansionPolicy::ExpandAlways)
        );
    }

    #[test]
    fn given_unknown_value_when_resolved_then_falls_back_to_expand_on_click()
    {
        assert!("sometimes".parse::<ExpansionPolicy>().is_err());
        assert_eq!(
            ExpansionPolicy::from_setting(Some("sometimes")),
            ExpansionPolicy::ExpandOnClick
        );
        assert_eq!(
            ExpansionPolicy::from_setting(None),
            ExpansionPolicy::ExpandOnClick
        );
    }

    #[test]
    fn given_policy_choices_when_listed_then_default_comes_first() {
        let choices = ExpansionPolicy::choices();

        assert_eq!(choices, vec!["Expand on click", "Always expand"]);
        assert_eq!(choices[0], ExpansionPolicy::default().label());
    }

    #[test]
    fn given_setting_key_when_split_then_group_prefix_matches() {
        let (group, _) = POLICY_SETTING_KEY
            .split_once('.')
            .expect("key should be qualified");
        assert_eq!(group, POLICY_SETTING_GROUP);
    }
}
