use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Second-level navigation entry nested under a [`MenuGroup`].
///
/// A sub-group without a route is rendered as a static section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSubGroup {
    pub name: String,
    pub caption: String,
    #[serde(default)]
    pub route: Option<String>,
}

impl MenuSubGroup {
    /// Create a navigable sub-group.
    pub fn link(name: &str, caption: &str, route: &str) -> Self {
        Self {
            name: name.to_owned(),
            caption: caption.to_owned(),
            route: Some(route.to_owned()),
        }
    }

    /// Create a non-interactive section label.
    pub fn label(name: &str, caption: &str) -> Self {
        Self {
            name: name.to_owned(),
            caption: caption.to_owned(),
            route: None,
        }
    }
}

/// Top-level navigation entry.
///
/// A group either exposes sub-groups (and only toggles expansion when
/// clicked) or behaves as a leaf with an optional direct route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub name: String,
    pub caption: String,
    /// Opaque glyph reference handed through to the renderer.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub sub_groups: Vec<MenuSubGroup>,
}

impl MenuGroup {
    /// Create a leaf group that navigates to `route`.
    pub fn link(name: &str, caption: &str, route: &str) -> Self {
        Self {
            name: name.to_owned(),
            caption: caption.to_owned(),
            icon: String::new(),
            route: Some(route.to_owned()),
            sub_groups: Vec::new(),
        }
    }

    /// Create a leaf group without a route.
    pub fn toggle(name: &str, caption: &str) -> Self {
        Self {
            name: name.to_owned(),
            caption: caption.to_owned(),
            icon: String::new(),
            route: None,
            sub_groups: Vec::new(),
        }
    }

    /// Create an expandable group holding `sub_groups`.
    pub fn container(
        name: &str,
        caption: &str,
        sub_groups: Vec<MenuSubGroup>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            caption: caption.to_owned(),
            icon: String::new(),
            route: None,
            sub_groups,
        }
    }

    /// Attach an icon reference.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_owned();
        self
    }

    /// Return whether the group renders as an expandable header.
    pub fn is_expandable(&self) -> bool {
        !self.sub_groups.is_empty()
    }
}

/// Plain navigation link shown in the panel footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterItem {
    pub caption: String,
    pub route: String,
}

impl FooterItem {
    pub fn new(caption: &str, route: &str) -> Self {
        Self {
            caption: caption.to_owned(),
            route: route.to_owned(),
        }
    }
}

/// Complete navigation description supplied once to the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuModel {
    #[serde(default)]
    pub app_title: String,
    /// Groups in display order.
    #[serde(default)]
    pub groups: Vec<MenuGroup>,
    #[serde(default)]
    pub footer_items: Vec<FooterItem>,
}

impl MenuModel {
    /// Find a group by name. Duplicates resolve to the first match.
    pub fn group(&self, name: &str) -> Option<&MenuGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Return names that break the unique-key rule.
    ///
    /// Group names must be unique across the model and sub-group names must
    /// be unique within their parent. Entries are reported as `group` or
    /// `group/sub_group`.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut duplicates = Vec::new();
        let mut seen_groups = BTreeSet::new();

        for group in &self.groups {
            if !seen_groups.insert(group.name.as_str()) {
                duplicates.push(group.name.clone());
            }

            let mut seen_subs = BTreeSet::new();
            for sub in &group.sub_groups {
                if !seen_subs.insert(sub.name.as_str()) {
                    duplicates.push(format!("{}/{}", group.name, sub.name));
                }
            }
        }

        duplicates
    }
}
