pub(crate) mod settings;
pub(crate) mod sidebar;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: sidebar::SidebarWidget,
    pub(crate) settings: settings::SettingsWidget,
}
