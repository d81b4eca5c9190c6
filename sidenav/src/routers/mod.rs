pub(crate) mod keyboard;
pub(crate) mod settings;
pub(crate) mod sidebar;
