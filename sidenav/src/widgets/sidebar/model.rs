use sidenav_menu::{HeaderItem, ItemKind, RenderItem};

/// Width of the collapsed rail holding the hamburger.
pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 48.0;
/// Width of the open navigation panel.
pub(crate) const SIDEBAR_PANEL_WIDTH: f32 = 240.0;

/// Read-only snapshot projected for one render pass.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    pub(crate) header: HeaderItem,
    pub(crate) items: Vec<RenderItem>,
    pub(crate) is_visible: bool,
    pub(crate) is_pinned: bool,
}

impl SidebarViewModel {
    /// Return the caption of the row representing the current location.
    pub(crate) fn current_caption(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.current && item.kind != ItemKind::Footer)
            .map(|item| item.caption.as_str())
    }
}
