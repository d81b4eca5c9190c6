use sidenav_menu::{Activation, Transition};

/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Pointer entered the sidebar zone.
    PointerEntered,
    /// Pointer left the sidebar zone.
    PointerExited,
    /// Press on the sidebar zone not captured by a row or control.
    ZonePressed,
    /// Enter key pressed anywhere in the window.
    EnterKeyPressed,
    /// Header control (hamburger or thumbtack) pressed.
    Apply(Transition),
    /// Projected row activated.
    Activate(Activation),
    /// Panel title pressed.
    TitlePressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// Change the console location.
    Navigate { route: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
