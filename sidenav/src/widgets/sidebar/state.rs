use sidenav_menu::{SidebarState, Transition};

/// Runtime state owned by the sidebar widget.
#[derive(Debug, Default)]
pub(super) struct SidebarWidgetState {
    machine: SidebarState,
    pointer_inside: bool,
}

impl SidebarWidgetState {
    pub(super) fn machine(&self) -> &SidebarState {
        &self.machine
    }

    pub(super) fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub(super) fn set_pointer_inside(&mut self, inside: bool) {
        self.pointer_inside = inside;
    }

    pub(super) fn apply(&mut self, transition: &Transition) -> bool {
        self.machine.apply(transition)
    }
}
