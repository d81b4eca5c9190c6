/// Inputs accepted by the sidebar interaction state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Pointer entered the sidebar zone.
    Enter,
    /// Pointer left the sidebar zone. Ignored while pinned.
    Leave,
    /// Explicit open request (hamburger, click inside the panel).
    Show,
    /// Explicit close request (after navigation).
    Hide,
    /// Flip the pin lock. Rejected while the panel is inactive.
    TogglePinned,
    /// Open the named group, or close it when it is already open.
    ToggleGroup(String),
}

/// Interaction state of the sidebar panel.
///
/// Created once per session as `(active = false, pinned = false,
/// active_group = None)` and mutated only through the transitions below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    active: bool,
    pinned: bool,
    active_group: Option<String>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Return the currently expanded group under click-driven expansion.
    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    /// Return whether the panel should be drawn open.
    ///
    /// A pinned panel stays open even after an explicit [`Transition::Hide`].
    pub fn is_visible(&self) -> bool {
        self.active || self.pinned
    }

    /// Apply a transition. Returns whether the state changed.
    pub fn apply(&mut self, transition: &Transition) -> bool {
        let changed = match transition {
            Transition::Enter => self.enter(),
            Transition::Leave => self.leave(),
            Transition::Show => self.show(),
            Transition::Hide => self.hide(),
            Transition::TogglePinned => self.toggle_pinned(),
            Transition::ToggleGroup(name) => self.toggle_group(name),
        };

        log::debug!(
            "sidebar {transition:?}: changed={changed} active={} pinned={} group={:?}",
            self.active,
            self.pinned,
            self.active_group
        );
        changed
    }

    pub fn enter(&mut self) -> bool {
        self.set_active(true)
    }

    pub fn leave(&mut self) -> bool {
        if self.pinned {
            return false;
        }
        self.set_active(false)
    }

    pub fn show(&mut self) -> bool {
        self.set_active(true)
    }

    pub fn hide(&mut self) -> bool {
        self.set_active(false)
    }

    pub fn toggle_pinned(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.pinned = !self.pinned;
        true
    }

    pub fn toggle_group(&mut self, name: &str) -> bool {
        if self.active_group.as_deref() == Some(name) {
            self.active_group = None;
        } else {
            self.active_group = Some(name.to_owned());
        }
        true
    }

    fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }
}
