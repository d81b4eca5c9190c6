mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SettingsEffect, SettingsEvent, SettingsIntent};
use iced::Task;
use model::SettingsViewModel;
use sidenav_menu::ExpansionPolicy;
use state::SettingsState;

use crate::settings::SettingsRegistry;

/// Settings page owning the settings registry.
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    /// Create the widget around a bootstrapped registry.
    pub(crate) fn new(registry: SettingsRegistry) -> Self {
        Self {
            state: SettingsState::new(registry),
        }
    }

    /// Reduce an intent into registry updates and effects.
    pub(crate) fn reduce(
        &mut self,
        event: SettingsIntent,
    ) -> Task<SettingsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return a read-only view model for the settings page.
    pub(crate) fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            entries: self.state.registry().choice_entries(),
            is_saving: self.state.is_saving(),
            last_error: self.state.last_error(),
        }
    }

    /// Return the sidebar expansion policy currently selected.
    pub(crate) fn expansion_policy(&self) -> ExpansionPolicy {
        self.state.registry().expansion_policy()
    }
}
