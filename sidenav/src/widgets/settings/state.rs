use crate::settings::SettingsRegistry;

/// Settings registry plus persistence bookkeeping.
#[derive(Debug)]
pub(super) struct SettingsState {
    registry: SettingsRegistry,
    save_in_flight: bool,
    save_queued: bool,
    last_error: Option<String>,
}

impl SettingsState {
    pub(super) fn new(registry: SettingsRegistry) -> Self {
        Self {
            registry,
            save_in_flight: false,
            save_queued: false,
            last_error: None,
        }
    }

    pub(super) fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    pub(super) fn registry_mut(&mut self) -> &mut SettingsRegistry {
        &mut self.registry
    }

    pub(super) fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    /// Return whether a change arrived while a save was running.
    pub(super) fn has_queued_save(&self) -> bool {
        self.save_queued
    }

    pub(super) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(super) fn mark_saving(&mut self) {
        self.save_in_flight = true;
        self.save_queued = false;
        self.last_error = None;
    }

    pub(super) fn queue_save(&mut self) {
        self.save_queued = true;
    }

    pub(super) fn mark_saved(&mut self) {
        self.save_in_flight = false;
    }

    pub(super) fn mark_failed(&mut self, message: String) {
        self.save_in_flight = false;
        self.last_error = Some(message);
    }

    pub(super) fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }
}
