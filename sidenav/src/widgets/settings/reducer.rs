use iced::Task;

use super::event::{SettingsEffect, SettingsEvent, SettingsIntent};
use super::state::SettingsState;
use crate::settings::{PersistedSettings, save_settings};

/// Reduce a settings intent into registry updates and effect tasks.
pub(crate) fn reduce(
    state: &mut SettingsState,
    event: SettingsIntent,
) -> Task<SettingsEvent> {
    match event {
        SettingsIntent::ChoiceSelected { key, value } => {
            let result = state.registry_mut().set_choice_value(&key, &value);
            if let Err(err) = result {
                log::warn!("setting update rejected: {err}");
                state.record_error(format!("{err}"));
                return Task::none();
            }

            log::info!("setting {key} set to `{value}`");
            if state.is_saving() {
                state.queue_save();
                return Task::none();
            }
            request_save_settings(state)
        },
        SettingsIntent::SaveCompleted => {
            log::debug!("settings saved");
            let queued = state.has_queued_save();
            state.mark_saved();
            save_queued_settings(state, queued)
        },
        SettingsIntent::SaveFailed(message) => {
            log::warn!("settings save failed: {message}");
            let queued = state.has_queued_save();
            state.mark_failed(message);
            save_queued_settings(state, queued)
        },
    }
}

/// Start the save deferred while the previous one was running.
fn save_queued_settings(
    state: &mut SettingsState,
    queued: bool,
) -> Task<SettingsEvent> {
    if !queued {
        return Task::none();
    }
    request_save_settings(state)
}

fn request_save_settings(state: &mut SettingsState) -> Task<SettingsEvent> {
    state.mark_saving();
    let settings = PersistedSettings {
        values: state.registry().user_values(),
    };

    Task::perform(
        async move { save_settings(&settings).map_err(|err| format!("{err}")) },
        |result| match result {
            Ok(()) => SettingsEvent::Effect(SettingsEffect::SaveCompleted),
            Err(message) => {
                SettingsEvent::Effect(SettingsEffect::SaveFailed(message))
            },
        },
    )
}
