use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::settings::{
    SettingsEffect, SettingsEvent, SettingsIntent,
};

/// Route a settings event through widget reduction or back into intents.
pub(crate) fn route(app: &mut App, event: SettingsEvent) -> Task<AppEvent> {
    match event {
        SettingsEvent::Intent(event) => {
            app.widgets.settings.reduce(event).map(AppEvent::Settings)
        },
        SettingsEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: SettingsEffect) -> Task<AppEvent> {
    let intent = match effect {
        SettingsEffect::SaveCompleted => SettingsIntent::SaveCompleted,
        SettingsEffect::SaveFailed(message) => {
            SettingsIntent::SaveFailed(message)
        },
    };

    Task::done(AppEvent::Settings(SettingsEvent::Intent(intent)))
}
