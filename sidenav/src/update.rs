use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Sidebar widget
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        // Settings widget
        AppEvent::Settings(event) => routers::settings::route(app, event),
        // Direct operations
        AppEvent::Navigate { route } => {
            app.location.navigate(&route);
            Task::none()
        },
        AppEvent::Keyboard(event) => routers::keyboard::route(app, event),
    }
}
