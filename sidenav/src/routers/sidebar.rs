use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent, SidebarIntent};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    app.widgets.sidebar.reduce(event).map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Navigate { route } => {
            Task::done(AppEvent::Navigate { route })
        },
    }
}
