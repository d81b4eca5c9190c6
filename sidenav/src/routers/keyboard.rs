use iced::Task;
use iced::keyboard::{self, Key, key};

use super::sidebar;
use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Route window-level key presses to the widgets that react to them.
pub(crate) fn route(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Enter),
            ..
        } => sidebar::route(
            app,
            SidebarEvent::Intent(SidebarIntent::EnterKeyPressed),
        ),
        _ => Task::none(),
    }
}
