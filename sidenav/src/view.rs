use iced::widget::{Column, Space, Stack, column, container, row, text};
use iced::{Element, Length, Theme};
use sidenav_menu::HOME_ROUTE;

use super::{App, AppEvent};
use crate::widgets::settings::SettingsEvent;
use crate::widgets::settings::view::{self as settings_view, SettingsProps};
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarProps};
use crate::widgets::sidebar::{
    SIDEBAR_PANEL_WIDTH, SIDEBAR_RAIL_WIDTH, SidebarCtx, SidebarEvent,
};

/// Location of the settings page.
const SETTINGS_ROUTE: &str = "/settings";

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 12.0;
const PAGE_TITLE_SIZE: f32 = 20.0;
const PAGE_TEXT_SIZE: f32 = 13.0;

/// Render the sidebar on top of the page content.
///
/// The tree has the same shape in every panel state, so the sidebar zone
/// and the page keep their widget state: the page sits in the base layer
/// behind a spacer and the sidebar is always the overlay layer. A pinned
/// panel widens the spacer to push the page aside; an open unpinned panel
/// covers it.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let ctx = SidebarCtx {
        menu: &app.config.menu,
        location: app.location.path(),
        policy: app.widgets.settings.expansion_policy(),
        matcher: &app.matcher,
    };
    let vm = app.widgets.sidebar.vm(&ctx);
    let offset = content_offset(vm.is_pinned);
    let page_caption = vm.current_caption().map(str::to_owned);

    let sidebar = sidebar_view::view(SidebarProps {
        vm,
        theme: &app.theme,
    })
    .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));
    let content = page(app, page_caption);

    let base = row![Space::new().width(Length::Fixed(offset)), content]
        .width(Length::Fill)
        .height(Length::Fill);
    let overlay = row![sidebar].height(Length::Fill);

    Stack::with_children(vec![base.into(), overlay.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Width reserved left of the page for the sidebar.
fn content_offset(is_pinned: bool) -> f32 {
    if is_pinned {
        SIDEBAR_PANEL_WIDTH
    } else {
        SIDEBAR_RAIL_WIDTH
    }
}

fn page(
    app: &App,
    caption: Option<String>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    match app.location.path() {
        SETTINGS_ROUTE => settings_view::view(SettingsProps {
            vm: app.widgets.settings.vm(),
            theme: &app.theme,
        })
        .map(|event| AppEvent::Settings(SettingsEvent::Intent(event))),
        HOME_ROUTE => home_page(app),
        path => {
            let title = caption.unwrap_or_else(|| path.to_owned());
            placeholder_page(app, title)
        },
    }
}

fn home_page(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = app.theme.iced_palette();

    let mut lines = Column::new().spacing(PAGE_SPACING / 2.0);
    match &app.endpoints {
        Some(endpoints) => {
            lines = lines
                .push(
                    text(format!("REST: {}", endpoints.rest()))
                        .size(PAGE_TEXT_SIZE),
                )
                .push(
                    text(format!("WebSocket: {}", endpoints.websocket()))
                        .size(PAGE_TEXT_SIZE),
                );
        },
        None => {
            lines = lines.push(
                text("Data endpoints unavailable")
                    .size(PAGE_TEXT_SIZE)
                    .color(palette.yellow),
            );
        },
    }

    if app.plugins.is_empty() {
        lines = lines.push(
            text("No plugins configured")
                .size(PAGE_TEXT_SIZE)
                .color(palette.dim_foreground),
        );
    }
    for plugin in &app.plugins {
        lines = lines.push(
            text(format!(
                "Plugin {}: {} {}",
                plugin.key, plugin.script, plugin.stylesheet
            ))
            .size(PAGE_TEXT_SIZE)
            .color(palette.dim_foreground),
        );
    }

    container(
        column![
            text(app.config.app_title().to_owned()).size(PAGE_TITLE_SIZE),
            lines
        ]
        .spacing(PAGE_SPACING),
    )
    .padding(PAGE_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn placeholder_page(
    app: &App,
    title: String,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = app.theme.iced_palette();

    container(
        column![
            text(title).size(PAGE_TITLE_SIZE),
            text(app.location.path())
                .size(PAGE_TEXT_SIZE)
                .color(palette.dim_foreground),
        ]
        .spacing(PAGE_SPACING),
    )
    .padding(PAGE_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
