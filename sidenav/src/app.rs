#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};
use sidenav_menu::BestPrefixMatcher;

use crate::bootstrap::{Bootstrap, Endpoints, FrontendConfig, PluginAsset};
use crate::location::Location;
use crate::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::settings::{SettingsEvent, SettingsWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Settings widget
    Settings(SettingsEvent),
    // Direct operations
    Navigate { route: String },
    Keyboard(iced::keyboard::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) config: FrontendConfig,
    pub(crate) endpoints: Option<Endpoints>,
    pub(crate) plugins: Vec<PluginAsset>,
    pub(crate) location: Location,
    pub(crate) matcher: BestPrefixMatcher,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let Bootstrap {
            config,
            endpoints,
            plugins,
            settings,
        } = Bootstrap::load();

        log::info!(
            "console `{}` ready with {} menu group(s) and {} plugin(s)",
            config.app_title(),
            config.menu.groups.len(),
            plugins.len()
        );

        let widgets = Widgets {
            sidebar: SidebarWidget::new(),
            settings: SettingsWidget::new(settings),
        };

        let app = App {
            theme: AppTheme::default(),
            config,
            endpoints,
            plugins,
            location: Location::default(),
            matcher: BestPrefixMatcher,
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
