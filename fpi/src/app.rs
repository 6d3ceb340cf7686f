#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use fpi_ui_layout::{LayoutConfig, Viewport};
use iced::{Element, Subscription, Task, Theme};

use crate::host::DesktopHost;
use crate::shared::ui::fonts::FontsConfig;
use crate::solver::DetachedSolver;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::input::{InputEvent, InputWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::toast::{ToastEvent, ToastWidget};

pub(crate) const APP_TITLE: &str = "Fixed-Point Iteration Method";
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Chrome widget
    Chrome(ChromeEvent),
    // Input widget
    Input(InputEvent),
    // Toast widget
    Toast(ToastEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) chrome: ChromeWidget,
    pub(crate) input: InputWidget,
    pub(crate) toast: ToastWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) widgets: Widgets,
    pub(crate) fonts: FontsConfig,
    pub(crate) theme: Theme,
}

impl App {
    /// Build the shell with the given layout preferences.
    pub(crate) fn new(config: LayoutConfig) -> (Self, Task<AppEvent>) {
        let host = DesktopHost::new(Viewport::new(
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
        ));
        let navigation = NavigationWidget::new(config, host)
            .expect("built-in page registry is valid");

        let app = Self {
            widgets: Widgets {
                navigation,
                chrome: ChromeWidget::new(),
                input: InputWidget::new(Box::new(DetachedSolver)),
                toast: ToastWidget::new(),
            },
            fonts: FontsConfig::default(),
            theme: Theme::Dark,
        };

        log::info!("{APP_TITLE} started");
        (app, Task::none())
    }

    /// Window title naming the visible page.
    pub(crate) fn title(&self) -> String {
        let page = self.widgets.navigation.visible_page();
        format!("{APP_TITLE} - {}", page.label())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.clone()
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

#[cfg(test)]
mod tests {
    use fpi_ui_layout::{LayoutConfig, RailMode, Slot};
    use iced::{Size, window};

    use super::{App, AppEvent};
    use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
    use crate::widgets::pages::PageKind;

    fn app() -> App {
        let (app, _) = App::new(LayoutConfig::default());
        app
    }

    #[test]
    fn given_default_window_when_started_then_first_page_and_docked_rail() {
        let app = app();

        assert_eq!(app.widgets.navigation.visible_page(), PageKind::Input);
        assert_eq!(app.widgets.navigation.render().mode, RailMode::Full);
        assert_eq!(app.title(), "Fixed-Point Iteration Method - Input");
    }

    #[test]
    fn given_portrait_resize_when_routed_then_panel_closes() {
        let mut app = app();

        let _ = app.update(AppEvent::Window(window::Event::Resized(
            Size::new(400.0, 800.0),
        )));

        let layout = app.widgets.navigation.layout();
        assert!(!layout.state().panel_visible);
        assert_eq!(layout.render().mode, RailMode::Overlay);
    }

    #[test]
    fn given_rail_click_when_routed_then_visible_page_and_title_change() {
        let mut app = app();

        let _ = app.update(AppEvent::Navigation(NavigationEvent::Intent(
            NavigationIntent::Select { index: 4 },
        )));

        assert_eq!(app.widgets.navigation.visible_page(), PageKind::Info);
        assert_eq!(app.title(), "Fixed-Point Iteration Method - Info");
    }

    #[test]
    fn given_portrait_overlay_when_dismiss_surface_routed_then_panel_closes() {
        let mut app = app();
        let _ = app.update(AppEvent::Window(window::Event::Resized(
            Size::new(400.0, 800.0),
        )));
        let _ = app.update(AppEvent::Navigation(NavigationEvent::Intent(
            NavigationIntent::ToggleNavigation,
        )));
        assert!(
            app.widgets
                .navigation
                .render()
                .has_slot(Slot::DismissSurface)
        );

        let _ = app.update(AppEvent::Navigation(NavigationEvent::Intent(
            NavigationIntent::DismissOverlay,
        )));

        let layout = app.widgets.navigation.layout();
        assert!(!layout.state().panel_visible);
        assert!(!layout.render().has_slot(Slot::DismissSurface));
    }
}
