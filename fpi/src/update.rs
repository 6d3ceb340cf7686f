use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::Chrome(event) => routers::chrome::route(app, event),
        AppEvent::Input(event) => routers::input::route(app, event),
        AppEvent::Toast(event) => routers::toast::route(app, event),
        AppEvent::Keyboard(event) => routers::keyboard::route(event),
        AppEvent::Window(event) => routers::window::route(app, event),
    }
}
