use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeIntent};
use crate::widgets::navigation::{
    HistoryDirection, NavigationEvent, NavigationIntent,
};

/// Route a chrome event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(event) => route_intent(app, event),
        ChromeEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: ChromeIntent) -> Task<AppEvent> {
    app.widgets.chrome.reduce(event).map(AppEvent::Chrome)
}

fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    let intent = match effect {
        ChromeEffect::ToggleNavigation => NavigationIntent::ToggleNavigation,
        ChromeEffect::HistoryBack => {
            NavigationIntent::History(HistoryDirection::Back)
        },
        ChromeEffect::HistoryForward => {
            NavigationIntent::History(HistoryDirection::Forward)
        },
        ChromeEffect::ToggleIconsOnly => NavigationIntent::ToggleIconsOnly,
        ChromeEffect::ToggleMenuExtended => {
            NavigationIntent::ToggleMenuExtended
        },
    };
    Task::done(AppEvent::Navigation(NavigationEvent::Intent(intent)))
}
