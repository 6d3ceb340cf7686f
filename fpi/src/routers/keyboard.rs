use iced::Task;
use iced::keyboard::{self, Key, Modifiers, key::Named};

use crate::app::AppEvent;
use crate::widgets::navigation::{
    HistoryDirection, NavigationEvent, NavigationIntent,
};

/// Map global shortcuts to navigation intents.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match shortcut(&key, modifiers) {
        Some(intent) => {
            Task::done(AppEvent::Navigation(NavigationEvent::Intent(intent)))
        },
        None => Task::none(),
    }
}

fn shortcut(key: &Key, modifiers: Modifiers) -> Option<NavigationIntent> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) if modifiers.alt() => {
            Some(NavigationIntent::History(HistoryDirection::Back))
        },
        Key::Named(Named::ArrowRight) if modifiers.alt() => {
            Some(NavigationIntent::History(HistoryDirection::Forward))
        },
        Key::Named(Named::Escape) => Some(NavigationIntent::CloseOverlay),
        Key::Character("b") if modifiers.command() => {
            Some(NavigationIntent::ToggleNavigation)
        },
        _ => None,
    }
}
