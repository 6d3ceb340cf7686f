use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::navigation::NavigationIntent;

/// Forward window size changes to the navigation layout.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            app.widgets
                .navigation
                .reduce(NavigationIntent::Resized {
                    width: size.width,
                    height: size.height,
                })
                .map(AppEvent::Navigation)
        },
        _ => Task::none(),
    }
}
