pub(crate) mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ChromeEffect, ChromeEvent, ChromeIntent};

/// App bar with the menu button, history arrows and layout toggles.
#[derive(Debug, Default)]
pub(crate) struct ChromeWidget;

impl ChromeWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce a chrome intent into effects for other widgets.
    pub(crate) fn reduce(&mut self, event: ChromeIntent) -> Task<ChromeEvent> {
        reducer::reduce(event)
    }
}
