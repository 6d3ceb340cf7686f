use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::input::{InputEffect, InputEvent, InputIntent};
use crate::widgets::toast::ToastEvent;

/// Route an input event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: InputEvent) -> Task<AppEvent> {
    match event {
        InputEvent::Intent(event) => route_intent(app, event),
        InputEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: InputIntent) -> Task<AppEvent> {
    app.widgets.input.reduce(event).map(AppEvent::Input)
}

fn route_effect(effect: InputEffect) -> Task<AppEvent> {
    match effect {
        InputEffect::Notify { message, level } => {
            Task::done(AppEvent::Toast(ToastEvent::Show { message, level }))
        },
    }
}
