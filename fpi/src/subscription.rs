use std::time::Duration;

use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::widgets::toast::{TOAST_TICK_MS, ToastEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Expiry ticks only while toasts are on screen.
    if app.widgets.toast.has_toasts() {
        let tick = iced::time::every(Duration::from_millis(TOAST_TICK_MS))
            .map(|_| AppEvent::Toast(ToastEvent::Tick));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
