use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::toast::ToastEvent;

/// Route a toast event to the toast widget.
pub(crate) fn route(app: &mut App, event: ToastEvent) -> Task<AppEvent> {
    app.widgets.toast.reduce(event).map(AppEvent::Toast)
}
