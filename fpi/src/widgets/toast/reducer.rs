use iced::Task;

use super::event::ToastEvent;
use super::state::ToastState;

/// Reduce a toast event into state mutation.
pub(crate) fn reduce(
    state: &mut ToastState,
    event: ToastEvent,
) -> Task<ToastEvent> {
    match event {
        ToastEvent::Show { message, level } => {
            log::debug!("toast ({level:?}): {message}");
            state.push(message, level);
        },
        ToastEvent::Dismiss { id } => {
            if !state.remove(id) {
                log::debug!("toast {id} already gone");
            }
        },
        ToastEvent::Tick => state.tick(),
    }

    Task::none()
}
